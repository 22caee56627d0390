use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::constants::MAX_PROOF_LEN;
use crate::error::MerkleAirdropError;
use crate::event::SuccessfulClaim;
use crate::utils::merkle::{hash_leaf, verify};

/// Answers whether an address holds a qualifying asset. Must be side-effect free.
pub trait OwnershipGate {
    fn owns_qualifying_asset(&self, owner: &Pubkey) -> bool;
}

impl<F> OwnershipGate for F
where
    F: Fn(&Pubkey) -> bool,
{
    fn owns_qualifying_asset(&self, owner: &Pubkey) -> bool {
        self(owner)
    }
}

/// Holder of the distributed balance. The engine only ever debits its own holdings.
pub trait TokenStore {
    /// Address the store is known by; the default key is never a valid store.
    fn address(&self) -> Pubkey;

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Per-claimant claimed flag.
///
/// Only `process_claim` writes to a ledger; `revert_claim` exists solely to
/// undo a mark whose settlement did not complete.
pub trait ClaimLedger {
    fn is_claimed(&self, claimant: &Pubkey) -> bool;

    fn mark_claimed(&mut self, claimant: &Pubkey, amount: u64);

    fn revert_claim(&mut self, claimant: &Pubkey);
}

impl ClaimLedger for HashMap<Pubkey, bool> {
    fn is_claimed(&self, claimant: &Pubkey) -> bool {
        self.get(claimant).copied().unwrap_or(false)
    }

    fn mark_claimed(&mut self, claimant: &Pubkey, _amount: u64) {
        self.insert(*claimant, true);
    }

    fn revert_claim(&mut self, claimant: &Pubkey) {
        self.remove(claimant);
    }
}

/// Validates the construction-time configuration of an airdrop.
pub fn validate_config(token_store: &Pubkey, merkle_root: &[u8; 32]) -> Result<()> {
    require!(*merkle_root != [0; 32], MerkleAirdropError::InvalidMerkleRoot);
    require!(
        *token_store != Pubkey::default(),
        MerkleAirdropError::InvalidTokenStore
    );
    Ok(())
}

/**
 * Runs one claim through gate, replay check, proof verification and settlement
 *
 * @param merkle_root - Committed root the proof must reach
 * @param claimant - Authenticated caller; never taken from instruction data
 * @param amount - Amount committed to the claimant's leaf
 * @param proof - Sibling hashes from the claimant's leaf to the root
 *
 * Checks run in a fixed order and each reports its own error:
 * 1. Ownership gate (Ineligible)
 * 2. Ledger replay (AlreadyClaimed)
 * 3. Amount and proof shape (InvalidAmount / InvalidProof)
 * 4. Merkle verification (InvalidProof)
 *
 * Settlement marks the ledger before the transfer; a failed transfer reverts
 * the mark and surfaces SettlementFailed, leaving the ledger untouched.
 */
pub fn process_claim<L, G, S>(
    merkle_root: &[u8; 32],
    claimant: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    ledger: &mut L,
    gate: &G,
    store: &mut S,
) -> Result<SuccessfulClaim>
where
    L: ClaimLedger + ?Sized,
    G: OwnershipGate + ?Sized,
    S: TokenStore + ?Sized,
{
    // ===== VALIDATION PHASE =====

    require!(
        gate.owns_qualifying_asset(claimant),
        MerkleAirdropError::Ineligible
    );

    require!(
        !ledger.is_claimed(claimant),
        MerkleAirdropError::AlreadyClaimed
    );

    require!(amount > 0, MerkleAirdropError::InvalidAmount);
    require!(proof.len() <= MAX_PROOF_LEN, MerkleAirdropError::InvalidProof);

    // ===== MERKLE PROOF VERIFICATION =====

    let leaf = hash_leaf(claimant, amount);
    require!(
        verify(proof, merkle_root, leaf),
        MerkleAirdropError::InvalidProof
    );

    // ===== EFFECTS PHASE =====

    ledger.mark_claimed(claimant, amount);

    // ===== INTERACTIONS PHASE =====

    if let Err(err) = store.transfer(claimant, amount) {
        ledger.revert_claim(claimant);
        msg!("Settlement of {} to {} failed: {}", amount, claimant, err);
        return err!(MerkleAirdropError::SettlementFailed);
    }

    msg!("Claimed {} for {}", amount, claimant);

    Ok(SuccessfulClaim {
        claimant: *claimant,
        amount,
    })
}

/**
 * Host-side claim engine
 *
 * Owns the committed root, the token store and an in-memory claim ledger.
 * `claim_airdrop` takes `&mut self`, so claims against one engine are always
 * serialized; hosts sharing an engine across threads wrap it in a lock.
 */
#[derive(Debug)]
pub struct ClaimEngine<S> {
    merkle_root: [u8; 32],
    token_store: S,
    ledger: HashMap<Pubkey, bool>,
}

impl<S: TokenStore> ClaimEngine<S> {
    pub fn new(token_store: S, merkle_root: [u8; 32]) -> Result<Self> {
        validate_config(&token_store.address(), &merkle_root)?;
        Ok(Self {
            merkle_root,
            token_store,
            ledger: HashMap::new(),
        })
    }

    /// Settles `caller`'s allocation. `caller` must come from the host's
    /// authenticated execution context.
    pub fn claim_airdrop<G>(
        &mut self,
        caller: &Pubkey,
        gate: &G,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<SuccessfulClaim>
    where
        G: OwnershipGate + ?Sized,
    {
        process_claim(
            &self.merkle_root,
            caller,
            amount,
            proof,
            &mut self.ledger,
            gate,
            &mut self.token_store,
        )
    }

    pub fn merkle_root(&self) -> &[u8; 32] {
        &self.merkle_root
    }

    pub fn is_claimed(&self, claimant: &Pubkey) -> bool {
        self.ledger.is_claimed(claimant)
    }

    pub fn token_store(&self) -> &S {
        &self.token_store
    }
}
