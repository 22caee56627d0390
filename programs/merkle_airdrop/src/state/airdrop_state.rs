use anchor_lang::prelude::*;

/**
 * Main airdrop state account
 *
 * Holds the immutable commitment of a distribution campaign: the merkle root
 * over every (claimant, amount) leaf, the distributed mint and the gate mint
 * a claimant must hold.
 *
 * Derivation: ["airdrop", owner, token_mint, merkle_root]
 *
 * Lifecycle:
 * 1. Created during create_airdrop instruction
 * 2. total_claimed advanced by each successful claim
 *
 * There is no instruction that rewrites merkle_root.
 */
#[account]
#[derive(Default, Debug)]
pub struct MerkleAirdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Owner who created and funded the airdrop
    pub owner: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault", airdrop_key]
    /// - Token authority is this airdrop PDA
    pub token_vault: Pubkey,

    /// Mint of the qualifying token
    /// - A claimant must hold at least one unit to be eligible
    pub gate_mint: Pubkey,

    /// Merkle root committed at creation
    pub merkle_root: [u8; 32],

    /// Amount of tokens deposited at creation
    pub initial_total_amount: u64,

    /// Total amount of tokens settled to claimants
    pub total_claimed: u64,
}

impl MerkleAirdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<MerkleAirdrop>();

    /// PDA seeds for signing as the vault authority
    pub fn signer_seeds<'a>(&'a self, bump: &'a [u8; 1]) -> [&'a [u8]; 5] {
        [
            crate::constants::AIRDROP_SEED.as_bytes(),
            self.owner.as_ref(),
            self.token_mint.as_ref(),
            self.merkle_root.as_ref(),
            bump,
        ]
    }
}
