use anchor_lang::prelude::*;

declare_id!("8EnyWsgjiUF7vMV6uNjt96KCFCcdKDDcTn6rT92pEejr");

pub mod constants;
pub mod engine;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Airdrop Program
 *
 * Distributes a fixed supply of tokens to a predetermined set of recipients.
 * The recipient list is never stored on-chain: the airdrop commits to a single
 * merkle root over (claimant, amount) leaves and every claim carries its own
 * membership proof.
 *
 * Key Features:
 * - Double-hashed leaves with sorted-pair merkle verification
 * - Claim amount bound to the claimant's leaf (no partial or over-claims)
 * - Eligibility gate: claimant must hold at least one qualifying token
 * - One claim per address, enforced by a per-claimant ledger PDA
 * - Immutable merkle root, fixed at creation
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: Stores the committed root, mints and claim totals
 * - Token Vault PDA: Holds the pre-funded tokens to be distributed
 * - Claim Status PDAs: Record whether each claimant has settled
 *
 * Workflow:
 * 1. Owner creates the airdrop with its merkle root and funds the vault
 * 2. Eligible recipients claim with (amount, proof)
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates a new merkle airdrop
     *
     * Commits the merkle root, records the qualifying gate mint and moves the
     * initial funding from the owner into a vault controlled by the airdrop PDA.
     *
     * @param ctx - Account context containing airdrop, vault, mints and owner accounts
     * @param merkle_root - 32-byte root over all (claimant, amount) leaves
     * @param initial_total_amount - Amount of tokens deposited for distribution
     *
     * Access Control: Owner only
     */
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        merkle_root: [u8; 32],
        initial_total_amount: u64,
    ) -> Result<()> {
        handle_create_airdrop(ctx, merkle_root, initial_total_amount)
    }

    /**
     * Claims the caller's allocation with merkle proof verification
     *
     * @param ctx - Account context containing airdrop, claim status, gate and token accounts
     * @param amount - Amount committed to the caller in the merkle tree
     * @param proof - Array of 32-byte sibling hashes from leaf to root
     *
     * Access Control: Any signer holding a qualifying token with a valid proof
     */
    pub fn claim_airdrop(ctx: Context<ClaimAirdrop>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim_airdrop(ctx, amount, proof)
    }
}
