use anchor_lang::prelude::*;

use crate::engine::ClaimLedger;

/**
 * Individual claim status account
 *
 * The on-chain ledger entry for one claimant of one airdrop. `is_claimed`
 * moves from false to true on the first successful claim and never back;
 * the account is never closed, so a settled claimant can not start over
 * with a fresh entry.
 *
 * Derivation: ["claim", airdrop_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed)
 * 2. Marked claimed when the claim settles
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Claimant this entry belongs to
    pub claimant: Pubkey,
    /// Whether the claimant has settled
    pub is_claimed: bool,
    /// Amount settled to the claimant
    pub claimed_amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}

// One account per claimant; the PDA seeds bind it to the signer.
impl ClaimLedger for ClaimStatus {
    fn is_claimed(&self, _claimant: &Pubkey) -> bool {
        self.is_claimed
    }

    fn mark_claimed(&mut self, claimant: &Pubkey, amount: u64) {
        self.claimant = *claimant;
        self.is_claimed = true;
        self.claimed_amount = amount;
    }

    fn revert_claim(&mut self, _claimant: &Pubkey) {
        *self = ClaimStatus::default();
    }
}
