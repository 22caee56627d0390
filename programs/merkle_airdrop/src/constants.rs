use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and verification limits used throughout the merkle airdrop program.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", owner, token_mint, merkle_root]
/// - One airdrop per (owner, token, root) combination
#[constant]
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault's token authority is the airdrop PDA
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", airdrop_key, claimant_key]
/// - One ledger entry per (airdrop, claimant) pair
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== VERIFICATION CONSTANTS =====

/// Longest accepted merkle proof
/// - A tree of depth 32 covers 2^32 recipients
/// - Longer proofs are rejected before any hashing
pub const MAX_PROOF_LEN: usize = 32;

/// Minimum balance of the gate mint a claimant must hold
pub const MIN_QUALIFYING_BALANCE: u64 = 1;
