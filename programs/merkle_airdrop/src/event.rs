use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
pub struct AirdropCreated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner who created and funded the airdrop
    pub owner: Pubkey,
    /// Mint of the distributed token
    pub token_mint: Pubkey,
    /// Vault holding the distributed tokens
    pub token_vault: Pubkey,
    /// Mint a claimant must hold to be eligible
    pub gate_mint: Pubkey,
    /// Committed merkle root
    pub merkle_root: [u8; 32],
    /// Amount of tokens deposited at creation
    pub initial_total_amount: u64,
}

/// Event emitted exactly once per settled claim
#[event]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessfulClaim {
    /// Address that claimed
    pub claimant: Pubkey,
    /// Amount transferred to the claimant
    pub amount: u64,
}
