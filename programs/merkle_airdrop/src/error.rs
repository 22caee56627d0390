use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleAirdropError {
    // Claim errors
    #[msg("Must hold qualifying token to claim")]
    Ineligible,
    #[msg("Airdrop already claimed")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Token settlement failed")]
    SettlementFailed,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,

    // Configuration errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid token store")]
    InvalidTokenStore,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
}
