use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine::process_claim;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{read_holding, TokenAccountGate, VaultStore};

/**
 * Account context for claiming an airdrop allocation
 *
 * The claimant proves membership of (claimant, amount) in the airdrop's
 * merkle root and presents their qualifying token holding. On success the
 * claim status is marked and the amount moves from the vault to the claimant.
 *
 * Access Control: Any signer; eligibility is decided by the gate and the proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    /// The airdrop being claimed from
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub airdrop: Account<'info, MerkleAirdrop>,

    /// Ledger entry for this claimant
    /// - Derived from: ["claim", airdrop_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// CHECK: Parsed during settlement; must be a token_mint account owned by the claimant
    #[account(mut)]
    pub claimant_token_account: UncheckedAccount<'info>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ MerkleAirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Claimant's holding of the gate mint
    /// CHECK: Parsed by the gate; a missing, foreign or malformed account fails the gate
    pub gate_token_account: Option<UncheckedAccount<'info>>,

    /// The claimant; the only source of the caller identity
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim for the signer's allocation
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount committed to the claimant's leaf
 * @param proof - Sibling hashes from the claimant's leaf to the root
 */
pub fn handle_claim_airdrop(
    ctx: Context<ClaimAirdrop>,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let airdrop_key = ctx.accounts.airdrop.key();
    let merkle_root = ctx.accounts.airdrop.merkle_root;

    let gate = TokenAccountGate::new(
        ctx.accounts.airdrop.gate_mint,
        ctx.accounts
            .gate_token_account
            .as_ref()
            .and_then(|account| read_holding(account)),
    );

    // Vault authority signs with the airdrop PDA seeds
    let bump = [ctx.accounts.airdrop.bump];
    let seeds = ctx.accounts.airdrop.signer_seeds(&bump);
    let signer = &[&seeds[..]];

    let mut store = VaultStore {
        authority: ctx.accounts.airdrop.to_account_info(),
        vault: &ctx.accounts.token_vault,
        destination: ctx.accounts.claimant_token_account.to_account_info(),
        mint: &ctx.accounts.token_mint,
        token_program: &ctx.accounts.token_program,
        signer_seeds: signer,
    };

    let settled = process_claim(
        &merkle_root,
        &claimant,
        amount,
        &proof,
        &mut *ctx.accounts.claim_status,
        &gate,
        &mut store,
    )?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.total_claimed = airdrop
        .total_claimed
        .checked_add(settled.amount)
        .ok_or(MerkleAirdropError::ArithmeticOverflow)?;

    msg!(
        "Airdrop {} total claimed: {}",
        airdrop_key,
        airdrop.total_claimed
    );

    emit_cpi!(SuccessfulClaim {
        claimant: settled.claimant,
        amount: settled.amount,
    });

    Ok(())
}
