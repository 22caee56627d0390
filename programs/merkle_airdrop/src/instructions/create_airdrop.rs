use crate::constants::*;
use crate::engine::validate_config;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new merkle airdrop
 *
 * This instruction initializes an airdrop with an immutable merkle root:
 * - Creates the airdrop PDA keyed by (owner, token_mint, merkle_root)
 * - Creates a token vault PDA to hold the tokens to be distributed
 * - Records the gate mint claimants must hold
 * - Transfers the initial token amount from owner to the vault
 *
 * Access Control: Only the owner can create and fund an airdrop
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(merkle_root: [u8; 32])]
pub struct CreateAirdrop<'info> {
    /// The airdrop account (PDA)
    /// - Stores the committed root and distribution totals
    /// - Derived from: ["airdrop", owner, token_mint, merkle_root]
    #[account(
        init,
        payer = owner,
        space = MerkleAirdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            owner.key().as_ref(),
            token_mint.key().as_ref(),
            merkle_root.as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, MerkleAirdrop>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Mint of the qualifying token claimants must hold
    /// - May belong to either token program
    pub gate_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the tokens to be deposited
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the airdrop
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new merkle airdrop and funds its vault
 *
 * @param ctx - The account context containing all required accounts
 * @param merkle_root - Root over all (claimant, amount) leaves
 * @param initial_total_amount - Tokens deposited for distribution
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    merkle_root: [u8; 32],
    initial_total_amount: u64,
) -> Result<()> {
    require!(
        initial_total_amount > 0,
        MerkleAirdropError::InvalidAmount
    );

    validate_config(&ctx.accounts.token_vault.key(), &merkle_root)?;

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.bump = ctx.bumps.airdrop;
    airdrop.owner = ctx.accounts.owner.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.gate_mint = ctx.accounts.gate_mint.key();
    airdrop.merkle_root = merkle_root;
    airdrop.initial_total_amount = initial_total_amount;
    // Note: total_claimed starts at 0

    // Owner-signed deposit into the vault
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    msg!(
        "Airdrop {} created with {} tokens",
        ctx.accounts.airdrop.key(),
        initial_total_amount
    );

    emit_cpi!(AirdropCreated {
        airdrop: ctx.accounts.airdrop.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        gate_mint: ctx.accounts.gate_mint.key(),
        merkle_root,
        initial_total_amount,
    });

    Ok(())
}
