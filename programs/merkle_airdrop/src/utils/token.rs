use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::engine::TokenStore;
use crate::utils::gate::{read_holding, Holding};
use crate::error::MerkleAirdropError;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Checks that a settlement destination is a `token_mint` account owned by `claimant`.
pub fn check_destination(holding: &Holding, token_mint: &Pubkey, claimant: &Pubkey) -> Result<()> {
    require_keys_eq!(holding.mint, *token_mint, MerkleAirdropError::SettlementFailed);
    require_keys_eq!(holding.owner, *claimant, MerkleAirdropError::SettlementFailed);
    Ok(())
}

/**
 * Token store backed by the airdrop vault
 *
 * Debits the vault into the claimant's token account, signing as the airdrop
 * PDA. The destination arrives unchecked and is only parsed here, so a
 * missing or foreign account surfaces as a settlement error after the gate,
 * replay and proof checks. The vault balance is checked before the CPI so an
 * underfunded airdrop fails with a settlement error instead of a token
 * program error.
 */
pub struct VaultStore<'a, 'info> {
    pub authority: AccountInfo<'info>,
    pub vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub destination: AccountInfo<'info>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> VaultStore<'a, 'info> {
    fn destination_holding(&self) -> Result<Holding> {
        require_keys_eq!(
            *self.destination.owner,
            self.token_program.key(),
            MerkleAirdropError::SettlementFailed
        );
        read_holding(&self.destination).ok_or_else(|| error!(MerkleAirdropError::SettlementFailed))
    }
}

impl<'a, 'info> TokenStore for VaultStore<'a, 'info> {
    fn address(&self) -> Pubkey {
        self.vault.key()
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        check_destination(&self.destination_holding()?, &self.mint.key(), to)?;
        require!(self.vault.amount >= amount, MerkleAirdropError::SettlementFailed);

        transfer_token(
            self.authority.clone(),
            self.vault.to_account_info(),
            self.destination.clone(),
            self.mint.to_account_info(),
            self.token_program.to_account_info(),
            amount,
            self.mint.decimals,
            Some(self.signer_seeds),
        )
    }
}
