use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use anchor_spl::{token, token_2022};

use crate::constants::MIN_QUALIFYING_BALANCE;
use crate::engine::OwnershipGate;

/// Snapshot of the token account a claimant presents as their qualifying holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holding {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl From<&TokenAccount> for Holding {
    fn from(account: &TokenAccount) -> Self {
        Self {
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
        }
    }
}

/// Parses a token account of either token program; anything else yields None
pub fn read_holding(info: &AccountInfo) -> Option<Holding> {
    if *info.owner != token::ID && *info.owner != token_2022::ID {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    let account = TokenAccount::try_deserialize(&mut &data[..]).ok()?;
    Some(Holding::from(&account))
}

/**
 * Ownership gate backed by a token account
 *
 * A claimant qualifies when the presented account is for the gate mint, is
 * owned by the claimant and holds at least MIN_QUALIFYING_BALANCE. A missing
 * account simply does not qualify; it is never an account validation failure.
 *
 * The gate mint is meant to be fungible or semi-fungible (a membership or
 * pass token). Every NFT has its own mint, so an NFT mint admits one holder.
 */
#[derive(Debug, Clone, Copy)]
pub struct TokenAccountGate {
    gate_mint: Pubkey,
    holding: Option<Holding>,
}

impl TokenAccountGate {
    pub fn new(gate_mint: Pubkey, holding: Option<Holding>) -> Self {
        Self { gate_mint, holding }
    }
}

impl OwnershipGate for TokenAccountGate {
    fn owns_qualifying_asset(&self, owner: &Pubkey) -> bool {
        match self.holding {
            Some(holding) => {
                holding.mint == self.gate_mint
                    && holding.owner == *owner
                    && holding.amount >= MIN_QUALIFYING_BALANCE
            }
            None => false,
        }
    }
}
