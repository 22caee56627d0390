pub mod test_merkle;

use std::collections::HashMap;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use crate::engine::TokenStore;
use crate::error::MerkleAirdropError;

/// Asserts that `err` carries the code of `expected`
pub fn assert_airdrop_error(err: Error, expected: MerkleAirdropError) {
    match err {
        Error::AnchorError(anchor_err) => assert_eq!(
            anchor_err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            anchor_err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// In-memory token ledger; transfers debit the store's own balance
#[derive(Debug, Clone)]
pub struct MockTokenStore {
    address: Pubkey,
    balances: HashMap<Pubkey, u64>,
}

impl MockTokenStore {
    pub fn funded(amount: u64) -> Self {
        let address = Pubkey::new_unique();
        let mut balances = HashMap::new();
        balances.insert(address, amount);
        Self { address, balances }
    }

    pub fn with_address(address: Pubkey) -> Self {
        Self {
            address,
            balances: HashMap::new(),
        }
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }
}

impl TokenStore for MockTokenStore {
    fn address(&self) -> Pubkey {
        self.address
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let held = self.balance_of(&self.address);
        if held < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }
        self.balances.insert(self.address, held - amount);
        *self.balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }
}
