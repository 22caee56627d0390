pub mod create_airdrop;
pub mod claim_airdrop;

pub use create_airdrop::*;
pub use claim_airdrop::*;
