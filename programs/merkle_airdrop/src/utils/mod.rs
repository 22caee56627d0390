pub mod gate;
pub mod merkle;
pub mod token;

pub use gate::*;
pub use merkle::*;
pub use token::*;
