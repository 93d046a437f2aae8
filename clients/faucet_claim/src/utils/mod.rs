pub mod token;
pub mod transaction;

pub use token::*;
pub use transaction::*;
