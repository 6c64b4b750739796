// Formula module - tokens, the token sequence store, and evaluation

pub mod eval;
pub mod store;
pub mod token;

pub use eval::evaluate;
pub use store::TokenSequence;
pub use token::{Token, OPERATORS};
