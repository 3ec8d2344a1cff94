pub mod initialize_mint;
pub mod mint_tokens;

pub use initialize_mint::*;
pub use mint_tokens::*;
