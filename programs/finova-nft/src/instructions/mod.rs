pub mod mint_card;
pub mod use_card;

pub use mint_card::*;
pub use use_card::*;
