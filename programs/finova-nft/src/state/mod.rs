use anchor_lang::prelude::*;

use finova_core::state::EffectKind;

/// On-chain metadata for one special card NFT. `uses_remaining` decrements
/// on each `use_card`; the card (and its backing SPL mint) is burned when
/// it hits zero.
#[account]
pub struct Card {
    pub version: u8,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub kind: EffectKind,
    pub magnitude_micro: u64,
    pub duration_seconds: i64,
    pub stackable: bool,
    pub uses_remaining: u8,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl Card {
    pub const SIZE: usize = 8 + 1 + 32 + 32 + 1 + 8 + 8 + 1 + 1 + 1 + 32;
}
