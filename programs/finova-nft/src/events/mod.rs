use anchor_lang::prelude::*;

use finova_core::state::EffectKind;

#[event]
pub struct CardMinted {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub kind: EffectKind,
    pub magnitude_micro: u64,
    pub uses: u8,
}

#[event]
pub struct CardUsed {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub uses_remaining: u8,
}

#[event]
pub struct CardBurned {
    pub mint: Pubkey,
    pub owner: Pubkey,
}
