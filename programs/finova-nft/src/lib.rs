// programs/finova-nft/src/lib.rs

use anchor_lang::prelude::*;

declare_id!("FinovaNFT1111111111111111111111111111111111");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use finova_core::state::EffectKind;
use instructions::*;

#[program]
pub mod finova_nft {
    use super::*;

    /// Mints a single-use (or multi-use) special card NFT carrying one
    /// active-effect boost, custodied by `owner`.
    pub fn mint_card(
        ctx: Context<MintCard>,
        kind: EffectKind,
        magnitude_micro: u64,
        duration_seconds: i64,
        uses: u8,
        stackable: bool,
    ) -> Result<()> {
        instructions::mint_card(ctx, kind, magnitude_micro, duration_seconds, uses, stackable)
    }

    /// Consumes one use of a card, applying its effect to the owner via
    /// CPI into Finova Core, burning the card once its uses are spent.
    pub fn use_card(ctx: Context<UseCard>) -> Result<()> {
        instructions::use_card(ctx)
    }
}
