use anchor_lang::prelude::*;

declare_id!("FinTokenProgramId11111111111111111111111111");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

/// Token Mint Authority: the only program permitted to hold the $FIN
/// mint's authority. Every mint is gated behind a CPI from the Finova
/// Core program, which is the sole source of truth for how much any user
/// has earned.
#[program]
pub mod finova_token {
    use super::*;

    pub fn initialize_mint(
        ctx: Context<InitializeMint>,
        core_authority: Pubkey,
        max_supply: u64,
    ) -> Result<()> {
        instructions::initialize_mint::initialize_mint(ctx, core_authority, max_supply)
    }

    pub fn mint_rewards(ctx: Context<MintRewards>, amount: u64) -> Result<()> {
        instructions::mint_tokens::mint_rewards(ctx, amount)
    }
}
