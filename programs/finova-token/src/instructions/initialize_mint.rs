use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::*;
use crate::events::MintInfoInitialized;
use crate::state::*;

#[derive(Accounts)]
pub struct InitializeMint<'info> {
    #[account(
        init,
        payer = payer,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint_authority,
        seeds = [SEED_MINT_AUTHORITY, b"mint"],
        bump
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA, validated by seeds; holds SPL mint authority on behalf
    /// of the Finova Core program.
    #[account(seeds = [SEED_MINT_AUTHORITY], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = MintInfo::SIZE,
        seeds = [SEED_MINT_INFO],
        bump
    )]
    pub mint_info: Account<'info, MintInfo>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// `core_authority` is the address of the Finova Core program's PDA
/// (derived off-chain as `find_program_address([SEED_CORE_MINT_AUTHORITY], core_program_id)`)
/// that will later sign every `mint_rewards` CPI.
pub fn initialize_mint(
    ctx: Context<InitializeMint>,
    core_authority: Pubkey,
    max_supply: u64,
) -> Result<()> {
    let mint_info = &mut ctx.accounts.mint_info;
    mint_info.version = 1;
    mint_info.mint = ctx.accounts.mint.key();
    mint_info.core_authority = core_authority;
    mint_info.max_supply = max_supply;
    mint_info.total_minted = 0;
    mint_info.bump = ctx.bumps.mint_info;
    mint_info.reserved = [0; 32];

    emit!(MintInfoInitialized {
        mint: ctx.accounts.mint.key(),
        max_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
