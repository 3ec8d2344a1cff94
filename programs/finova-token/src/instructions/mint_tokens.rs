use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::*;
use crate::errors::FinovaTokenError;
use crate::events::RewardsMinted;
use crate::state::*;

#[derive(Accounts)]
pub struct MintRewards<'info> {
    #[account(mut, seeds = [SEED_MINT_INFO], bump = mint_info.bump)]
    pub mint_info: Account<'info, MintInfo>,

    #[account(mut, address = mint_info.mint)]
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA owned by this program, used only to sign the inner SPL
    /// `mint_to` CPI below.
    #[account(seeds = [SEED_MINT_AUTHORITY], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// A PDA owned by the Finova Core program. It carries no data and is
    /// never the SPL mint authority; its only purpose is to be a signer
    /// that nothing but Core's own `invoke_signed` can produce, since a
    /// PDA's signature is only valid for the program whose id derived it.
    #[account(address = mint_info.core_authority @ FinovaTokenError::UnauthorizedCaller)]
    pub core_authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Mints `amount` base units into `recipient_token_account`. The
/// `core_authority` constraint means this only ever succeeds when invoked
/// via CPI from the Finova Core program, which alone decides how much any
/// user has accrued.
pub fn mint_rewards(ctx: Context<MintRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, FinovaTokenError::InvalidAmount);

    let mint_info = &mut ctx.accounts.mint_info;
    let new_total = mint_info
        .total_minted
        .checked_add(amount)
        .ok_or(FinovaTokenError::MathOverflow)?;
    require!(
        new_total <= mint_info.max_supply,
        FinovaTokenError::SupplyCapReached
    );
    mint_info.total_minted = new_total;

    let bump = ctx.bumps.mint_authority;
    let seeds: &[&[u8]] = &[SEED_MINT_AUTHORITY, &[bump]];
    let signer_seeds = &[seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RewardsMinted {
        recipient_token_account: ctx.accounts.recipient_token_account.key(),
        amount,
        total_minted: mint_info.total_minted,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
