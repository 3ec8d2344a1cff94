use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::RewardsMinted;
use crate::instructions::activity::composite_rate_micro_per_sec;
use crate::state::*;

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(seeds = [SEED_NETWORK_STATE], bump = network_state.bump)]
    pub network_state: Account<'info, NetworkState>,

    #[account(
        seeds = [SEED_USER, authority.key().as_ref()],
        bump = user_state.bump,
        constraint = user_state.authority == authority.key() @ FinovaError::Unauthorized
    )]
    pub user_state: Account<'info, UserState>,

    #[account(seeds = [SEED_XP, authority.key().as_ref()], bump = xp_state.bump)]
    pub xp_state: Account<'info, XpState>,

    #[account(seeds = [SEED_REFERRAL, authority.key().as_ref()], bump = referral_state.bump)]
    pub referral_state: Account<'info, ReferralState>,

    #[account(
        mut,
        seeds = [SEED_STAKING, authority.key().as_ref()],
        bump = staking_state.bump,
        constraint = staking_state.owner == authority.key() @ FinovaError::Unauthorized
    )]
    pub staking_state: Account<'info, StakingState>,

    #[account(seeds = [SEED_EFFECTS, authority.key().as_ref()], bump = active_effects.bump)]
    pub active_effects: Account<'info, ActiveEffects>,

    #[account(
        mut,
        seeds = [SEED_MINING, authority.key().as_ref()],
        bump = mining_accrual.bump,
        constraint = mining_accrual.owner == authority.key() @ FinovaError::Unauthorized
    )]
    pub mining_accrual: Account<'info, MiningAccrual>,

    #[account(mut)]
    pub mint_info: Account<'info, finova_token::state::MintInfo>,

    #[account(mut, address = mint_info.mint)]
    pub mint: Account<'info, anchor_spl::token::Mint>,

    /// CHECK: the token program's own internal signing PDA, passed through
    /// untouched; this program never signs with it.
    pub token_mint_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// CHECK: this program's own PDA, signed via `invoke_signed` below.
    /// Only this program's id can produce a valid signature for it, which
    /// is what authenticates the CPI to the token program.
    #[account(seeds = [SEED_CORE_MINT_AUTHORITY], bump)]
    pub core_authority: UncheckedAccount<'info>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub finova_token_program: Program<'info, finova_token::program::FinovaToken>,
}

/// Settles mining accrual to now at the composite rate, folds in any
/// accrued staking reward, and mints the combined total to the user via
/// CPI into the Token Mint Authority program, the only program that
/// actually holds SPL mint authority.
pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
    let network = &ctx.accounts.network_state;
    require!(!network.paused, FinovaError::Paused);

    let now = Clock::get()?.unix_timestamp;
    let rate = composite_rate_micro_per_sec(
        network,
        &ctx.accounts.user_state,
        &ctx.accounts.xp_state,
        &ctx.accounts.referral_state,
        &ctx.accounts.staking_state,
        &ctx.accounts.active_effects,
        now,
    )?;
    ctx.accounts.mining_accrual.settle(
        rate,
        now,
        network.phase.daily_token_cap_base_units(),
    )?;
    ctx.accounts.staking_state.settle(now)?;

    let mining_amount = ctx.accounts.mining_accrual.take();
    let staking_amount = ctx.accounts.staking_state.take_pending_rewards();
    let amount = mining_amount
        .checked_add(staking_amount)
        .ok_or(FinovaError::MathOverflow)?;
    require!(amount > 0, FinovaError::NothingToClaim);

    let bump = ctx.bumps.core_authority;
    let seeds: &[&[u8]] = &[SEED_CORE_MINT_AUTHORITY, &[bump]];
    let signer_seeds = &[seeds];

    let cpi_accounts = finova_token::cpi::accounts::MintRewards {
        mint_info: ctx.accounts.mint_info.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        mint_authority: ctx.accounts.token_mint_authority.to_account_info(),
        recipient_token_account: ctx.accounts.recipient_token_account.to_account_info(),
        core_authority: ctx.accounts.core_authority.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.finova_token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    finova_token::cpi::mint_rewards(cpi_ctx, amount).map_err(|_| FinovaError::MintCpiFailed)?;

    emit!(RewardsMinted {
        user: ctx.accounts.authority.key(),
        amount_base_units: amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
