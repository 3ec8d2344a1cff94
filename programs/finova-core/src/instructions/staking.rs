use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::StakeChanged;
use crate::state::*;

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        mut,
        seeds = [SEED_STAKING, authority.key().as_ref()],
        bump = staking_state.bump,
        constraint = staking_state.owner == authority.key() @ FinovaError::Unauthorized
    )]
    pub staking_state: Account<'info, StakingState>,

    #[account(mut)]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.staking_state.deposit(amount, now)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_token_account.to_account_info(),
                to: ctx.accounts.vault_token_account.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(StakeChanged {
        user: ctx.accounts.authority.key(),
        staked_delta: amount as i64,
        new_total_staked: ctx.accounts.staking_state.staked,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        mut,
        seeds = [SEED_STAKING, authority.key().as_ref()],
        bump = staking_state.bump,
        constraint = staking_state.owner == authority.key() @ FinovaError::Unauthorized
    )]
    pub staking_state: Account<'info, StakingState>,

    #[account(mut)]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA vault authority, validated by seeds.
    #[account(seeds = [SEED_STAKING], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let payout = ctx.accounts.staking_state.withdraw(amount, now)?;

    let bump = ctx.bumps.vault_authority;
    let seeds: &[&[u8]] = &[SEED_STAKING, &[bump]];
    let signer_seeds = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault_token_account.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        payout,
    )?;

    emit!(StakeChanged {
        user: ctx.accounts.authority.key(),
        staked_delta: -(amount as i64),
        new_total_staked: ctx.accounts.staking_state.staked,
        timestamp: now,
    });

    Ok(())
}
