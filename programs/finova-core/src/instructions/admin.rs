use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::Paused;
use crate::state::*;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [SEED_NETWORK_STATE],
        bump = network_state.bump,
        constraint = network_state.authority == authority.key() @ FinovaError::Unauthorized
    )]
    pub network_state: Account<'info, NetworkState>,

    pub authority: Signer<'info>,
}

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    ctx.accounts.network_state.paused = paused;
    emit!(Paused {
        authority: ctx.accounts.authority.key(),
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
