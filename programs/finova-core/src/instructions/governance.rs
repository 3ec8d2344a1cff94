use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::Voted;
use crate::state::*;

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CreateProposal<'info> {
    #[account(
        init,
        payer = creator,
        space = Proposal::SIZE,
        seeds = [b"proposal", proposal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(mut)]
    pub creator: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn create_proposal(
    ctx: Context<CreateProposal>,
    proposal_id: u64,
    voting_period_seconds: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let proposal = &mut ctx.accounts.proposal;
    proposal.version = 1;
    proposal.id = proposal_id;
    proposal.creator = ctx.accounts.creator.key();
    proposal.created_at = now;
    proposal.voting_ends_at = now
        .checked_add(voting_period_seconds)
        .ok_or(FinovaError::MathOverflow)?;
    proposal.yes_weight = 0;
    proposal.no_weight = 0;
    proposal.bump = ctx.bumps.proposal;
    proposal.reserved = [0; 32];
    Ok(())
}

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub proposal: Account<'info, Proposal>,

    #[account(
        seeds = [SEED_STAKING, voter.key().as_ref()],
        bump = staking_state.bump,
        constraint = staking_state.owner == voter.key() @ FinovaError::Unauthorized
    )]
    pub staking_state: Account<'info, StakingState>,

    #[account(
        init,
        payer = voter,
        space = VoteRecord::SIZE,
        seeds = [SEED_VOTE_RECORD, proposal.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_record: Account<'info, VoteRecord>,

    #[account(mut)]
    pub voter: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Casts one vote weighted by the voter's staked balance. Vote weight is
/// staked tokens, not token count alone, since `VoteRecord::init`
/// deterministically fails on any second vote from the same voter on the
/// same proposal.
pub fn vote(ctx: Context<Vote>, support: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(ctx.accounts.proposal.is_open(now), FinovaError::UnknownProposal);

    let weight = ctx.accounts.staking_state.staked;
    ctx.accounts.proposal.record_vote(weight, support)?;

    let vote_record = &mut ctx.accounts.vote_record;
    vote_record.version = 1;
    vote_record.proposal = ctx.accounts.proposal.key();
    vote_record.voter = ctx.accounts.voter.key();
    vote_record.support = support;
    vote_record.weight = weight;
    vote_record.cast_at = now;
    vote_record.bump = ctx.bumps.vote_record;

    emit!(Voted {
        proposal: ctx.accounts.proposal.key(),
        voter: ctx.accounts.voter.key(),
        support,
        weight,
    });

    Ok(())
}
