use anchor_lang::prelude::*;

declare_id!("FinovaCoreProgram11111111111111111111111111");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{ActivityKind, EffectKind};

/// Finova Core: the single program that owns every user's and the
/// network's mining, XP, RP, staking and governance state. It never holds
/// SPL mint authority itself — every token mint goes out via CPI into the
/// Token Mint Authority program.
#[program]
pub mod finova_core {
    use super::*;

    pub fn initialize_network(
        ctx: Context<InitializeNetwork>,
        attestor_key: Pubkey,
        nft_effect_authority: Pubkey,
        max_supply: u128,
    ) -> Result<()> {
        instructions::initialize::initialize_network(
            ctx,
            attestor_key,
            nft_effect_authority,
            max_supply,
        )
    }

    pub fn initialize_user(ctx: Context<InitializeUser>, referrer: Option<Pubkey>) -> Result<()> {
        instructions::initialize::initialize_user(ctx, referrer)
    }

    pub fn submit_activity(
        ctx: Context<SubmitActivity>,
        kind: ActivityKind,
        platform: crate::constants::Platform,
        quality_score_micro: u64,
        nonce: u64,
        attestation_timestamp: i64,
        attestation_signature: [u8; 64],
    ) -> Result<()> {
        instructions::activity::submit_activity(
            ctx,
            kind,
            platform,
            quality_score_micro,
            nonce,
            attestation_timestamp,
            attestation_signature,
        )
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::rewards::claim_rewards(ctx)
    }

    pub fn apply_effect(
        ctx: Context<ApplyEffect>,
        kind: EffectKind,
        magnitude_micro: u64,
        duration_seconds: i64,
        source_card: Pubkey,
        stackable: bool,
    ) -> Result<()> {
        instructions::effects::apply_effect(
            ctx,
            kind,
            magnitude_micro,
            duration_seconds,
            source_card,
            stackable,
        )
    }

    pub fn gc_effects(ctx: Context<GcEffects>) -> Result<()> {
        instructions::effects::gc_effects(ctx)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::staking::stake(ctx, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::staking::unstake(ctx, amount)
    }

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        proposal_id: u64,
        voting_period_seconds: i64,
    ) -> Result<()> {
        instructions::governance::create_proposal(ctx, proposal_id, voting_period_seconds)
    }

    pub fn vote(ctx: Context<Vote>, support: bool) -> Result<()> {
        instructions::governance::vote(ctx, support)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::admin::set_paused(ctx, paused)
    }
}
