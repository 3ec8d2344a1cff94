use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::{PhaseAdvanced, UserInitialized};
use crate::state::*;

#[derive(Accounts)]
pub struct InitializeNetwork<'info> {
    #[account(
        init,
        payer = authority,
        space = NetworkState::SIZE,
        seeds = [SEED_NETWORK_STATE],
        bump
    )]
    pub network_state: Account<'info, NetworkState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_network(
    ctx: Context<InitializeNetwork>,
    attestor_key: Pubkey,
    nft_effect_authority: Pubkey,
    max_supply: u128,
) -> Result<()> {
    let network = &mut ctx.accounts.network_state;
    network.version = 1;
    network.authority = ctx.accounts.authority.key();
    network.attestor_key = attestor_key;
    network.nft_effect_authority = nft_effect_authority;
    network.total_users = 0;
    network.total_minted = 0;
    network.max_supply = max_supply;
    network.phase = MiningPhase::Finizen;
    network.hold_cap_tokens = DEFAULT_HOLD_CAP_TOKENS;
    network.hold_coef_micro = DEFAULT_HOLD_COEF_MICRO;
    network.nr_coef_micro = DEFAULT_NR_COEF_MICRO;
    network.last_phase_tick = Clock::get()?.unix_timestamp;
    network.paused = false;
    network.bump = ctx.bumps.network_state;
    network.reserved = [0; 64];
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(mut, seeds = [SEED_NETWORK_STATE], bump = network_state.bump)]
    pub network_state: Account<'info, NetworkState>,

    #[account(
        init,
        payer = authority,
        space = UserState::SIZE,
        seeds = [SEED_USER, authority.key().as_ref()],
        bump
    )]
    pub user_state: Account<'info, UserState>,

    #[account(
        init,
        payer = authority,
        space = XpState::SIZE,
        seeds = [SEED_XP, authority.key().as_ref()],
        bump
    )]
    pub xp_state: Account<'info, XpState>,

    #[account(
        init,
        payer = authority,
        space = ReferralState::SIZE,
        seeds = [SEED_REFERRAL, authority.key().as_ref()],
        bump
    )]
    pub referral_state: Account<'info, ReferralState>,

    #[account(
        init,
        payer = authority,
        space = StakingState::SIZE,
        seeds = [SEED_STAKING, authority.key().as_ref()],
        bump
    )]
    pub staking_state: Account<'info, StakingState>,

    #[account(
        init,
        payer = authority,
        space = MiningAccrual::SIZE,
        seeds = [SEED_MINING, authority.key().as_ref()],
        bump
    )]
    pub mining_accrual: Account<'info, MiningAccrual>,

    #[account(
        init,
        payer = authority,
        space = ActiveEffects::SIZE,
        seeds = [SEED_EFFECTS, authority.key().as_ref()],
        bump
    )]
    pub active_effects: Account<'info, ActiveEffects>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Registers a new user. `referrer` is validated against self-referral and,
/// by walking `ctx.remaining_accounts` as the referrer's ancestor chain
/// (each entry the next hop's `UserState`, up to `MAX_REFERRAL_HOPS`),
/// against referral loops.
pub fn initialize_user(ctx: Context<InitializeUser>, referrer: Option<Pubkey>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority_key = ctx.accounts.authority.key();

    if let Some(referrer_key) = referrer {
        require!(referrer_key != authority_key, FinovaError::SelfReferral);
        reject_circular_referral(authority_key, ctx.remaining_accounts)?;
    }

    let user = &mut ctx.accounts.user_state;
    user.version = 1;
    user.authority = authority_key;
    user.created_at = now;
    user.last_active = now;
    user.kyc_verified = false;
    user.human_probability_micro = 0;
    user.suspicion_score = 0;
    user.referrer = referrer;
    user.flags = 0;
    user.last_attestation_nonce = 0;
    user.bump = ctx.bumps.user_state;
    user.reserved = [0; 32];

    let xp = &mut ctx.accounts.xp_state;
    xp.version = 1;
    xp.owner = authority_key;
    xp.total_xp = 0;
    xp.level = 0;
    xp.streak_days = 0;
    xp.last_xp_day = now / SECONDS_PER_DAY;
    xp.daily_xp = 0;
    xp.bump = ctx.bumps.xp_state;
    xp.reserved = [0; 32];

    let referral = &mut ctx.accounts.referral_state;
    referral.version = 1;
    referral.owner = authority_key;
    referral.total_rp = 0;
    referral.tier = 0;
    referral.direct_active_30d = 0;
    referral.l2_active = 0;
    referral.l3_active = 0;
    referral.quality_micro = QUALITY_DEFAULT_MICRO;
    referral.bump = ctx.bumps.referral_state;
    referral.reserved = [0; 32];

    let staking = &mut ctx.accounts.staking_state;
    staking.version = 1;
    staking.owner = authority_key;
    staking.staked = 0;
    staking.tier = 0;
    staking.staked_at = 0;
    staking.last_reward_update = now;
    staking.pending_rewards = 0;
    staking.bump = ctx.bumps.staking_state;
    staking.reserved = [0; 32];

    let mining = &mut ctx.accounts.mining_accrual;
    mining.version = 1;
    mining.owner = authority_key;
    mining.last_claim_at = now;
    mining.accrued_base_units = 0;
    mining.daily_minted_base_units = 0;
    mining.daily_mint_day = now / SECONDS_PER_DAY;
    mining.bump = ctx.bumps.mining_accrual;
    mining.reserved = [0; 32];

    let effects = &mut ctx.accounts.active_effects;
    effects.version = 1;
    effects.owner = authority_key;
    effects.slots = [Effect::EMPTY; MAX_ACTIVE_EFFECTS];
    effects.bump = ctx.bumps.active_effects;
    effects.reserved = [0; 16];

    let network = &mut ctx.accounts.network_state;
    network.total_users = network
        .total_users
        .checked_add(1)
        .ok_or(FinovaError::MathOverflow)?;
    if let Some(new_phase) = network.maybe_advance_phase(now) {
        emit!(PhaseAdvanced {
            new_phase,
            total_users: network.total_users,
            timestamp: now,
        });
    }

    emit!(UserInitialized {
        user: authority_key,
        referrer,
        timestamp: now,
    });

    Ok(())
}

fn reject_circular_referral(authority: Pubkey, chain: &[AccountInfo]) -> Result<()> {
    let mut cursor = authority;
    for account_info in chain.iter().take(MAX_REFERRAL_HOPS as usize) {
        let data = account_info.try_borrow_data()?;
        let ancestor: UserState = UserState::try_deserialize(&mut &data[..])?;
        require!(account_info.key() != cursor, FinovaError::CircularReferral);
        match ancestor.referrer {
            Some(next) => {
                require!(next != authority, FinovaError::CircularReferral);
                cursor = next;
            }
            None => break,
        }
    }
    Ok(())
}
