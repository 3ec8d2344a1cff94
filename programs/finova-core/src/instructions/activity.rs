use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::ActivitySettled;
use crate::state::referral::network_regression_micro;
use crate::state::*;
use crate::utils::*;

#[derive(Accounts)]
pub struct SubmitActivity<'info> {
    #[account(mut, seeds = [SEED_NETWORK_STATE], bump = network_state.bump)]
    pub network_state: Account<'info, NetworkState>,

    #[account(
        mut,
        seeds = [SEED_USER, authority.key().as_ref()],
        bump = user_state.bump,
        constraint = user_state.authority == authority.key() @ FinovaError::Unauthorized
    )]
    pub user_state: Account<'info, UserState>,

    #[account(mut, seeds = [SEED_XP, authority.key().as_ref()], bump = xp_state.bump)]
    pub xp_state: Account<'info, XpState>,

    #[account(mut, seeds = [SEED_REFERRAL, authority.key().as_ref()], bump = referral_state.bump)]
    pub referral_state: Account<'info, ReferralState>,

    #[account(seeds = [SEED_STAKING, authority.key().as_ref()], bump = staking_state.bump)]
    pub staking_state: Account<'info, StakingState>,

    #[account(mut, seeds = [SEED_MINING, authority.key().as_ref()], bump = mining_accrual.bump)]
    pub mining_accrual: Account<'info, MiningAccrual>,

    #[account(seeds = [SEED_EFFECTS, authority.key().as_ref()], bump = active_effects.bump)]
    pub active_effects: Account<'info, ActiveEffects>,

    pub authority: Signer<'info>,
}

/// Settles mining accrual at the previously-active rate, folds in the XP
/// and RP earned from one attested social activity, then recomputes the
/// rate for the next accrual window. `remaining_accounts` carries the
/// referrer's `ReferralState` (and its own referrer's, and so on, up to
/// `MAX_REFERRAL_HOPS`) for ripple RP.
pub fn submit_activity(
    ctx: Context<SubmitActivity>,
    kind: ActivityKind,
    platform: Platform,
    quality_score_micro: u64,
    nonce: u64,
    attestation_timestamp: i64,
    attestation_signature: [u8; 64],
) -> Result<()> {
    let network = &mut ctx.accounts.network_state;
    require!(!network.paused, FinovaError::Paused);

    let now = Clock::get()?.unix_timestamp;
    require!(
        now - attestation_timestamp <= ATTESTATION_FRESHNESS_S,
        FinovaError::StaleAttestation
    );
    require!(
        quality_score_micro >= QUALITY_MIN_MICRO && quality_score_micro <= QUALITY_MAX_MICRO,
        FinovaError::InvalidQualityScore
    );

    let user = &mut ctx.accounts.user_state;
    user.consume_nonce(nonce)?;

    let message = build_attestation_message(
        &user.authority,
        kind,
        platform,
        quality_score_micro,
        nonce,
        attestation_timestamp,
    );
    verify_attestation(&network.attestor_key, &message, &attestation_signature)?;

    // Settle the prior accrual window at the rate that was in force before
    // this activity can change any of its inputs.
    let staking = &ctx.accounts.staking_state;
    let referral = &mut ctx.accounts.referral_state;
    let xp = &mut ctx.accounts.xp_state;
    let effects = &ctx.accounts.active_effects;

    let prior_rate = composite_rate_micro_per_sec(
        network, user, xp, referral, staking, effects, now,
    )?;
    let mining = &mut ctx.accounts.mining_accrual;
    mining.settle(prior_rate, now, network.phase.daily_token_cap_base_units())?;

    let base_xp = ACTIVITY_BASE_XP[activity_index(kind)];
    let platform_mult = PLATFORM_MULTIPLIER_MICRO[platform_index(platform)];
    let streak_mult = xp.streak_multiplier_micro();
    let decay = xp_gain_decay_micro(xp.level);
    let quality_adjusted = mul_micro(base_xp, quality_score_micro)?;
    let platform_adjusted = mul_micro(quality_adjusted, platform_mult)?;
    let streak_adjusted = mul_micro(platform_adjusted, streak_mult)?;
    let gross_xp = mul_micro(streak_adjusted, decay)?;
    let xp_gained = xp.apply_xp(gross_xp, now)?;

    let base_rp = xp_gained / 10;
    referral.add_rp(base_rp, 1)?;
    referral.quality_micro = (referral.quality_micro + quality_score_micro) / 2;

    for (hop, account_info) in ctx.remaining_accounts.iter().take(2).enumerate() {
        let hop = hop as u8 + 2; // remaining_accounts start at hop 2
        let mut data = account_info.try_borrow_mut_data()?;
        let mut ancestor: ReferralState = ReferralState::try_deserialize(&mut &data[..])?;
        ancestor.add_rp(base_rp, hop)?;
        let mut writer: &mut [u8] = &mut data[..];
        ancestor.try_serialize(&mut writer)?;
    }

    user.last_active = now;

    emit!(ActivitySettled {
        user: user.authority,
        xp_gained,
        rp_gained: base_rp,
        mining_rate_micro_per_sec: prior_rate,
        timestamp: now,
    });

    Ok(())
}

fn activity_index(kind: ActivityKind) -> usize {
    match kind {
        ActivityKind::Post => 0,
        ActivityKind::Comment => 1,
        ActivityKind::OriginalContent => 2,
        ActivityKind::Like => 3,
        ActivityKind::Share => 4,
        ActivityKind::Viral => 5,
    }
}

fn platform_index(platform: Platform) -> usize {
    match platform {
        Platform::TikTok => 0,
        Platform::Instagram => 1,
        Platform::YouTube => 2,
        Platform::Facebook => 3,
        Platform::X => 4,
        Platform::App => 5,
    }
}

fn build_attestation_message(
    user: &Pubkey,
    kind: ActivityKind,
    platform: Platform,
    quality_score_micro: u64,
    nonce: u64,
    attestation_timestamp: i64,
) -> Vec<u8> {
    let mut message = Vec::with_capacity(32 + 1 + 1 + 8 + 8 + 8);
    message.extend_from_slice(user.as_ref());
    message.push(activity_index(kind) as u8);
    message.push(platform_index(platform) as u8);
    message.extend_from_slice(&quality_score_micro.to_le_bytes());
    message.extend_from_slice(&nonce.to_le_bytes());
    message.extend_from_slice(&attestation_timestamp.to_le_bytes());
    message
}

/// `R_u = B(phase) x F(users) x S(u) x K(u) x X(u) x P(u) x E(u) x Q_avg(u) x G(u)`,
/// returned as a micro-per-second rate ready for [`MiningAccrual::settle`].
/// `staking` only feeds `K(u)`'s holdings term here; staking's own reward
/// accrual is tracked separately in `StakingState.pending_rewards`.
pub fn composite_rate_micro_per_sec(
    network: &NetworkState,
    user: &UserState,
    xp: &XpState,
    referral: &ReferralState,
    staking: &StakingState,
    effects: &ActiveEffects,
    now: i64,
) -> Result<u64> {
    let b = network.phase.base_rate_micro_per_hour();
    let f = clamp_micro(
        FINIZEN_CEIL_MICRO.saturating_sub(network.total_users.saturating_mul(FINIZEN_USER_SLOPE)),
        FINIZEN_FLOOR_MICRO,
        FINIZEN_CEIL_MICRO,
    );
    let security = user.security_factor_micro();
    let k = network_regression_micro(holdings_equivalent(staking), network.hold_coef_micro)?;
    let x = xp.xp_multiplier_micro();
    let p = referral.rp_multiplier_micro();
    let effects_mult = effects.multiplier_micro(EffectKind::MiningBoost, now);
    let q = referral.network_quality_micro();
    let g = xp.streak_multiplier_micro();

    let mut acc: u128 = b as u128;
    for factor in [f, security, k, x, p, effects_mult, q, g] {
        acc = mul_micro_u128(acc, factor)?;
    }
    let effective_micro_tokens_per_hour =
        u64::try_from(acc / MICRO as u128).map_err(|_| FinovaError::MathOverflow)?;

    tokens_per_hour_micro_to_rate_micro_per_sec(effective_micro_tokens_per_hour)
}

fn holdings_equivalent(staking: &StakingState) -> u64 {
    staking.staked / 10u64.pow(crate::utils::TOKEN_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_rate_is_positive_for_a_fresh_user() {
        let network = NetworkState {
            version: 1,
            authority: Pubkey::default(),
            attestor_key: Pubkey::default(),
            nft_effect_authority: Pubkey::default(),
            total_users: 1,
            total_minted: 0,
            max_supply: u128::MAX,
            phase: MiningPhase::Finizen,
            hold_cap_tokens: DEFAULT_HOLD_CAP_TOKENS,
            hold_coef_micro: DEFAULT_HOLD_COEF_MICRO,
            nr_coef_micro: DEFAULT_NR_COEF_MICRO,
            last_phase_tick: 0,
            paused: false,
            bump: 0,
            reserved: [0; 64],
        };
        let user = UserState {
            version: 1,
            authority: Pubkey::default(),
            created_at: 0,
            last_active: 0,
            kyc_verified: false,
            human_probability_micro: 0,
            suspicion_score: 0,
            referrer: None,
            flags: 0,
            last_attestation_nonce: 0,
            bump: 0,
            reserved: [0; 32],
        };
        let xp = XpState {
            version: 1,
            owner: Pubkey::default(),
            total_xp: 0,
            level: 0,
            streak_days: 0,
            last_xp_day: 0,
            daily_xp: 0,
            bump: 0,
            reserved: [0; 32],
        };
        let referral = ReferralState {
            version: 1,
            owner: Pubkey::default(),
            total_rp: 0,
            tier: 0,
            direct_active_30d: 0,
            l2_active: 0,
            l3_active: 0,
            quality_micro: QUALITY_DEFAULT_MICRO,
            bump: 0,
            reserved: [0; 32],
        };
        let staking = StakingState {
            version: 1,
            owner: Pubkey::default(),
            staked: 0,
            tier: 0,
            staked_at: 0,
            last_reward_update: 0,
            pending_rewards: 0,
            bump: 0,
            reserved: [0; 32],
        };
        let effects = ActiveEffects {
            version: 1,
            owner: Pubkey::default(),
            slots: [Effect::EMPTY; MAX_ACTIVE_EFFECTS],
            bump: 0,
            reserved: [0; 16],
        };

        let rate =
            composite_rate_micro_per_sec(&network, &user, &xp, &referral, &staking, &effects, 0)
                .unwrap();
        assert!(rate > 0);
        assert!(rate <= MAX_RATE_MICRO_PER_SEC);
    }
}
