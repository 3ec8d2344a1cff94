use anchor_lang::prelude::*;

use crate::utils::MICRO;

/// Kind of social activity an attestation reports, indexing
/// [`ACTIVITY_BASE_XP`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Post,
    Comment,
    OriginalContent,
    Like,
    Share,
    Viral,
}

/// Platform an activity was performed on, indexing
/// [`PLATFORM_MULTIPLIER_MICRO`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Facebook,
    X,
    App,
}

// ======================
// PDA SEEDS
// ======================

pub const SEED_NETWORK_STATE: &[u8] = b"network";
pub const SEED_USER: &[u8] = b"user";
pub const SEED_XP: &[u8] = b"xp";
pub const SEED_REFERRAL: &[u8] = b"referral";
pub const SEED_STAKING: &[u8] = b"staking";
pub const SEED_EFFECTS: &[u8] = b"effects";
pub const SEED_MINING: &[u8] = b"mining";
pub const SEED_VOTE_RECORD: &[u8] = b"vote";
pub const SEED_CORE_MINT_AUTHORITY: &[u8] = b"core_mint_authority";

// ======================
// TOKEN & SUPPLY
// ======================

pub const DECIMALS: u32 = 9;
pub const MAX_SUPPLY_BASE_UNITS: u128 = 100_000_000_000 * 1_000_000_000;

// ======================
// MINING PHASES
// ======================

/// User-count thresholds at which `NetworkState.phase` lazily advances.
pub const PHASE_THRESHOLDS: [u64; 3] = [100_000, 1_000_000, 10_000_000];

/// Base mining rate per phase, in micro-tokens per hour (Finizen, Growth,
/// Maturity, Stability).
pub const BASE_RATE_MICRO_PER_HOUR: [u64; 4] = [100_000, 50_000, 25_000, 10_000];

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Ceiling every per-second rate factor is clamped to after each
/// multiplication, making overflow of the reward formula structurally
/// impossible regardless of how many boosts stack.
pub const MAX_RATE_MICRO_PER_SEC: u64 = 1_000 * MICRO;

// ======================
// FINIZEN / SECURITY FACTORS
// ======================

/// `F(users) = max(FINIZEN_FLOOR_MICRO, FINIZEN_CEIL_MICRO - users * FINIZEN_USER_SLOPE)`.
pub const FINIZEN_FLOOR_MICRO: u64 = MICRO; // 1.0x
pub const FINIZEN_CEIL_MICRO: u64 = 2 * MICRO; // 2.0x
pub const FINIZEN_USER_SLOPE: u64 = 10;

pub const SECURITY_KYC_MICRO: u64 = MICRO + MICRO / 5; // 1.2x
pub const SECURITY_NON_KYC_MICRO: u64 = MICRO - MICRO / 5; // 0.8x

// ======================
// HOLDINGS REGRESSION (ANTI-WHALE)
// ======================

/// Default `hold_coef_micro`: whitepaper value of 0.001, stored as micro.
pub const DEFAULT_HOLD_COEF_MICRO: u32 = 1_000;

/// Default cap on holdings considered by the regression curve, in whole
/// tokens. Holdings above this are treated as equal to the cap.
pub const DEFAULT_HOLD_CAP_TOKENS: u64 = 1_000_000;

// ======================
// XP SYSTEM
// ======================

pub const MAX_LEVEL: u16 = 200;
pub const XP_MULTIPLIER_CAP_MICRO: u64 = 5 * MICRO;

/// `(band_start_level, band_end_level, xp_per_level_in_band)` for the
/// piecewise level curve. Bands are inclusive on both ends and contiguous.
pub const XP_LEVEL_BANDS: [(u16, u16, u64); 6] = [
    (1, 10, 100),
    (11, 25, 200),
    (26, 50, 400),
    (51, 75, 800),
    (76, 100, 1_600),
    (101, 200, 3_200),
];

pub const XP_DECAY_COEF_MICRO: u64 = 10_000; // 0.01 per level

// ======================
// STREAK CURVE
// ======================

pub const STREAK_MULT_MAX_MICRO: u64 = 3 * MICRO;

// ======================
// RP SYSTEM
// ======================

pub const RP_RIPPLE_L1_MICRO: u64 = 100_000; // 10%
pub const RP_RIPPLE_L2_MICRO: u64 = 30_000; // 3%
pub const RP_RIPPLE_L3_MICRO: u64 = 10_000; // 1%

pub const RP_TIER_THRESHOLDS: [u64; 5] = [0, 1_000, 5_000, 15_000, 50_000];
pub const RP_TIER_MULTIPLIER_MICRO: [u64; 5] =
    [MICRO, MICRO + MICRO / 5, MICRO + MICRO / 2, 2 * MICRO, 3 * MICRO];

/// Default `nr_coef_micro`: whitepaper value of 0.0001, stored as micro.
pub const DEFAULT_NR_COEF_MICRO: u32 = 100;

pub const MAX_REFERRAL_HOPS: u8 = 3;

// ======================
// STAKING
// ======================

pub const STAKE_TIER_THRESHOLDS_TOKENS: [u64; 5] = [100, 500, 1_000, 5_000, 10_000];
pub const STAKE_LOCKUP_SECONDS: i64 = 14 * SECONDS_PER_DAY;
pub const EARLY_UNSTAKE_PENALTY_MICRO: u64 = 100_000; // 10%

pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Annual yield on `staked`, indexed by `StakingState.tier`, in micro
/// units (`40_000` = 4%/year). Accrues continuously into
/// `StakingState.pending_rewards`, settled alongside mining accrual at
/// `claim_rewards`.
pub const STAKE_APY_MICRO_BY_TIER: [u64; 5] = [0, 40_000, 60_000, 80_000, 100_000];

// ======================
// EFFECTS
// ======================

pub const MAX_ACTIVE_EFFECTS: usize = 16;

// ======================
// QUALITY
// ======================

pub const QUALITY_WINDOW_LEN: usize = 64;
pub const QUALITY_MIN_MICRO: u64 = MICRO / 2; // 0.5x
pub const QUALITY_MAX_MICRO: u64 = 2 * MICRO; // 2.0x
pub const QUALITY_DEFAULT_MICRO: u64 = MICRO; // 1.0x neutral prior

// ======================
// ATTESTATION
// ======================

pub const ATTESTATION_FRESHNESS_S: i64 = 600;

// ======================
// ACTIVITY BASE XP
// ======================

/// Base XP per activity kind, indexed by `ActivityKind as usize`.
pub const ACTIVITY_BASE_XP: [u64; 6] = [50, 75, 150, 25, 200, 500];

/// Platform multiplier, indexed by `Platform as usize`, in micro units.
pub const PLATFORM_MULTIPLIER_MICRO: [u64; 6] = [
    1_300_000, // TikTok
    1_200_000, // Instagram
    1_400_000, // YouTube
    1_100_000, // Facebook
    1_200_000, // X (Twitter)
    1_000_000, // generic app activity
];

// ======================
// DAILY CAPS
// ======================

/// Daily XP cap by level band, mirroring [`XP_LEVEL_BANDS`]'s granularity.
pub const DAILY_XP_CAP_BY_BAND: [(u16, u32); 6] = [
    (10, 1_000),
    (25, 3_000),
    (50, 6_000),
    (75, 12_000),
    (100, 24_000),
    (200, 48_000),
];

/// Daily token mining cap by phase, in base units, mirroring
/// `BASE_RATE_MICRO_PER_HOUR`'s phase index.
pub const DAILY_TOKEN_CAP_BASE_UNITS: [u64; 4] = [
    4_800_000_000, // 4.8 tokens
    1_800_000_000, // 1.8 tokens
    720_000_000,   // 0.72 tokens
    240_000_000,   // 0.24 tokens
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_level_bands_are_contiguous() {
        for pair in XP_LEVEL_BANDS.windows(2) {
            assert_eq!(pair[0].1 + 1, pair[1].0);
        }
    }

    #[test]
    fn rp_tier_tables_are_aligned() {
        assert_eq!(RP_TIER_THRESHOLDS.len(), RP_TIER_MULTIPLIER_MICRO.len());
    }
}
