use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;
use crate::utils::{clamp_micro, exp_micro, mul_micro, MICRO};

/// Referral-point progression and network-quality tracking for one user.
/// Activity from referred users ripples up to three hops, each hop's
/// contribution scaled down by [`RP_RIPPLE_L1_MICRO`]/`L2`/`L3`.
#[account]
pub struct ReferralState {
    pub version: u8,
    pub owner: Pubkey,
    pub total_rp: u64,
    pub tier: u8,
    pub direct_active_30d: u32,
    pub l2_active: u32,
    pub l3_active: u32,
    pub quality_micro: u64,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl ReferralState {
    pub const SIZE: usize = 8 + 1 + 32 + 8 + 1 + 4 + 4 + 4 + 8 + 1 + 32;

    /// Adds ripple RP from a downstream activity `hop` hops away (1 = the
    /// direct referral) and refreshes the cached tier.
    pub fn add_rp(&mut self, base_rp: u64, hop: u8) -> Result<()> {
        let ripple_micro = match hop {
            1 => RP_RIPPLE_L1_MICRO,
            2 => RP_RIPPLE_L2_MICRO,
            3 => RP_RIPPLE_L3_MICRO,
            _ => return Ok(()),
        };
        let gained = mul_micro(base_rp, ripple_micro)?;
        self.total_rp = self
            .total_rp
            .checked_add(gained)
            .ok_or(FinovaError::MathOverflow)?;
        self.tier = tier_for_rp(self.total_rp);
        Ok(())
    }

    /// `P(u)`: the referral-point multiplier for this user's own reward
    /// calculation, tier-based.
    pub fn rp_multiplier_micro(&self) -> u64 {
        RP_TIER_MULTIPLIER_MICRO[self.tier as usize]
    }

    /// `Q_avg(u)`: the network-quality multiplier, the plain average of
    /// this user's own quality score and the cached network regression
    /// term. `quality_micro` itself is maintained by the activity pipeline.
    pub fn network_quality_micro(&self) -> u64 {
        clamp_micro(self.quality_micro, QUALITY_MIN_MICRO, QUALITY_MAX_MICRO)
    }
}

/// `T(total_rp)`: highest tier whose threshold `total_rp` has crossed.
pub fn tier_for_rp(total_rp: u64) -> u8 {
    let mut tier = 0u8;
    for (i, &threshold) in RP_TIER_THRESHOLDS.iter().enumerate() {
        if total_rp >= threshold {
            tier = i as u8;
        }
    }
    tier
}

/// `K(u)`: anti-whale regression over a user's network size, exponential
/// decay driven by the number of active referrals weighted by
/// `nr_coef_micro`. Mirrors the holdings regression's shape but over
/// network size instead of token balance.
pub fn network_regression_micro(active_network_size: u64, nr_coef_micro: u32) -> Result<u64> {
    let x_micro = mul_micro(active_network_size, nr_coef_micro as u64)?;
    Ok(exp_micro(x_micro))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_for_rp_matches_thresholds() {
        assert_eq!(tier_for_rp(0), 0);
        assert_eq!(tier_for_rp(999), 0);
        assert_eq!(tier_for_rp(1_000), 1);
        assert_eq!(tier_for_rp(50_000), 4);
        assert_eq!(tier_for_rp(1_000_000), 4);
    }

    #[test]
    fn network_regression_decays_toward_zero() {
        let small = network_regression_micro(1, DEFAULT_NR_COEF_MICRO).unwrap();
        let large = network_regression_micro(100_000, DEFAULT_NR_COEF_MICRO).unwrap();
        assert!(large < small);
        assert!(large >= 1);
    }

    #[test]
    fn add_rp_accumulates_and_scales_by_hop() {
        let mut referral = ReferralState {
            version: 1,
            owner: Pubkey::default(),
            total_rp: 0,
            tier: 0,
            direct_active_30d: 0,
            l2_active: 0,
            l3_active: 0,
            quality_micro: MICRO,
            bump: 0,
            reserved: [0; 32],
        };
        referral.add_rp(1_000, 1).unwrap();
        let direct_gain = referral.total_rp;
        referral.total_rp = 0;
        referral.add_rp(1_000, 3).unwrap();
        let l3_gain = referral.total_rp;
        assert!(direct_gain > l3_gain);
    }
}
