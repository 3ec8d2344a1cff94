use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;

/// Staking position for one user. `pending_rewards` accrues continuously
/// via [`settle`] and is drained by the claim instruction rather than
/// minted directly from here.
#[account]
pub struct StakingState {
    pub version: u8,
    pub owner: Pubkey,
    pub staked: u64,
    pub tier: u8,
    pub staked_at: i64,
    pub last_reward_update: i64,
    pub pending_rewards: u64,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl StakingState {
    pub const SIZE: usize = 8 + 1 + 32 + 8 + 1 + 8 + 8 + 8 + 1 + 32;

    pub fn deposit(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, FinovaError::InvalidAmount);
        self.settle(now)?;
        self.staked = self
            .staked
            .checked_add(amount)
            .ok_or(FinovaError::MathOverflow)?;
        if self.staked_at == 0 {
            self.staked_at = now;
        }
        self.tier = tier_for_stake(self.staked);
        Ok(())
    }

    /// Withdraws `amount`, applying the early-unstake penalty if `now` is
    /// still inside the lockup window. Returns the amount actually
    /// transferable to the user after the penalty.
    pub fn withdraw(&mut self, amount: u64, now: i64) -> Result<u64> {
        require!(amount > 0, FinovaError::InvalidAmount);
        require!(amount <= self.staked, FinovaError::Overdrawn);
        self.settle(now)?;
        self.staked = self
            .staked
            .checked_sub(amount)
            .ok_or(FinovaError::MathUnderflow)?;
        self.tier = tier_for_stake(self.staked);

        let locked_until = self.staked_at.saturating_add(STAKE_LOCKUP_SECONDS);
        let payout = if now < locked_until {
            let penalty = (amount as u128)
                .saturating_mul(EARLY_UNSTAKE_PENALTY_MICRO as u128)
                / crate::utils::MICRO as u128;
            amount.saturating_sub(penalty as u64)
        } else {
            amount
        };
        Ok(payout)
    }

    /// Accrues `pending_rewards` at the current tier's APY for the time
    /// elapsed since `last_reward_update`, then advances the watermark to
    /// `now`. Called before any change to `staked`/`tier` so each interval
    /// is priced at the rate that was actually in force, mirroring
    /// `MiningAccrual::settle`.
    pub fn settle(&mut self, now: i64) -> Result<()> {
        require!(now >= self.last_reward_update, FinovaError::InvalidTimestamp);
        let elapsed = (now - self.last_reward_update) as u128;
        let apy_micro = STAKE_APY_MICRO_BY_TIER[self.tier as usize] as u128;
        if self.staked > 0 && apy_micro > 0 && elapsed > 0 {
            let earned = (self.staked as u128)
                .checked_mul(apy_micro)
                .ok_or(FinovaError::MathOverflow)?
                .checked_mul(elapsed)
                .ok_or(FinovaError::MathOverflow)?
                / (crate::utils::MICRO as u128 * SECONDS_PER_YEAR as u128);
            let earned = u64::try_from(earned).map_err(|_| FinovaError::MathOverflow)?;
            self.pending_rewards = self
                .pending_rewards
                .checked_add(earned)
                .ok_or(FinovaError::MathOverflow)?;
        }
        self.last_reward_update = now;
        Ok(())
    }

    /// Drains `pending_rewards` for the claim instruction to fold into the
    /// user's minted total.
    pub fn take_pending_rewards(&mut self) -> u64 {
        let amount = self.pending_rewards;
        self.pending_rewards = 0;
        amount
    }
}

/// `S(staked)`: highest tier whose token threshold `staked` has crossed.
pub fn tier_for_stake(staked_base_units: u64) -> u8 {
    let staked_tokens = staked_base_units / 10u64.pow(DECIMALS);
    let mut tier = 0u8;
    for (i, &threshold) in STAKE_TIER_THRESHOLDS_TOKENS.iter().enumerate() {
        if staked_tokens >= threshold {
            tier = i as u8;
        }
    }
    tier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_units(tokens: u64) -> u64 {
        tokens * 10u64.pow(DECIMALS)
    }

    #[test]
    fn tier_for_stake_matches_thresholds() {
        assert_eq!(tier_for_stake(base_units(0)), 0);
        assert_eq!(tier_for_stake(base_units(99)), 0);
        assert_eq!(tier_for_stake(base_units(100)), 1);
        assert_eq!(tier_for_stake(base_units(10_000)), 4);
    }

    #[test]
    fn withdraw_before_lockup_applies_penalty() {
        let mut staking = StakingState {
            version: 1,
            owner: Pubkey::default(),
            staked: base_units(1_000),
            tier: tier_for_stake(base_units(1_000)),
            staked_at: 0,
            last_reward_update: 0,
            pending_rewards: 0,
            bump: 0,
            reserved: [0; 32],
        };
        let payout = staking.withdraw(base_units(100), 1).unwrap();
        assert!(payout < base_units(100));
    }

    #[test]
    fn withdraw_after_lockup_has_no_penalty() {
        let mut staking = StakingState {
            version: 1,
            owner: Pubkey::default(),
            staked: base_units(1_000),
            tier: tier_for_stake(base_units(1_000)),
            staked_at: 0,
            last_reward_update: 0,
            pending_rewards: 0,
            bump: 0,
            reserved: [0; 32],
        };
        let payout = staking
            .withdraw(base_units(100), STAKE_LOCKUP_SECONDS + 1)
            .unwrap();
        assert_eq!(payout, base_units(100));
    }

    #[test]
    fn withdraw_more_than_staked_fails() {
        let mut staking = StakingState {
            version: 1,
            owner: Pubkey::default(),
            staked: base_units(10),
            tier: 0,
            staked_at: 0,
            last_reward_update: 0,
            pending_rewards: 0,
            bump: 0,
            reserved: [0; 32],
        };
        assert!(staking.withdraw(base_units(11), 0).is_err());
    }
}
