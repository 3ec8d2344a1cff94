use anchor_lang::prelude::*;

use crate::errors::FinovaError;
use crate::utils::accrue_base_units;

/// Mining accrual ledger for one user: the per-second reward rate is never
/// stored directly, it's recomputed from the composite formula at
/// settlement time. This account only tracks the accounting state that
/// must survive rate changes: when accrual last ran, and the balance owed.
#[account]
pub struct MiningAccrual {
    pub version: u8,
    pub owner: Pubkey,
    pub last_claim_at: i64,
    pub accrued_base_units: u64,
    pub daily_minted_base_units: u64,
    pub daily_mint_day: i64,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl MiningAccrual {
    pub const SIZE: usize = 8 + 1 + 32 + 8 + 8 + 8 + 8 + 1 + 32;

    /// Accrues reward under `rate_micro_per_sec` for the time elapsed since
    /// `last_claim_at`, clipped by the phase's daily token cap, then
    /// advances `last_claim_at` to `now`. Must be called before any change
    /// to the rate's inputs takes effect, so every accrual period is priced
    /// at the rate that was actually in force.
    pub fn settle(&mut self, rate_micro_per_sec: u64, now: i64, daily_cap: u64) -> Result<()> {
        require!(now >= self.last_claim_at, FinovaError::InvalidTimestamp);
        let elapsed = now - self.last_claim_at;
        let earned = accrue_base_units(rate_micro_per_sec, elapsed)?;

        let day = now / crate::constants::SECONDS_PER_DAY;
        if day != self.daily_mint_day {
            self.daily_mint_day = day;
            self.daily_minted_base_units = 0;
        }
        let room = daily_cap.saturating_sub(self.daily_minted_base_units);
        let clipped = earned.min(room);

        self.daily_minted_base_units = self
            .daily_minted_base_units
            .checked_add(clipped)
            .ok_or(FinovaError::MathOverflow)?;
        self.accrued_base_units = self
            .accrued_base_units
            .checked_add(clipped)
            .ok_or(FinovaError::MathOverflow)?;
        self.last_claim_at = now;
        Ok(())
    }

    /// Drains the full accrued balance for minting, returning the amount
    /// that must be minted via CPI. Errors rather than returning zero so
    /// callers don't pay CPI overhead for an empty claim.
    pub fn drain(&mut self) -> Result<u64> {
        require!(self.accrued_base_units > 0, FinovaError::NothingToClaim);
        let amount = self.accrued_base_units;
        self.accrued_base_units = 0;
        Ok(amount)
    }

    /// Like [`Self::drain`] but never errors on a zero balance; for
    /// callers combining this balance with another claimable source
    /// before deciding whether the total is claimable.
    pub fn take(&mut self) -> u64 {
        let amount = self.accrued_base_units;
        self.accrued_base_units = 0;
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_accrues_and_advances_clock() {
        let mut mining = MiningAccrual {
            version: 1,
            owner: Pubkey::default(),
            last_claim_at: 0,
            accrued_base_units: 0,
            daily_minted_base_units: 0,
            daily_mint_day: 0,
            bump: 0,
            reserved: [0; 32],
        };
        mining.settle(crate::utils::MICRO, 10, 1_000_000).unwrap();
        assert_eq!(mining.accrued_base_units, 10);
        assert_eq!(mining.last_claim_at, 10);
    }

    #[test]
    fn settle_clips_to_daily_cap() {
        let mut mining = MiningAccrual {
            version: 1,
            owner: Pubkey::default(),
            last_claim_at: 0,
            accrued_base_units: 0,
            daily_minted_base_units: 0,
            daily_mint_day: 0,
            bump: 0,
            reserved: [0; 32],
        };
        mining
            .settle(1_000 * crate::utils::MICRO, 1_000_000, 5)
            .unwrap();
        assert_eq!(mining.accrued_base_units, 5);
    }

    #[test]
    fn drain_empties_balance() {
        let mut mining = MiningAccrual {
            version: 1,
            owner: Pubkey::default(),
            last_claim_at: 0,
            accrued_base_units: 42,
            daily_minted_base_units: 0,
            daily_mint_day: 0,
            bump: 0,
            reserved: [0; 32],
        };
        assert_eq!(mining.drain().unwrap(), 42);
        assert!(mining.drain().is_err());
    }
}
