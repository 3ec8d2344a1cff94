use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;

/// One of four one-way emission regimes, keyed off total registered users.
/// Transitions are lazy: any mutating instruction that observes
/// `total_users` crossing a threshold advances the phase before doing its
/// own work.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MiningPhase {
    Finizen,
    Growth,
    Maturity,
    Stability,
}

impl MiningPhase {
    pub fn from_total_users(total_users: u64) -> Self {
        if total_users < PHASE_THRESHOLDS[0] {
            MiningPhase::Finizen
        } else if total_users < PHASE_THRESHOLDS[1] {
            MiningPhase::Growth
        } else if total_users < PHASE_THRESHOLDS[2] {
            MiningPhase::Maturity
        } else {
            MiningPhase::Stability
        }
    }

    pub fn index(self) -> usize {
        match self {
            MiningPhase::Finizen => 0,
            MiningPhase::Growth => 1,
            MiningPhase::Maturity => 2,
            MiningPhase::Stability => 3,
        }
    }

    pub fn base_rate_micro_per_hour(self) -> u64 {
        BASE_RATE_MICRO_PER_HOUR[self.index()]
    }

    pub fn daily_token_cap_base_units(self) -> u64 {
        DAILY_TOKEN_CAP_BASE_UNITS[self.index()]
    }
}

impl Default for MiningPhase {
    fn default() -> Self {
        MiningPhase::Finizen
    }
}

/// Singleton network-wide state, created once at `initialize_network` and
/// mutated only by CORE. Kept deliberately small (a handful of counters
/// plus one phase byte) since it is written on every user registration and
/// every phase transition.
#[account]
pub struct NetworkState {
    pub version: u8,
    pub authority: Pubkey,
    pub attestor_key: Pubkey,
    pub nft_effect_authority: Pubkey,
    pub total_users: u64,
    pub total_minted: u128,
    pub max_supply: u128,
    pub phase: MiningPhase,
    pub hold_cap_tokens: u64,
    pub hold_coef_micro: u32,
    pub nr_coef_micro: u32,
    pub last_phase_tick: i64,
    pub paused: bool,
    pub bump: u8,
    pub reserved: [u8; 64],
}

impl NetworkState {
    pub const SIZE: usize = 8 // discriminator
        + 1 // version
        + 32 // authority
        + 32 // attestor_key
        + 32 // nft_effect_authority
        + 8 // total_users
        + 16 // total_minted
        + 16 // max_supply
        + 1 // phase
        + 8 // hold_cap_tokens
        + 4 // hold_coef_micro
        + 4 // nr_coef_micro
        + 8 // last_phase_tick
        + 1 // paused
        + 1 // bump
        + 64; // reserved

    /// Advances `phase` if `total_users` has crossed a threshold since the
    /// last tick. Idempotent: calling this with no crossing is a no-op.
    pub fn maybe_advance_phase(&mut self, now: i64) -> Option<MiningPhase> {
        let observed = MiningPhase::from_total_users(self.total_users);
        if observed > self.phase {
            self.phase = observed;
            self.last_phase_tick = now;
            Some(observed)
        } else {
            None
        }
    }

    pub fn record_mint(&mut self, amount: u64) -> Result<()> {
        let new_total = self
            .total_minted
            .checked_add(amount as u128)
            .ok_or(FinovaError::MathOverflow)?;
        require!(new_total <= self.max_supply, FinovaError::SupplyCapReached);
        self.total_minted = new_total;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_thresholds_match_boundary_scenario() {
        assert_eq!(MiningPhase::from_total_users(99_999), MiningPhase::Finizen);
        assert_eq!(MiningPhase::from_total_users(100_000), MiningPhase::Growth);
        assert_eq!(MiningPhase::from_total_users(1_000_000), MiningPhase::Maturity);
        assert_eq!(MiningPhase::from_total_users(10_000_000), MiningPhase::Stability);
    }

    #[test]
    fn phase_is_monotone() {
        let mut prev = MiningPhase::Finizen;
        for users in [0, 50_000, 100_000, 500_000, 1_000_000, 5_000_000, 10_000_000, 50_000_000] {
            let phase = MiningPhase::from_total_users(users);
            assert!(phase >= prev);
            prev = phase;
        }
    }
}
