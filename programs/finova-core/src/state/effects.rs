use anchor_lang::prelude::*;

use crate::constants::MAX_ACTIVE_EFFECTS;
use crate::errors::FinovaError;

/// Kind of temporary boost a card can grant. Magnitudes are interpreted
/// per-kind by the reward composition in the activity pipeline.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    MiningBoost,
    XpBoost,
    RpBoost,
    QualityBoost,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude_micro: u64,
    pub expires_at: i64,
    pub source_card: Pubkey,
    pub stackable: bool,
}

impl Effect {
    pub const EMPTY: Effect = Effect {
        kind: EffectKind::MiningBoost,
        magnitude_micro: 0,
        expires_at: 0,
        source_card: Pubkey::new_from_array([0; 32]),
        stackable: false,
    };

    fn is_live(&self, now: i64) -> bool {
        self.magnitude_micro > 0 && self.expires_at > now
    }
}

/// Fixed-size inventory of a user's currently active card effects. A
/// `Vec` would need reallocation and an unbounded account size; every
/// user instead gets exactly `MAX_ACTIVE_EFFECTS` slots, expired or empty
/// ones reused lazily on the next insert.
#[account]
pub struct ActiveEffects {
    pub version: u8,
    pub owner: Pubkey,
    pub slots: [Effect; MAX_ACTIVE_EFFECTS],
    pub bump: u8,
    pub reserved: [u8; 16],
}

impl ActiveEffects {
    pub const SIZE: usize = 8
        + 1
        + 32
        + MAX_ACTIVE_EFFECTS * (1 + 8 + 8 + 32 + 1)
        + 1
        + 16;

    /// Inserts `effect` into the first expired/empty slot, evicting
    /// opportunistically rather than scanning for the globally oldest
    /// entry. Rejects up front if a live non-stackable effect of the same
    /// kind would collide with this one (at most one non-stackable effect
    /// of a given kind may be live at a time); fails with `EffectSlotFull`
    /// if no slot is free.
    pub fn apply(&mut self, effect: Effect, now: i64) -> Result<()> {
        let collides = self
            .slots
            .iter()
            .any(|s| s.is_live(now) && s.kind == effect.kind && !s.stackable && !effect.stackable);
        require!(!collides, FinovaError::InvalidEffect);

        let slot = self
            .slots
            .iter_mut()
            .find(|s| !s.is_live(now))
            .ok_or(FinovaError::EffectSlotFull)?;
        *slot = effect;
        Ok(())
    }

    /// Combined multiplier for `kind`: the product of `(1 + magnitude)`
    /// over every live slot of that kind, in micro units relative to 1.0x
    /// (i.e. a single `0.1` boost returns `1_100_000`).
    pub fn multiplier_micro(&self, kind: EffectKind, now: i64) -> u64 {
        let mut acc = crate::utils::MICRO as u128;
        for slot in self.slots.iter().filter(|s| s.is_live(now) && s.kind == kind) {
            let term = crate::utils::MICRO.saturating_add(slot.magnitude_micro) as u128;
            acc = acc.saturating_mul(term) / crate::utils::MICRO as u128;
        }
        acc as u64
    }

    /// Clears expired slots in place. Purely a housekeeping pass; `apply`
    /// already reclaims expired slots lazily so this is never required
    /// for correctness.
    pub fn gc(&mut self, now: i64) {
        for slot in self.slots.iter_mut() {
            if !slot.is_live(now) {
                *slot = Effect::EMPTY;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(kind: EffectKind, magnitude: u64, expires_at: i64, stackable: bool) -> Effect {
        Effect {
            kind,
            magnitude_micro: magnitude,
            expires_at,
            source_card: Pubkey::default(),
            stackable,
        }
    }

    fn empty_effects() -> ActiveEffects {
        ActiveEffects {
            version: 1,
            owner: Pubkey::default(),
            slots: [Effect::EMPTY; MAX_ACTIVE_EFFECTS],
            bump: 0,
            reserved: [0; 16],
        }
    }

    #[test]
    fn apply_fills_empty_slot_and_reads_back() {
        let mut effects = empty_effects();
        effects
            .apply(effect(EffectKind::MiningBoost, 200_000, 100, false), 0)
            .unwrap();
        assert_eq!(
            effects.multiplier_micro(EffectKind::MiningBoost, 0),
            1_200_000
        );
    }

    #[test]
    fn apply_rejects_second_non_stackable_of_same_kind_even_with_free_slots() {
        let mut effects = empty_effects();
        effects
            .apply(effect(EffectKind::MiningBoost, 1_000_000, 3_600, false), 0)
            .unwrap();
        let result = effects.apply(effect(EffectKind::MiningBoost, 2_000_000, 1_800, false), 0);
        assert!(result.is_err());
    }

    #[test]
    fn apply_allows_stackable_alongside_live_non_stackable_of_same_kind() {
        let mut effects = empty_effects();
        effects
            .apply(effect(EffectKind::MiningBoost, 1_000_000, 3_600, false), 0)
            .unwrap();
        effects
            .apply(effect(EffectKind::MiningBoost, 500_000, 3_600, true), 0)
            .unwrap();
        assert_eq!(
            effects.multiplier_micro(EffectKind::MiningBoost, 0),
            3_000_000
        );
    }

    #[test]
    fn apply_errors_when_every_slot_is_live() {
        let mut effects = empty_effects();
        for i in 0..MAX_ACTIVE_EFFECTS {
            let kind = if i % 2 == 0 {
                EffectKind::XpBoost
            } else {
                EffectKind::RpBoost
            };
            effects.apply(effect(kind, 1, 100, true), 0).unwrap();
        }
        let result = effects.apply(effect(EffectKind::QualityBoost, 1, 100, false), 0);
        assert!(result.is_err());
    }

    #[test]
    fn apply_reclaims_expired_slot() {
        let mut effects = empty_effects();
        effects
            .apply(effect(EffectKind::MiningBoost, 100, 5, false), 0)
            .unwrap();
        for _ in 1..MAX_ACTIVE_EFFECTS {
            effects
                .apply(effect(EffectKind::XpBoost, 1, 1_000, true), 0)
                .unwrap();
        }
        effects
            .apply(effect(EffectKind::RpBoost, 1, 1_000, false), 10)
            .unwrap();
    }

    #[test]
    fn stacking_compounds_multiplicatively_per_slot() {
        let mut effects = empty_effects();
        effects
            .apply(effect(EffectKind::MiningBoost, 1_000_000, 3_600, false), 0)
            .unwrap();
        effects
            .apply(effect(EffectKind::MiningBoost, 500_000, 3_600, true), 0)
            .unwrap();
        effects
            .apply(effect(EffectKind::MiningBoost, 200_000, 3_600, true), 0)
            .unwrap();
        assert_eq!(
            effects.multiplier_micro(EffectKind::MiningBoost, 0),
            3_600_000
        );
    }
}
