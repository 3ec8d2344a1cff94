use anchor_lang::prelude::*;

use crate::constants::SEED_USER;
use crate::errors::FinovaError;

/// Bit positions within `UserState.flags`. Plain constants rather than a
/// bitflags type since the field itself has to stay a bare `u32` to
/// round-trip through Borsh unchanged.
pub mod user_flags {
    pub const SUSPENDED: u32 = 1 << 0;
    pub const UNDER_REVIEW: u32 = 1 << 1;
    pub const PROOF_OF_HUMANITY: u32 = 1 << 2;
}

/// Per-user account, created once by `initialize_user` and mutated by
/// CORE for the lifetime of the user. Owned by a PDA derived from
/// `(SEED_USER, authority)`.
#[account]
pub struct UserState {
    pub version: u8,
    pub authority: Pubkey,
    pub created_at: i64,
    pub last_active: i64,
    pub kyc_verified: bool,
    pub human_probability_micro: u32,
    pub suspicion_score: u32,
    pub referrer: Option<Pubkey>,
    pub flags: u32,
    pub last_attestation_nonce: u64,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl UserState {
    pub const SIZE: usize = 8
        + 1 // version
        + 32 // authority
        + 8 // created_at
        + 8 // last_active
        + 1 // kyc_verified
        + 4 // human_probability_micro
        + 4 // suspicion_score
        + (1 + 32) // referrer
        + 4 // flags
        + 8 // last_attestation_nonce
        + 1 // bump
        + 32; // reserved

    pub const MAX_HUMAN_PROBABILITY_MICRO: u32 = 1_000_000;

    pub fn seeds<'a>(&'a self, authority: &'a Pubkey) -> [&'a [u8]; 2] {
        [SEED_USER, authority.as_ref()]
    }

    pub fn set_human_probability(&mut self, value_micro: u32) -> Result<()> {
        require!(
            value_micro <= Self::MAX_HUMAN_PROBABILITY_MICRO,
            FinovaError::InvalidAmount
        );
        self.human_probability_micro = value_micro;
        Ok(())
    }

    pub fn security_factor_micro(&self) -> u64 {
        if self.kyc_verified {
            crate::constants::SECURITY_KYC_MICRO
        } else {
            crate::constants::SECURITY_NON_KYC_MICRO
        }
    }

    /// Accepts `nonce` as the next attestation nonce, rejecting anything
    /// not strictly greater than the last one seen.
    pub fn consume_nonce(&mut self, nonce: u64) -> Result<()> {
        require!(nonce > self.last_attestation_nonce, FinovaError::ReplayDetected);
        self.last_attestation_nonce = nonce;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_probability_is_bounded() {
        let mut user = UserState {
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
        assert!(user.set_human_probability(1_000_001).is_err());
        assert!(user.set_human_probability(1_000_000).is_ok());
    }

    #[test]
    fn consume_nonce_rejects_replay_and_non_increasing() {
        let mut user = UserState {
            version: 1,
            authority: Pubkey::default(),
            created_at: 0,
            last_active: 0,
            kyc_verified: false,
            human_probability_micro: 0,
            suspicion_score: 0,
            referrer: None,
            flags: 0,
            last_attestation_nonce: 5,
            bump: 0,
            reserved: [0; 32],
        };
        assert!(user.consume_nonce(5).is_err());
        assert!(user.consume_nonce(4).is_err());
        assert!(user.consume_nonce(6).is_ok());
        assert_eq!(user.last_attestation_nonce, 6);
    }
}
