//! On-chain events emitted by the Finova Core program.

use anchor_lang::prelude::*;

#[event]
pub struct UserInitialized {
    pub user: Pubkey,
    pub referrer: Option<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct ActivitySettled {
    pub user: Pubkey,
    pub xp_gained: u64,
    pub rp_gained: u64,
    pub mining_rate_micro_per_sec: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsMinted {
    pub user: Pubkey,
    pub amount_base_units: u64,
    pub timestamp: i64,
}

#[event]
pub struct EffectApplied {
    pub user: Pubkey,
    pub source_card: Pubkey,
    pub kind: crate::state::EffectKind,
    pub magnitude_micro: u64,
    pub expires_at: i64,
}

#[event]
pub struct StakeChanged {
    pub user: Pubkey,
    pub staked_delta: i64,
    pub new_total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct PhaseAdvanced {
    pub new_phase: crate::state::MiningPhase,
    pub total_users: u64,
    pub timestamp: i64,
}

#[event]
pub struct Voted {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub support: bool,
    pub weight: u64,
}

#[event]
pub struct Paused {
    pub authority: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
