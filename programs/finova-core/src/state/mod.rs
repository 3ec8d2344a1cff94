//! On-chain account layouts for the Finova Core program.

pub mod effects;
pub mod governance;
pub mod mining;
pub mod network;
pub mod referral;
pub mod staking;
pub mod user;
pub mod xp;

pub use effects::{ActiveEffects, Effect, EffectKind};
pub use governance::{Proposal, VoteRecord};
pub use mining::MiningAccrual;
pub use network::{MiningPhase, NetworkState};
pub use referral::ReferralState;
pub use staking::StakingState;
pub use user::UserState;
pub use xp::{xp_gain_decay_micro, XpState};
