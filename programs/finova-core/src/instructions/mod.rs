//! Instruction handlers for the Finova Core program.

pub mod activity;
pub mod admin;
pub mod effects;
pub mod governance;
pub mod initialize;
pub mod rewards;
pub mod staking;

pub use activity::*;
pub use admin::*;
pub use effects::*;
pub use governance::*;
pub use initialize::*;
pub use rewards::*;
pub use staking::*;
