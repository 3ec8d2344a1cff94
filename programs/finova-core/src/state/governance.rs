use anchor_lang::prelude::*;

use crate::errors::FinovaError;

/// A governance proposal. Accounting-only: CORE records and tallies votes
/// but does not execute any on-chain effect when a proposal passes.
#[account]
pub struct Proposal {
    pub version: u8,
    pub id: u64,
    pub creator: Pubkey,
    pub created_at: i64,
    pub voting_ends_at: i64,
    pub yes_weight: u64,
    pub no_weight: u64,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl Proposal {
    pub const SIZE: usize = 8 + 1 + 8 + 32 + 8 + 8 + 8 + 8 + 1 + 32;

    pub fn is_open(&self, now: i64) -> bool {
        now < self.voting_ends_at
    }

    pub fn record_vote(&mut self, weight: u64, support: bool) -> Result<()> {
        if support {
            self.yes_weight = self
                .yes_weight
                .checked_add(weight)
                .ok_or(FinovaError::MathOverflow)?;
        } else {
            self.no_weight = self
                .no_weight
                .checked_add(weight)
                .ok_or(FinovaError::MathOverflow)?;
        }
        Ok(())
    }
}

/// One per (user, proposal) pair, existence alone proving the vote was
/// already cast; `initialize`-via-`init` on this account is what Anchor
/// uses to reject a second vote from the same user.
#[account]
pub struct VoteRecord {
    pub version: u8,
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub support: bool,
    pub weight: u64,
    pub cast_at: i64,
    pub bump: u8,
}

impl VoteRecord {
    pub const SIZE: usize = 8 + 1 + 32 + 32 + 1 + 8 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_vote_accumulates_by_side() {
        let mut proposal = Proposal {
            version: 1,
            id: 1,
            creator: Pubkey::default(),
            created_at: 0,
            voting_ends_at: 100,
            yes_weight: 0,
            no_weight: 0,
            bump: 0,
            reserved: [0; 32],
        };
        proposal.record_vote(10, true).unwrap();
        proposal.record_vote(5, false).unwrap();
        assert_eq!(proposal.yes_weight, 10);
        assert_eq!(proposal.no_weight, 5);
    }

    #[test]
    fn is_open_respects_voting_window() {
        let proposal = Proposal {
            version: 1,
            id: 1,
            creator: Pubkey::default(),
            created_at: 0,
            voting_ends_at: 100,
            yes_weight: 0,
            no_weight: 0,
            bump: 0,
            reserved: [0; 32],
        };
        assert!(proposal.is_open(99));
        assert!(!proposal.is_open(100));
    }
}
