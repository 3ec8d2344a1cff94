//! Error types for the Finova Core program.

use anchor_lang::prelude::*;

#[error_code]
pub enum FinovaError {
    #[msg("Signer is not authorized to perform this action.")]
    Unauthorized,

    #[msg("This account has already been initialized.")]
    AlreadyInitialized,

    #[msg("This account has not been initialized.")]
    NotInitialized,

    #[msg("A checked arithmetic operation would have overflowed.")]
    MathOverflow,

    #[msg("A checked arithmetic operation would have underflowed.")]
    MathUnderflow,

    #[msg("The activity attestation is older than the freshness window allows.")]
    StaleAttestation,

    #[msg("This attestation nonce has already been consumed.")]
    ReplayDetected,

    #[msg("The attestor signature over this activity report is invalid.")]
    BadSignature,

    #[msg("The reported quality score is outside the allowed range.")]
    InvalidQualityScore,

    #[msg("This user has already reached today's XP cap.")]
    DailyCapReached,

    #[msg("Minting this amount would exceed the network's maximum supply.")]
    SupplyCapReached,

    #[msg("The network is currently paused.")]
    Paused,

    #[msg("This effect kind is not recognized.")]
    InvalidEffect,

    #[msg("No free effect slot is available for this user.")]
    EffectSlotFull,

    #[msg("This instruction may only be invoked via CPI from the expected program.")]
    UnauthorizedCaller,

    #[msg("There is nothing pending to claim.")]
    NothingToClaim,

    #[msg("The cross-program call to the token mint authority failed.")]
    MintCpiFailed,

    #[msg("A user cannot refer themselves.")]
    SelfReferral,

    #[msg("The referrer's chain loops back to the signer within the allowed hop limit.")]
    CircularReferral,

    #[msg("The staked amount is below the minimum for any tier.")]
    BelowMinStake,

    #[msg("These funds are still within their lockup period.")]
    Locked,

    #[msg("Requested amount exceeds the user's staked balance.")]
    Overdrawn,

    #[msg("This user has already voted on this proposal.")]
    AlreadyVoted,

    #[msg("This proposal id is not recognized.")]
    UnknownProposal,

    #[msg("Timestamp is invalid (in the future, or otherwise out of range).")]
    InvalidTimestamp,

    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
}
