use anchor_lang::prelude::*;

#[error_code]
pub enum FinovaNftError {
    #[msg("Signer does not own this card.")]
    NotCardOwner,

    #[msg("This card has no uses left.")]
    CardDepleted,

    #[msg("The cross-program call into Finova Core failed.")]
    ApplyEffectCpiFailed,

    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
}
