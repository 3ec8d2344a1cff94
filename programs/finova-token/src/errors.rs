use anchor_lang::prelude::*;

#[error_code]
pub enum FinovaTokenError {
    #[msg("This instruction may only be invoked via CPI from the Finova Core program.")]
    UnauthorizedCaller,

    #[msg("Minting this amount would exceed the configured maximum supply.")]
    SupplyCapReached,

    #[msg("Amount must be greater than zero.")]
    InvalidAmount,

    #[msg("A checked arithmetic operation would have overflowed.")]
    MathOverflow,
}
