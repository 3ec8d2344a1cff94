use anchor_lang::prelude::*;

/// Program-wide mint configuration, owned by a PDA that also acts as the
/// SPL mint authority. `core_authority` is a second, data-less PDA owned
/// by the Finova Core program; its presence as a signer on `mint_rewards`
/// is what gates that instruction to CORE-originated CPIs only.
#[account]
pub struct MintInfo {
    pub version: u8,
    pub mint: Pubkey,
    pub core_authority: Pubkey,
    pub max_supply: u64,
    pub total_minted: u64,
    pub bump: u8,
    pub reserved: [u8; 32],
}

impl MintInfo {
    pub const SIZE: usize = 8 + 1 + 32 + 32 + 8 + 8 + 1 + 32;
}
