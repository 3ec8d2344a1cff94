use anchor_lang::prelude::*;

#[event]
pub struct MintInfoInitialized {
    pub mint: Pubkey,
    pub max_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsMinted {
    pub recipient_token_account: Pubkey,
    pub amount: u64,
    pub total_minted: u64,
    pub timestamp: i64,
}
