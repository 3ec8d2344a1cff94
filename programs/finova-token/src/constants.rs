pub const SEED_MINT_INFO: &[u8] = b"mint_info";
pub const SEED_MINT_AUTHORITY: &[u8] = b"mint_authority";

pub const TOKEN_DECIMALS: u8 = 9;
