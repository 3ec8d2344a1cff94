pub const SEED_CARD: &[u8] = b"card";

/// Seed for this program's own PDA identity, passed as a signer into
/// Finova Core's `apply_effect` CPI. Only this program's id can produce a
/// valid signature for a PDA derived under it.
pub const SEED_EFFECT_AUTHORITY: &[u8] = b"effect_authority";
