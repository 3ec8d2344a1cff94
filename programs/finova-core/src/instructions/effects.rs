use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::FinovaError;
use crate::events::EffectApplied;
use crate::state::*;

#[derive(Accounts)]
pub struct ApplyEffect<'info> {
    #[account(seeds = [SEED_NETWORK_STATE], bump = network_state.bump)]
    pub network_state: Account<'info, NetworkState>,

    #[account(mut, seeds = [SEED_EFFECTS, user.key().as_ref()], bump = active_effects.bump)]
    pub active_effects: Account<'info, ActiveEffects>,

    /// CHECK: the user whose effects are being modified; not required to
    /// sign since this instruction only ever arrives via CPI from the NFT
    /// program, which has already authorized the card use against this
    /// user's own token account.
    pub user: UncheckedAccount<'info>,

    /// CHECK: the NFT program's PDA, validated by address against the
    /// value recorded at network initialization; its presence as a signer
    /// here is only reachable through the NFT program's own
    /// `invoke_signed`.
    #[account(address = network_state.nft_effect_authority @ FinovaError::UnauthorizedCaller)]
    pub nft_effect_authority: Signer<'info>,
}

/// Applies a card's effect to `user`'s active-effects inventory. Reachable
/// only via CPI from the Finova NFT program.
pub fn apply_effect(
    ctx: Context<ApplyEffect>,
    kind: EffectKind,
    magnitude_micro: u64,
    duration_seconds: i64,
    source_card: Pubkey,
    stackable: bool,
) -> Result<()> {
    require!(magnitude_micro > 0, FinovaError::InvalidAmount);
    require!(duration_seconds > 0, FinovaError::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    let expires_at = now
        .checked_add(duration_seconds)
        .ok_or(FinovaError::MathOverflow)?;

    let effect = Effect {
        kind,
        magnitude_micro,
        expires_at,
        source_card,
        stackable,
    };

    ctx.accounts.active_effects.apply(effect, now)?;

    emit!(EffectApplied {
        user: ctx.accounts.user.key(),
        source_card,
        kind,
        magnitude_micro,
        expires_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct GcEffects<'info> {
    #[account(mut, seeds = [SEED_EFFECTS, owner.key().as_ref()], bump = active_effects.bump)]
    pub active_effects: Account<'info, ActiveEffects>,

    pub owner: Signer<'info>,
}

/// Clears expired effect slots ahead of a read. Never required for
/// correctness — `apply_effect` already reclaims expired slots lazily on
/// insert — but lets a client settle on a deterministic slot layout.
pub fn gc_effects(ctx: Context<GcEffects>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.active_effects.gc(now);
    Ok(())
}
