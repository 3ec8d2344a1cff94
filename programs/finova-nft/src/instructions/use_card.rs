use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::FinovaNftError;
use crate::events::{CardBurned, CardUsed};
use crate::state::Card;

#[derive(Accounts)]
pub struct UseCard<'info> {
    #[account(
        mut,
        seeds = [SEED_CARD, mint.key().as_ref()],
        bump = card.bump,
        constraint = card.owner == owner.key() @ FinovaNftError::NotCardOwner
    )]
    pub card: Account<'info, Card>,

    #[account(mut, address = card.mint)]
    pub mint: Account<'info, Mint>,

    #[account(mut, constraint = owner_token_account.mint == mint.key())]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    /// CHECK: this program's own PDA, signed via `invoke_signed` for the
    /// CPI into Finova Core below.
    #[account(seeds = [SEED_EFFECT_AUTHORITY], bump)]
    pub effect_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [finova_core::constants::SEED_EFFECTS, owner.key().as_ref()],
        bump,
        seeds::program = finova_core_program.key()
    )]
    pub active_effects: UncheckedAccount<'info>,

    #[account(
        seeds = [finova_core::constants::SEED_NETWORK_STATE],
        bump,
        seeds::program = finova_core_program.key()
    )]
    pub network_state: UncheckedAccount<'info>,

    pub finova_core_program: Program<'info, finova_core::program::FinovaCore>,
    pub token_program: Program<'info, Token>,
}

/// Applies the card's effect to its owner via CPI into Finova Core, then
/// decrements (and on the last use, burns) the card.
pub fn use_card(ctx: Context<UseCard>) -> Result<()> {
    require!(ctx.accounts.card.uses_remaining > 0, FinovaNftError::CardDepleted);

    let bump = ctx.bumps.effect_authority;
    let seeds: &[&[u8]] = &[SEED_EFFECT_AUTHORITY, &[bump]];
    let signer_seeds = &[seeds];

    let cpi_accounts = finova_core::cpi::accounts::ApplyEffect {
        network_state: ctx.accounts.network_state.to_account_info(),
        active_effects: ctx.accounts.active_effects.to_account_info(),
        user: ctx.accounts.owner.to_account_info(),
        nft_effect_authority: ctx.accounts.effect_authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.finova_core_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    finova_core::cpi::apply_effect(
        cpi_ctx,
        ctx.accounts.card.kind,
        ctx.accounts.card.magnitude_micro,
        ctx.accounts.card.duration_seconds,
        ctx.accounts.card.mint.key(),
        ctx.accounts.card.stackable,
    )
    .map_err(|_| FinovaNftError::ApplyEffectCpiFailed)?;

    ctx.accounts.card.uses_remaining -= 1;
    let uses_remaining = ctx.accounts.card.uses_remaining;
    let bump = ctx.accounts.card.bump;
    let mint_key = ctx.accounts.mint.key();
    let owner_key = ctx.accounts.owner.key();

    if uses_remaining == 0 {
        let burn_seeds: &[&[u8]] = &[SEED_CARD, mint_key.as_ref(), &[bump]];
        let burn_signer = &[burn_seeds];
        token::burn(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.mint.to_account_info(),
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    authority: ctx.accounts.card.to_account_info(),
                },
                burn_signer,
            ),
            1,
        )?;
        emit!(CardBurned { mint: mint_key, owner: owner_key });
    } else {
        emit!(CardUsed { mint: mint_key, owner: owner_key, uses_remaining });
    }

    Ok(())
}
