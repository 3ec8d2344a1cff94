use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use finova_core::state::EffectKind;

use crate::constants::*;
use crate::events::CardMinted;
use crate::state::Card;

#[derive(Accounts)]
pub struct MintCard<'info> {
    #[account(
        init,
        payer = payer,
        mint::decimals = 0,
        mint::authority = card,
        mint::freeze_authority = card
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        space = Card::SIZE,
        seeds = [SEED_CARD, mint.key().as_ref()],
        bump
    )]
    pub card: Account<'info, Card>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = owner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// CHECK: the recipient; need not sign to be minted to.
    pub owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn mint_card(
    ctx: Context<MintCard>,
    kind: EffectKind,
    magnitude_micro: u64,
    duration_seconds: i64,
    uses: u8,
    stackable: bool,
) -> Result<()> {
    let card = &mut ctx.accounts.card;
    card.version = 1;
    card.mint = ctx.accounts.mint.key();
    card.owner = ctx.accounts.owner.key();
    card.kind = kind;
    card.magnitude_micro = magnitude_micro;
    card.duration_seconds = duration_seconds;
    card.stackable = stackable;
    card.uses_remaining = uses;
    card.bump = ctx.bumps.card;
    card.reserved = [0; 32];

    let mint_key = ctx.accounts.mint.key();
    let seeds: &[&[u8]] = &[SEED_CARD, mint_key.as_ref(), &[ctx.bumps.card]];
    let signer_seeds = &[seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.card.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    emit!(CardMinted {
        mint: mint_key,
        owner: ctx.accounts.owner.key(),
        kind,
        magnitude_micro,
        uses,
    });

    Ok(())
}
