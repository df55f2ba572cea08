use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{MINT_DECIMALS, MINT_SEED};
use crate::events::TokenMintInitialized;

#[derive(Accounts)]
pub struct InitializeMint<'info> {
    /// Reward mint PDA, its own mint authority
    #[account(
        init,
        seeds = [MINT_SEED],
        bump,
        payer = user,
        mint::decimals = MINT_DECIMALS,
        mint::authority = mint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeMint>) -> Result<()> {
    msg!("Token mint is being initialized");
    msg!("Mint PDA: {}", ctx.accounts.mint.key());

    let slot = Clock::get()?.slot;
    emit!(TokenMintInitialized {
        mint: ctx.accounts.mint.key(),
        payer: ctx.accounts.user.key(),
        decimals: ctx.accounts.mint.decimals,
        slot,
    });

    Ok(())
}
