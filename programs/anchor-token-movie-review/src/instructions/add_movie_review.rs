use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::constants::{MINT_SEED, REVIEW_REWARD};
use crate::events::MovieReviewAdded;
use crate::state::MovieAccountState;
use crate::utils::{assert_description, assert_rating, assert_title};

#[derive(Accounts)]
#[instruction(title: String, description: String)]
pub struct AddMovieReview<'info> {
    #[account(
        init,
        seeds = [title.as_bytes(), initializer.key().as_ref()],
        bump,
        payer = initializer,
        space = MovieAccountState::space(&title, &description),
    )]
    pub movie_review: Account<'info, MovieAccountState>,

    /// Reviewer; pays for the review account and the ATA
    #[account(mut)]
    pub initializer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,

    /// Reward mint (must already exist from initialize_token_mint)
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    /// Reviewer's ATA for the reward mint (created if missing)
    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = mint,
        associated_token::authority = initializer,
    )]
    pub token_account: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<AddMovieReview>,
    title: String,
    description: String,
    rating: u8,
) -> Result<()> {
    assert_rating(rating)?;
    assert_title(&title)?;
    assert_description(&description)?;

    msg!("Movie Review Account created");
    msg!("Title: {}", title);
    msg!("Description: {}", description);
    msg!("Rating: {}", rating);

    let review = &mut ctx.accounts.movie_review;
    review.reviewer = ctx.accounts.initializer.key();
    review.title = title;
    review.description = description;
    review.rating = rating;

    // Mint PDA signs as its own authority
    let bump = ctx.bumps.mint;
    let signer: &[&[&[u8]]] = &[&[MINT_SEED, &[bump]]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.token_account.to_account_info(),
        authority: ctx.accounts.mint.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::mint_to(cpi_ctx, REVIEW_REWARD)?;

    msg!("Minted {} reward tokens", REVIEW_REWARD);

    let slot = Clock::get()?.slot;
    emit!(MovieReviewAdded {
        review: ctx.accounts.movie_review.key(),
        reviewer: ctx.accounts.initializer.key(),
        title: ctx.accounts.movie_review.title.clone(),
        rating,
        reward: REVIEW_REWARD,
        slot,
    });

    Ok(())
}
