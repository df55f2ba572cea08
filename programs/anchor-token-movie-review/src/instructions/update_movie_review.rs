use anchor_lang::prelude::*;

use crate::events::MovieReviewUpdated;
use crate::state::MovieAccountState;
use crate::utils::{assert_description, assert_rating};

#[derive(Accounts)]
#[instruction(title: String, description: String)]
pub struct UpdateMovieReview<'info> {
    #[account(
        mut,
        seeds = [title.as_bytes(), initializer.key().as_ref()],
        bump,
        realloc = MovieAccountState::space(&title, &description),
        realloc::payer = initializer,
        realloc::zero = true,
    )]
    pub movie_review: Account<'info, MovieAccountState>,

    #[account(mut)]
    pub initializer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Title is part of the PDA seeds and never changes.
pub fn handler(
    ctx: Context<UpdateMovieReview>,
    title: String,
    description: String,
    rating: u8,
) -> Result<()> {
    assert_rating(rating)?;
    assert_description(&description)?;

    msg!("Movie Review Account space reallocated");
    msg!("Title: {}", title);
    msg!("Description: {}", description);
    msg!("Rating: {}", rating);

    let review = &mut ctx.accounts.movie_review;
    review.description = description;
    review.rating = rating;

    let slot = Clock::get()?.slot;
    emit!(MovieReviewUpdated {
        review: review.key(),
        reviewer: review.reviewer,
        title,
        rating,
        slot,
    });

    Ok(())
}
