use anchor_lang::prelude::*;

use crate::events::MovieReviewDeleted;
use crate::state::MovieAccountState;

#[derive(Accounts)]
#[instruction(title: String)]
pub struct DeleteMovieReview<'info> {
    /// Closed on success; rent goes back to the reviewer
    #[account(
        mut,
        seeds = [title.as_bytes(), initializer.key().as_ref()],
        bump,
        close = initializer,
    )]
    pub movie_review: Account<'info, MovieAccountState>,

    #[account(mut)]
    pub initializer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DeleteMovieReview>, title: String) -> Result<()> {
    msg!("Movie review for {} is being deleted", title);

    let slot = Clock::get()?.slot;
    emit!(MovieReviewDeleted {
        review: ctx.accounts.movie_review.key(),
        reviewer: ctx.accounts.initializer.key(),
        title,
        slot,
    });

    Ok(())
}
