#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

// Re-export so Context<AddMovieReview> etc can be referenced directly
#[allow(ambiguous_glob_reexports)]
pub use instructions::*;

declare_id!("4fKehYqNQMRoLfGLNRQjwJWs3sZA1xTGM7QSD7mLaZmM");

#[program]
pub mod anchor_token_movie_review {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn initialize_token_mint(ctx: Context<InitializeMint>) -> Result<()> {
        instructions::initialize_token_mint::handler(ctx)
    }

    pub fn add_movie_review(
        ctx: Context<AddMovieReview>,
        title: String,
        description: String,
        rating: u8,
    ) -> Result<()> {
        instructions::add_movie_review::handler(ctx, title, description, rating)
    }

    pub fn update_movie_review(
        ctx: Context<UpdateMovieReview>,
        title: String,
        description: String,
        rating: u8,
    ) -> Result<()> {
        instructions::update_movie_review::handler(ctx, title, description, rating)
    }

    pub fn delete_movie_review(ctx: Context<DeleteMovieReview>, title: String) -> Result<()> {
        instructions::delete_movie_review::handler(ctx, title)
    }
}
