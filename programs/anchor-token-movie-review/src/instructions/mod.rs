// Every module exports its own `handler`; callers use the qualified path.
#![allow(ambiguous_glob_reexports)]

pub mod add_movie_review;
pub mod delete_movie_review;
pub mod initialize;
pub mod initialize_token_mint;
pub mod update_movie_review;

pub use add_movie_review::*;
pub use delete_movie_review::*;
pub use initialize::*;
pub use initialize_token_mint::*;
pub use update_movie_review::*;
