use anchor_lang::prelude::*;

#[error_code]
pub enum MovieReviewError {
    #[msg("Rating must be between 1 and 5")]
    InvalidRating,

    #[msg("Movie Title too long")]
    TitleTooLong,

    #[msg("Movie Description too long")]
    DescriptionTooLong,
}
