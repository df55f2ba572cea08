use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_RATING, MAX_TITLE_LENGTH, MIN_RATING};
use crate::errors::MovieReviewError;

pub fn assert_rating(rating: u8) -> Result<()> {
    require!(
        (MIN_RATING..=MAX_RATING).contains(&rating),
        MovieReviewError::InvalidRating
    );
    Ok(())
}

/// Lengths are in bytes, not chars.
pub fn assert_title(title: &str) -> Result<()> {
    require!(
        title.len() <= MAX_TITLE_LENGTH,
        MovieReviewError::TitleTooLong
    );
    Ok(())
}

pub fn assert_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LENGTH,
        MovieReviewError::DescriptionTooLong
    );
    Ok(())
}
