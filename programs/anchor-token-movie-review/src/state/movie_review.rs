use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR, PUBKEY_SIZE, STRING_LENGTH_PREFIX, U8_SIZE};

/// One review per (title, reviewer) pair.
/// PDA seeds: [title, reviewer].
#[account]
pub struct MovieAccountState {
    /// Wallet that wrote the review
    pub reviewer: Pubkey,

    /// 1..=5
    pub rating: u8,

    pub title: String,

    pub description: String,
}

impl Space for MovieAccountState {
    /// Fixed part only, INCLUDING the discriminator. String bodies are added per review.
    const INIT_SPACE: usize = ANCHOR_DISCRIMINATOR
        + PUBKEY_SIZE // reviewer
        + U8_SIZE // rating
        + STRING_LENGTH_PREFIX // title
        + STRING_LENGTH_PREFIX; // description
}

impl MovieAccountState {
    /// Total bytes for a review holding `title` and `description`.
    pub fn space(title: &str, description: &str) -> usize {
        Self::INIT_SPACE + title.len() + description.len()
    }

    /// None when the title cannot be a seed (longer than 32 bytes).
    pub fn find_address(title: &str, reviewer: &Pubkey) -> Option<(Pubkey, u8)> {
        Pubkey::try_find_program_address(&[title.as_bytes(), reviewer.as_ref()], &crate::ID)
    }
}
