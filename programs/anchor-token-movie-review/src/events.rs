use anchor_lang::prelude::*;

#[event]
pub struct ProgramInitialized {
    pub program_id: Pubkey,
    pub slot: u64,
}

#[event]
pub struct TokenMintInitialized {
    pub mint: Pubkey,
    pub payer: Pubkey,
    pub decimals: u8,
    pub slot: u64,
}

#[event]
pub struct MovieReviewAdded {
    pub review: Pubkey,
    pub reviewer: Pubkey,
    pub title: String,
    pub rating: u8,

    // Base units minted to the reviewer's ATA
    pub reward: u64,

    pub slot: u64,
}

#[event]
pub struct MovieReviewUpdated {
    pub review: Pubkey,
    pub reviewer: Pubkey,
    pub title: String,
    pub rating: u8,
    pub slot: u64,
}

#[event]
pub struct MovieReviewDeleted {
    pub review: Pubkey,
    pub reviewer: Pubkey,
    pub title: String,
    pub slot: u64,
}
