/// Anchor account discriminator prefix.
pub const ANCHOR_DISCRIMINATOR: usize = 8;
pub const PUBKEY_SIZE: usize = 32;
pub const U8_SIZE: usize = 1;
/// Borsh u32 length prefix in front of every String.
pub const STRING_LENGTH_PREFIX: usize = 4;

pub const MAX_TITLE_LENGTH: usize = 20;
pub const MAX_DESCRIPTION_LENGTH: usize = 50;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Seed of the reward mint PDA. The mint is its own mint authority.
pub const MINT_SEED: &[u8] = b"mint";
pub const MINT_DECIMALS: u8 = 6;

/// Tokens minted to a reviewer for each new review: 10 whole tokens.
pub const REVIEW_REWARD: u64 = 10 * 10u64.pow(MINT_DECIMALS as u32);
