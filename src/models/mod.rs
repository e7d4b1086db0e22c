//! Types that are really the bedrock of the crate.

pub mod analysis;
pub mod metadata;
pub mod source;
