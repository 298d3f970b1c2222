pub mod identity;
pub mod tier;

pub use identity::{DecodedIdentity, KeyAttributes};
pub use tier::{Tier, UnknownTier};
