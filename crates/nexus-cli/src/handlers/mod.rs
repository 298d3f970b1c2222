pub mod config;
pub mod describe;
pub mod encode;
pub mod tiers;
pub mod validate;
