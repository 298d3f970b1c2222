//! Command-line front end for nexus membership keys.
//!
//! Plumbing only: every command forwards to `nexus-codec` or `nexus-qr` and
//! renders the result as plain text or JSON.

mod args;
mod commands;
pub mod config;
mod handlers;
mod render;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
