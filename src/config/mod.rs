//! User configuration for go-setup
//!
//! `~/.go-setup/config.toml` is optional. Its values sit between the
//! command-line flags and the built-in defaults.

mod user_config;
pub mod validation;

pub use user_config::UserConfig;
