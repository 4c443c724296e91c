//! go-setup - Go project scaffolding CLI
//!
//! Materializes the recommended Go project layout into an existing
//! directory: directories, boilerplate files from an embedded bundle, and
//! optionally the contents of user-maintained profiles.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands/init → profile/ (tree copy) → scaffold/ (plan → apply)
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod profile;
mod scaffold;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
