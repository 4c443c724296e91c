//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{init::InitCommand, profile::ProfileCommand};
use crate::utils::terminal;

/// go-setup - Go project scaffolding
///
/// Lays out the recommended Go project structure with boilerplate files,
/// optionally seeded from your own profiles.
#[derive(Parser, Debug)]
#[command(name = "go-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a project with the recommended directories and files
    Init(InitCommand),

    /// Manage profiles stored in ~/.go-setup/profiles
    Profile(ProfileCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        terminal::set_verbose(self.verbose);

        match self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Profile(cmd) => cmd.execute(),
        }
    }
}
