//! Profile command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::error::SetupError;
use crate::profile::ProfileStore;
use crate::utils::paths::ConfigPaths;
use crate::utils::terminal::{print_error, print_info, print_success, print_warning};

/// Manage stored profiles
#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// List stored profiles
    List,

    /// Store a copy of a directory as a new profile
    Add {
        /// Profile name
        name: String,

        /// Directory to copy into the profile
        #[arg(long, default_value = ".")]
        from: PathBuf,
    },

    /// Print the directory holding the profiles
    Path,
}

impl ProfileCommand {
    /// Execute the profile command
    pub fn execute(self) -> Result<()> {
        let store = ConfigPaths::discover()
            .map(ProfileStore::new)
            .unwrap_or_else(|e| fail(e));

        match self.action {
            ProfileAction::List => {
                let names = store.list().unwrap_or_else(|e| fail(e));
                if names.is_empty() {
                    print_info(&format!(
                        "No profiles yet. Add one with: go-setup profile add <name> --from <dir>  (stored in {})",
                        store.root().display()
                    ));
                }
                for name in names {
                    println!("{}", name);
                }
            }
            ProfileAction::Add { name, from } => {
                let copied = store.add(&name, &from).unwrap_or_else(|e| fail(e));
                for err in &copied.errors {
                    print_error(&err.to_string());
                }
                if copied.is_clean() {
                    print_success(&format!("profile '{}' added: {}", name, copied.summary()));
                } else {
                    print_warning(&format!(
                        "profile '{}' added with issues: {}",
                        name,
                        copied.summary()
                    ));
                }
            }
            ProfileAction::Path => println!("{}", store.root().display()),
        }

        Ok(())
    }
}

fn fail(err: SetupError) -> ! {
    err.display_with_hints();
    std::process::exit(1);
}
