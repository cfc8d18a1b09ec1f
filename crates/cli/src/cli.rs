use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{check_command, init_command, package_dirs_command, retrieve_command};

#[derive(Parser, Debug)]
#[command(name = "source-retrieve")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging\n    PROJECT_ROOT      Workspace root used when --workspace is not given"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve source from the org for a file or directory
    #[command(visible_alias = "r")]
    Retrieve {
        /// File or directory inside a package directory
        path: PathBuf,

        /// SFDX project root (defaults to PROJECT_ROOT, then the nearest sfdx-project.json)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Hold back command output unless something fails
        #[arg(short, long)]
        quiet: bool,
    },
    /// Check that a path lies inside a package directory
    #[command(visible_alias = "c")]
    Check {
        path: PathBuf,

        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
    /// List the package directories declared in sfdx-project.json
    PackageDirs {
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
    /// Initialize source-retrieve configuration
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Retrieve {
                path,
                workspace,
                dry_run,
                quiet,
            } => retrieve_command(&path, workspace.as_deref(), dry_run, quiet),
            Commands::Check { path, workspace } => check_command(&path, workspace.as_deref()),
            Commands::PackageDirs { workspace } => package_dirs_command(workspace.as_deref()),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
