//! source-retrieve - retrieve Salesforce metadata for a selected file or directory
//!
//! This crate provides functionality to:
//! - Locate the SFDX project and read its package directories from `sfdx-project.json`
//! - Check that a selected path lies inside one of those package directories
//! - Build and run `sfdx force:source:retrieve --sourcepath <path>`, streaming its output
//! - Compose those steps through a four-stage commandlet pipeline
pub mod command;
pub mod commandlet;
pub mod config;
pub mod error;
pub mod messages;
pub mod project;
pub mod report;
pub mod retrieve;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, PathCheckError, Result};

// Re-export main API components
pub use command::{SfdxCommand, SfdxCommandBuilder};
pub use commandlet::{CommandletOutcome, Response, StageOrder};
pub use config::Config;
pub use messages::{Locale, Localizer};
pub use project::{ContainmentMode, PackageDirectorySet, Workspace};
pub use report::Reporters;
pub use retrieve::{RetrieveContext, SourcePathChecker, build_retrieve_command};
