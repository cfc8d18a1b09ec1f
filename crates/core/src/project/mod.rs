//! SFDX project discovery and package directory membership

pub mod package_dirs;
pub mod parser;
pub mod sfdx_project;
pub mod workspace;

pub use package_dirs::{ContainmentMode, PackageDirectorySet};
pub use parser::{ProjectConfigReader, SfdxProjectJsonParser};
pub use sfdx_project::{PackageDirectory, SfdxProject, SFDX_PROJECT_FILE};
pub use workspace::Workspace;
