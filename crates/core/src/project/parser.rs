//! Project descriptor reading
//!
//! The checker only needs the relative package directory paths, so the
//! reader is a narrow trait and tests can swap in a failing or canned one.

use super::sfdx_project::SfdxProject;
use crate::error::Result;
use std::path::Path;

pub trait ProjectConfigReader: Send + Sync {
    /// Package directory paths relative to the project root, in declared order
    fn package_directory_paths(&self, project_root: &Path) -> Result<Vec<String>>;
}

/// Reads `sfdx-project.json` from disk on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SfdxProjectJsonParser;

impl SfdxProjectJsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectConfigReader for SfdxProjectJsonParser {
    fn package_directory_paths(&self, project_root: &Path) -> Result<Vec<String>> {
        let project = SfdxProject::load(project_root)?;
        Ok(project
            .package_directories
            .into_iter()
            .map(|dir| dir.path)
            .collect())
    }
}
