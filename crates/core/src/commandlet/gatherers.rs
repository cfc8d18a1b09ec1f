//! Stock precondition checker and parameter gatherer

use super::traits::{ParametersGatherer, PreconditionChecker};
use super::types::Response;
use crate::{error::Result, project::Workspace, report::Reporters, utils::absolutize};
use std::path::PathBuf;

/// Passes when an SFDX project workspace is open
pub struct WorkspaceChecker {
    workspace: Option<Workspace>,
    reporters: Reporters,
}

impl WorkspaceChecker {
    pub fn new(workspace: Option<Workspace>, reporters: Reporters) -> Self {
        Self {
            workspace,
            reporters,
        }
    }
}

impl PreconditionChecker for WorkspaceChecker {
    fn check(&self) -> bool {
        if self.workspace.as_ref().is_some_and(Workspace::is_sfdx_project) {
            return true;
        }

        let message = self
            .reporters
            .nls
            .localize("predicates_no_sfdx_project_found_text", &[]);
        tracing::debug!("Precondition failed: {:?}", self.workspace);
        self.reporters.notifications.show_error(&message);
        false
    }
}

/// Wraps a caller-supplied path, made absolute against `cwd`
pub struct FilePathGatherer {
    path: PathBuf,
    cwd: PathBuf,
}

impl FilePathGatherer {
    pub fn new(path: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cwd: cwd.into(),
        }
    }
}

impl ParametersGatherer<PathBuf> for FilePathGatherer {
    fn gather(&self) -> Result<Response<PathBuf>> {
        if self.path.as_os_str().is_empty() {
            tracing::debug!("No path selected");
            return Ok(Response::Cancel);
        }
        Ok(Response::Continue(absolutize(&self.cwd, &self.path)))
    }
}
