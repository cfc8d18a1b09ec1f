//! Workspace root resolution

use super::sfdx_project::SFDX_PROJECT_FILE;
use crate::utils::absolutize;
use std::path::{Path, PathBuf};

/// Environment variable naming the workspace root
pub const PROJECT_ROOT_ENV: &str = "PROJECT_ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the root holds an `sfdx-project.json`
    pub fn is_sfdx_project(&self) -> bool {
        self.root.join(SFDX_PROJECT_FILE).is_file()
    }

    /// Resolve the workspace from an explicit root, `PROJECT_ROOT`, or the
    /// nearest ancestor of `cwd` containing `sfdx-project.json`.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Option<Self> {
        let env_root = std::env::var_os(PROJECT_ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(explicit, env_root.as_deref(), cwd)
    }

    pub fn resolve_with(explicit: Option<&Path>, env_root: Option<&Path>, cwd: &Path) -> Option<Self> {
        if let Some(root) = explicit {
            tracing::debug!("Using explicit workspace root: {:?}", root);
            return Some(Self::new(absolutize(cwd, root)));
        }

        if let Some(root) = env_root {
            tracing::debug!("Using {} workspace root: {:?}", PROJECT_ROOT_ENV, root);
            return Some(Self::new(absolutize(cwd, root)));
        }

        Self::find_from(cwd)
    }

    /// Walk up from `start` to the first directory holding `sfdx-project.json`
    pub fn find_from(start: &Path) -> Option<Self> {
        let mut current = start.to_path_buf();
        loop {
            if current.join(SFDX_PROJECT_FILE).is_file() {
                tracing::debug!("Found SFDX project at: {:?}", current);
                return Some(Self::new(current));
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(SFDX_PROJECT_FILE),
            r#"{ "packageDirectories": [{ "path": "force-app" }] }"#,
        )
        .unwrap();
        std::fs::create_dir_all(temp.path().join("force-app/main/default")).unwrap();
        temp
    }

    #[test]
    fn test_finds_project_from_nested_dir() {
        let temp = project();
        let nested = temp.path().join("force-app/main/default");

        let workspace = Workspace::resolve_with(None, None, &nested).unwrap();
        assert_eq!(workspace.root(), temp.path());
        assert!(workspace.is_sfdx_project());
    }

    #[test]
    fn test_explicit_root_wins() {
        let temp = project();
        let other = TempDir::new().unwrap();

        let workspace =
            Workspace::resolve_with(Some(other.path()), Some(temp.path()), temp.path()).unwrap();
        assert_eq!(workspace.root(), other.path());
        assert!(!workspace.is_sfdx_project());
    }

    #[test]
    fn test_env_root_before_search() {
        let temp = project();
        let other = TempDir::new().unwrap();

        let workspace = Workspace::resolve_with(None, Some(other.path()), temp.path()).unwrap();
        assert_eq!(workspace.root(), other.path());
    }

    #[test]
    fn test_no_project_found() {
        let temp = TempDir::new().unwrap();
        assert!(Workspace::find_from(temp.path()).is_none());
    }
}
