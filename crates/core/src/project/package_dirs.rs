//! Package directory membership

use crate::utils::normalize;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

/// How a candidate path is tested against a package directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentMode {
    /// Component-wise containment: `/ws/pkg` contains `/ws/pkg/a` but not `/ws/pkg2/a`
    #[default]
    Segment,
    /// Plain string prefix: `/ws/pkg` also matches `/ws/pkg2/a`
    Prefix,
}

impl ContainmentMode {
    pub fn contains(self, dir: &Path, candidate: &Path) -> bool {
        match self {
            ContainmentMode::Segment => candidate.starts_with(dir),
            ContainmentMode::Prefix => candidate
                .to_string_lossy()
                .starts_with(dir.to_string_lossy().as_ref()),
        }
    }
}

/// Absolute package directories of one project, in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDirectorySet {
    dirs: Vec<PathBuf>,
}

impl PackageDirectorySet {
    /// Join each relative directory onto `project_root`.
    ///
    /// In `Prefix` mode a declared trailing separator survives the join, so
    /// `"force-app/"` only prefixes paths under `force-app/`. `Segment` mode
    /// compares components and drops it.
    pub fn from_relative<I, S>(project_root: &Path, relative_dirs: I, mode: ContainmentMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dirs = relative_dirs
            .into_iter()
            .map(|dir| {
                let dir = dir.as_ref();
                let joined = normalize(&project_root.join(dir));
                match mode {
                    ContainmentMode::Prefix if dir.ends_with(['/', '\\']) => {
                        let mut raw = OsString::from(joined);
                        raw.push(MAIN_SEPARATOR_STR);
                        PathBuf::from(raw)
                    }
                    _ => joined,
                }
            })
            .collect();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First package directory containing `candidate`; the scan stops at the first hit.
    pub fn first_match(&self, candidate: &Path, mode: ContainmentMode) -> Option<&Path> {
        self.dirs
            .iter()
            .find(|dir| mode.contains(dir, candidate))
            .map(PathBuf::as_path)
    }

    pub fn contains(&self, candidate: &Path, mode: ContainmentMode) -> bool {
        self.first_match(candidate, mode).is_some()
    }
}
