//! Postcondition: the selected path must lie inside a package directory

use crate::{
    commandlet::{PostconditionChecker, Response},
    error::{Error, PathCheckError},
    project::{ContainmentMode, PackageDirectorySet, ProjectConfigReader, Workspace},
    report::Reporters,
};
use std::path::{Path, PathBuf};

pub struct SourcePathChecker {
    workspace: Option<Workspace>,
    reader: Box<dyn ProjectConfigReader>,
    mode: ContainmentMode,
    reporters: Reporters,
}

impl SourcePathChecker {
    pub fn new(
        workspace: Option<Workspace>,
        reader: impl ProjectConfigReader + 'static,
        mode: ContainmentMode,
        reporters: Reporters,
    ) -> Self {
        Self {
            workspace,
            reader: Box::new(reader),
            mode,
            reporters,
        }
    }

    /// Package directory containing `source_path`.
    ///
    /// The project descriptor is read on every call.
    pub fn verify(&self, source_path: &Path) -> Result<PathBuf, PathCheckError> {
        let Some(workspace) = &self.workspace else {
            return Err(PathCheckError::config_unreadable(&Error::NoWorkspace(
                source_path.to_path_buf(),
            )));
        };

        let relative_dirs = self
            .reader
            .package_directory_paths(workspace.root())
            .map_err(|e| PathCheckError::config_unreadable(&e))?;
        let dirs = PackageDirectorySet::from_relative(workspace.root(), relative_dirs, self.mode);

        dirs.first_match(source_path, self.mode)
            .map(Path::to_path_buf)
            .ok_or_else(|| PathCheckError::PathNotInPackage {
                path: source_path.to_path_buf(),
            })
    }

    /// Tell the user why the path was rejected.
    pub fn report(&self, error: &PathCheckError) {
        let message = self
            .reporters
            .nls
            .localize("error_source_path_not_in_package_directory_text", &[]);

        match error {
            PathCheckError::ConfigUnreadable { name, detail } => {
                tracing::warn!("Could not read package directories: {}", detail);
                self.reporters.telemetry.send_error(name);
                self.reporters.telemetry.send_error(&message);
                self.reporters.notifications.show_error(&message);
                self.reporters.channel.append_line(&message);
                self.reporters.channel.append_line(detail);
                self.reporters.channel.show();
            }
            PathCheckError::PathNotInPackage { path } => {
                tracing::debug!("{} is outside every package directory", path.display());
                self.reporters.report_error(&message);
            }
        }
    }
}

impl PostconditionChecker<PathBuf> for SourcePathChecker {
    fn check(&self, inputs: Response<PathBuf>) -> Response<PathBuf> {
        let Response::Continue(source_path) = inputs else {
            return Response::Cancel;
        };

        match self.verify(&source_path) {
            Ok(dir) => {
                tracing::debug!("{} is in package directory {}", source_path.display(), dir.display());
                Response::Continue(source_path)
            }
            Err(e) => {
                self.report(&e);
                Response::Cancel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::messages::Localizer;
    use crate::report::{MemoryReporters, ReportEvent};

    const NOT_IN_PACKAGE: &str = "You can retrieve source only for a file or directory that is inside a package directory listed in sfdx-project.json.";

    struct Dirs(Vec<&'static str>);
    impl ProjectConfigReader for Dirs {
        fn package_directory_paths(&self, _root: &Path) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|d| d.to_string()).collect())
        }
    }

    struct Broken;
    impl ProjectConfigReader for Broken {
        fn package_directory_paths(&self, _root: &Path) -> Result<Vec<String>> {
            Err(Error::ProjectConfigError("expected value at line 1 column 1".to_string()))
        }
    }

    fn checker(reader: impl ProjectConfigReader + 'static, mode: ContainmentMode, memory: &MemoryReporters) -> SourcePathChecker {
        SourcePathChecker::new(
            Some(Workspace::new("/ws")),
            reader,
            mode,
            memory.reporters(Localizer::default()),
        )
    }

    #[test]
    fn test_path_in_package_continues_unchanged() {
        let memory = MemoryReporters::new();
        let checker = checker(Dirs(vec!["pkg1", "pkg2"]), ContainmentMode::Segment, &memory);
        let path = PathBuf::from("/ws/pkg1/classes/Foo.cls");

        assert_eq!(
            checker.check(Response::Continue(path.clone())),
            Response::Continue(path)
        );
        assert!(memory.is_empty());
    }

    #[test]
    fn test_path_outside_packages_cancels_and_reports_once() {
        let memory = MemoryReporters::new();
        let checker = checker(Dirs(vec!["pkg1", "pkg2"]), ContainmentMode::Segment, &memory);

        let result = checker.check(Response::Continue(PathBuf::from("/ws/other/Foo.cls")));

        assert_eq!(result, Response::Cancel);
        assert_eq!(memory.telemetry_errors(), vec![NOT_IN_PACKAGE]);
        assert_eq!(memory.error_notifications(), vec![NOT_IN_PACKAGE]);
        assert_eq!(memory.channel_lines(), vec![NOT_IN_PACKAGE]);
        assert_eq!(memory.channel_shows(), 1);
    }

    #[test]
    fn test_unreadable_config_sends_error_name_then_message() {
        let memory = MemoryReporters::new();
        let checker = checker(Broken, ContainmentMode::Segment, &memory);

        let result = checker.check(Response::Continue(PathBuf::from("/ws/pkg1/Foo.cls")));

        assert_eq!(result, Response::Cancel);
        assert_eq!(memory.telemetry_errors(), vec!["ProjectConfigError", NOT_IN_PACKAGE]);
        assert_eq!(memory.error_notifications(), vec![NOT_IN_PACKAGE]);
        assert_eq!(memory.channel_lines()[0], NOT_IN_PACKAGE);
        assert!(memory.channel_lines()[1].contains("line 1 column 1"));
        assert_eq!(memory.channel_shows(), 1);
    }

    #[test]
    fn test_cancel_passes_through_silently() {
        let memory = MemoryReporters::new();
        let checker = checker(Broken, ContainmentMode::Segment, &memory);

        assert_eq!(checker.check(Response::Cancel), Response::Cancel);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_sibling_prefix_depends_on_mode() {
        let candidate = PathBuf::from("/ws/pkg2/Foo.cls");

        let memory = MemoryReporters::new();
        let strict = checker(Dirs(vec!["pkg"]), ContainmentMode::Segment, &memory);
        assert_eq!(strict.check(Response::Continue(candidate.clone())), Response::Cancel);

        let memory = MemoryReporters::new();
        let prefix = checker(Dirs(vec!["pkg"]), ContainmentMode::Prefix, &memory);
        assert_eq!(
            prefix.check(Response::Continue(candidate.clone())),
            Response::Continue(candidate)
        );
        assert!(memory.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_prefix_mode_honors_declared_trailing_slash() {
        let memory = MemoryReporters::new();
        let checker = checker(Dirs(vec!["force-app/"]), ContainmentMode::Prefix, &memory);

        assert_eq!(
            checker.verify(Path::new("/ws/force-app/main/Foo.cls")),
            Ok(PathBuf::from("/ws/force-app/"))
        );
        assert!(checker.verify(Path::new("/ws/force-app2/Foo.cls")).is_err());
    }

    #[test]
    fn test_verify_reports_matching_dir() {
        let memory = MemoryReporters::new();
        let checker = checker(Dirs(vec!["pkg1", "pkg2"]), ContainmentMode::Segment, &memory);

        assert_eq!(
            checker.verify(Path::new("/ws/pkg2/lwc/cmp")),
            Ok(PathBuf::from("/ws/pkg2"))
        );
        assert_eq!(
            checker.verify(Path::new("/ws/docs")),
            Err(PathCheckError::PathNotInPackage {
                path: PathBuf::from("/ws/docs")
            })
        );
    }

    #[test]
    fn test_missing_workspace_cancels() {
        let memory = MemoryReporters::new();
        let checker = SourcePathChecker::new(
            None,
            Dirs(vec!["pkg1"]),
            ContainmentMode::Segment,
            memory.reporters(Localizer::default()),
        );

        assert_eq!(
            checker.check(Response::Continue(PathBuf::from("/ws/pkg1/Foo.cls"))),
            Response::Cancel
        );
        assert_eq!(memory.telemetry_errors(), vec!["NoWorkspace", NOT_IN_PACKAGE]);
        assert!(matches!(memory.events()[2], ReportEvent::NotificationError(_)));
    }
}
