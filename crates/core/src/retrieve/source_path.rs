use super::checker::SourcePathChecker;
use crate::{
    command::{ExecutionOptions, SfdxCommand, SfdxCommandBuilder},
    commandlet::{
        CommandSource, Commandlet, CommandletOutcome, FilePathGatherer, SfdxCommandletExecutor,
        WorkspaceChecker,
    },
    config::Config,
    error::Result,
    messages::Localizer,
    project::{SfdxProjectJsonParser, Workspace},
    report::Reporters,
};
use std::path::{Path, PathBuf};

pub const RETRIEVE_SUBCOMMAND: &str = "force:source:retrieve";
pub const SOURCEPATH_FLAG: &str = "--sourcepath";
pub const RETRIEVE_LOG_NAME: &str = "force_source_retrieve_with_sourcepath";

/// `sfdx force:source:retrieve --sourcepath <path>`, with the path passed through verbatim
pub fn build_retrieve_command(nls: &Localizer, source_path: &Path) -> SfdxCommand {
    SfdxCommandBuilder::new()
        .with_description(nls.localize("force_source_retrieve_text", &[]))
        .with_arg(RETRIEVE_SUBCOMMAND)
        .with_flag(SOURCEPATH_FLAG, source_path.to_string_lossy())
        .with_log_name(RETRIEVE_LOG_NAME)
        .build()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRetrieveCommand {
    nls: Localizer,
}

impl SourceRetrieveCommand {
    pub fn new(nls: Localizer) -> Self {
        Self { nls }
    }
}

impl CommandSource<PathBuf> for SourceRetrieveCommand {
    fn build(&self, data: &PathBuf) -> SfdxCommand {
        build_retrieve_command(&self.nls, data)
    }

    fn description(&self) -> String {
        self.nls.localize("force_source_retrieve_text", &[])
    }
}

/// Everything one retrieve invocation needs besides the selected path
#[derive(Clone)]
pub struct RetrieveContext {
    pub cwd: PathBuf,
    pub workspace: Option<Workspace>,
    pub config: Config,
    pub reporters: Reporters,
}

impl RetrieveContext {
    pub fn new(cwd: impl Into<PathBuf>, workspace: Option<Workspace>, config: Config, reporters: Reporters) -> Self {
        Self {
            cwd: cwd.into(),
            workspace,
            config,
            reporters,
        }
    }

    pub fn workspace_checker(&self) -> WorkspaceChecker {
        WorkspaceChecker::new(self.workspace.clone(), self.reporters.clone())
    }

    pub fn gatherer(&self, explorer_path: &Path) -> FilePathGatherer {
        FilePathGatherer::new(explorer_path, &self.cwd)
    }

    pub fn source_path_checker(&self) -> SourcePathChecker {
        SourcePathChecker::new(
            self.workspace.clone(),
            SfdxProjectJsonParser::new(),
            self.config.path_matching,
            self.reporters.clone(),
        )
    }

    pub fn execution_options(&self) -> ExecutionOptions {
        let mut options = ExecutionOptions::default().with_program(self.config.cli_program());
        if let Some(ref workspace) = self.workspace {
            options = options.with_cwd(workspace.root());
        }
        for (key, value) in &self.config.env {
            options = options.with_env(key.clone(), value.clone());
        }
        options
    }

    pub fn executor(&self) -> SfdxCommandletExecutor<SourceRetrieveCommand> {
        SfdxCommandletExecutor::new(
            SourceRetrieveCommand::new(self.reporters.nls),
            self.execution_options(),
            self.reporters.clone(),
        )
    }

    pub fn commandlet(&self, explorer_path: &Path) -> Commandlet<'static, PathBuf> {
        Commandlet::new(
            self.workspace_checker(),
            self.gatherer(explorer_path),
            self.executor(),
            self.source_path_checker(),
            self.reporters.clone(),
        )
        .with_order(self.config.stage_order)
    }

    /// Workspace check, gather, package directory check, then retrieve.
    pub fn retrieve_source_path(&self, explorer_path: &Path) -> Result<CommandletOutcome> {
        tracing::debug!("Retrieving source for: {:?}", explorer_path);
        self.commandlet(explorer_path).run()
    }
}
