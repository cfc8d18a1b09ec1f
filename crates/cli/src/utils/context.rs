use anyhow::{Context, Result};
use source_retrieve_core::{
    Config, Localizer, Reporters, RetrieveContext, Workspace,
    report::{ConsoleOutputChannel, TerminalNotifier, TracingTelemetry},
};
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Resolve workspace and config, and wire the terminal sinks.
pub fn build_context(workspace_arg: Option<&Path>, quiet: bool) -> Result<RetrieveContext> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let workspace = Workspace::resolve(workspace_arg, &cwd);
    debug!("Resolved workspace: {:?}", workspace);

    let config_start = workspace
        .as_ref()
        .map(|ws| ws.root().to_path_buf())
        .unwrap_or_else(|| cwd.clone());
    let config = Config::discover(&config_start).context("Failed to load source-retrieve config")?;

    let mut channel = ConsoleOutputChannel::stdout(!quiet);
    if let Some(log) = config.output_log_path(&config_start) {
        channel = channel
            .with_log_file(&log)
            .with_context(|| format!("Failed to open output log {}", log.display()))?;
    }

    let reporters = Reporters::new(
        Arc::new(TracingTelemetry),
        Arc::new(TerminalNotifier),
        Arc::new(channel),
        Localizer::new(config.resolved_locale()),
    );

    Ok(RetrieveContext::new(cwd, workspace, config, reporters))
}
