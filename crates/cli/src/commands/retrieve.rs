use anyhow::Result;
use source_retrieve_core::{
    CommandletOutcome, RetrieveContext,
    command::CliCommandExecutor,
    commandlet::{ParametersGatherer, PostconditionChecker, PreconditionChecker},
    retrieve::build_retrieve_command,
};
use std::path::Path;
use tracing::{debug, info};

use crate::display::print_command_breakdown;
use crate::utils::build_context;

pub fn retrieve_command(path: &Path, workspace: Option<&Path>, dry_run: bool, quiet: bool) -> Result<()> {
    debug!("Retrieving: {} (dry_run={})", path.display(), dry_run);

    let context = build_context(workspace, quiet)?;

    if dry_run {
        return print_dry_run(&context, path);
    }

    match context.retrieve_source_path(path)? {
        CommandletOutcome::Executed(result) => {
            info!("Retrieve finished in {:?}", result.duration);
            if !result.success() {
                std::process::exit(result.exit_code.unwrap_or(1));
            }
            Ok(())
        }
        CommandletOutcome::ExecutedThenCanceled(result) => {
            debug!("Retrieve ran but was canceled afterwards: {:?}", result);
            std::process::exit(1);
        }
        CommandletOutcome::PreconditionFailed | CommandletOutcome::Canceled => std::process::exit(1),
    }
}

/// Run the checks and show what would be executed
fn print_dry_run(context: &RetrieveContext, path: &Path) -> Result<()> {
    if !context.workspace_checker().check() {
        std::process::exit(1);
    }

    let gathered = context.gatherer(path).gather()?;
    let Some(source_path) = context.source_path_checker().check(gathered).into_data() else {
        std::process::exit(1);
    };

    let command = build_retrieve_command(&context.reporters.nls, &source_path);
    let executor = CliCommandExecutor::new(&command, context.execution_options());

    println!("{}", executor.command().to_command_string());
    print_command_breakdown(executor.command());

    let options = context.execution_options();
    if let Some(ref dir) = options.cwd {
        println!("Working directory: {}", dir.display());
    }
    if !options.env.is_empty() {
        println!("Environment variables:");
        for (key, value) in &options.env {
            println!("  {}={}", key, value);
        }
    }

    Ok(())
}
