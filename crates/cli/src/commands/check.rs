use anyhow::Result;
use source_retrieve_core::commandlet::{ParametersGatherer, PreconditionChecker};
use std::path::Path;

use crate::utils::build_context;

pub fn check_command(path: &Path, workspace: Option<&Path>) -> Result<()> {
    let context = build_context(workspace, false)?;

    if !context.workspace_checker().check() {
        std::process::exit(1);
    }

    let Some(source_path) = context.gatherer(path).gather()?.into_data() else {
        std::process::exit(1);
    };

    let checker = context.source_path_checker();
    match checker.verify(&source_path) {
        Ok(dir) => {
            println!("✅ {}", source_path.display());
            println!("   📦 Package directory: {}", dir.display());
            Ok(())
        }
        Err(e) => {
            checker.report(&e);
            std::process::exit(1);
        }
    }
}
