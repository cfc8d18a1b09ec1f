use anyhow::{Context, Result, bail};
use source_retrieve_core::{project::SfdxProject, utils::normalize};
use std::path::Path;

use crate::utils::build_context;

pub fn package_dirs_command(workspace: Option<&Path>) -> Result<()> {
    let context = build_context(workspace, false)?;

    let Some(workspace) = context.workspace.as_ref().filter(|ws| ws.is_sfdx_project()) else {
        bail!(
            "{}",
            context
                .reporters
                .nls
                .localize("predicates_no_sfdx_project_found_text", &[])
        );
    };

    let project = SfdxProject::load(workspace.root())
        .with_context(|| format!("Failed to read project in {}", workspace.root().display()))?;

    println!("📦 Package directories in {}:", workspace.root().display());
    for dir in &project.package_directories {
        let path = normalize(&workspace.root().join(&dir.path));
        if dir.default {
            println!("   • {} (default)", path.display());
        } else {
            println!("   • {}", path.display());
        }
    }

    Ok(())
}
