//! Shared fixtures for the workspace integration tests

use std::io;
use std::path::Path;

/// Write an `sfdx-project.json` declaring `package_dirs` as `(path, default)` pairs
/// and create each directory.
pub fn write_sfdx_project(root: &Path, package_dirs: &[(&str, bool)]) -> io::Result<()> {
    let dirs: Vec<serde_json::Value> = package_dirs
        .iter()
        .map(|(path, default)| {
            if *default {
                serde_json::json!({ "path": path, "default": true })
            } else {
                serde_json::json!({ "path": path })
            }
        })
        .collect();

    let project = serde_json::json!({
        "packageDirectories": dirs,
        "namespace": "",
        "sfdcLoginUrl": "https://login.salesforce.com",
        "sourceApiVersion": "44.0"
    });
    std::fs::write(
        root.join("sfdx-project.json"),
        serde_json::to_string_pretty(&project)?,
    )?;

    for (path, _) in package_dirs {
        std::fs::create_dir_all(root.join(path))?;
    }
    Ok(())
}
