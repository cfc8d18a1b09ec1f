//! Integration test for workspace discovery and config-driven checking

use source_retrieve_core::{
    Config, ContainmentMode, Localizer, RetrieveContext, Workspace, report::MemoryReporters,
};
use source_retrieve_tests::write_sfdx_project;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_project_root_controls_matching() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sfdx_project(root, &[("pkg", true)]).unwrap();
    fs::create_dir_all(root.join("pkg2/classes")).unwrap();

    let nested = root.join("pkg2/classes");
    let workspace = Workspace::resolve_with(None, None, &nested).unwrap();
    assert_eq!(workspace.root(), root);

    // No config yet: segment matching rejects the sibling directory
    let config = Config::discover(workspace.root()).unwrap();
    assert_eq!(config.path_matching, ContainmentMode::Segment);
    let memory = MemoryReporters::new();
    let context = RetrieveContext::new(
        &nested,
        Some(workspace.clone()),
        config,
        memory.reporters(Localizer::default()),
    );
    assert!(context.source_path_checker().verify(&nested).is_err());

    fs::write(
        root.join(".source-retrieve.json"),
        serde_json::to_string_pretty(&serde_json::json!({ "path_matching": "prefix" })).unwrap(),
    )
    .unwrap();

    let config = Config::discover(workspace.root()).unwrap();
    assert_eq!(config.path_matching, ContainmentMode::Prefix);
    let context = RetrieveContext::new(
        &nested,
        Some(workspace),
        config,
        memory.reporters(Localizer::default()),
    );
    assert_eq!(
        context.source_path_checker().verify(&nested).unwrap(),
        root.join("pkg")
    );
}

#[test]
fn test_package_directories_reread_between_checks() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sfdx_project(root, &[("force-app", true)]).unwrap();
    fs::create_dir_all(root.join("extra")).unwrap();

    let memory = MemoryReporters::new();
    let context = RetrieveContext::new(
        root,
        Some(Workspace::new(root)),
        Config::default(),
        memory.reporters(Localizer::default()),
    );
    let checker = context.source_path_checker();
    assert!(checker.verify(&root.join("extra")).is_err());

    write_sfdx_project(root, &[("force-app", true), ("extra", false)]).unwrap();
    assert_eq!(checker.verify(&root.join("extra")).unwrap(), root.join("extra"));
}
