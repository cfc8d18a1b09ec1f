//! English message catalog

pub const MESSAGES: &[(&str, &str)] = &[
    ("force_source_retrieve_text", "SFDX: Retrieve Source from Org"),
    (
        "error_source_path_not_in_package_directory_text",
        "You can retrieve source only for a file or directory that is inside a package directory listed in sfdx-project.json.",
    ),
    (
        "predicates_no_sfdx_project_found_text",
        "No SFDX project found. Run this command from a directory that contains sfdx-project.json, or pass --workspace.",
    ),
    ("channel_starting_message", "Starting {0}"),
    ("channel_end_with_exit_code", "{0} ended with exit code {1}"),
    ("channel_end_with_error", "{0} ended with error {1}"),
    ("notification_successful_execution_text", "{0} successfully ran"),
    ("notification_unsuccessful_execution_text", "{0} failed to run"),
    ("notification_canceled_execution_text", "{0} canceled"),
];
