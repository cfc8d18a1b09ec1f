//! Japanese message catalog

pub const MESSAGES: &[(&str, &str)] = &[
    ("force_source_retrieve_text", "SFDX: 組織からソースを取得"),
    (
        "error_source_path_not_in_package_directory_text",
        "ソースを取得できるのは、sfdx-project.json に記載されたパッケージディレクトリ内のファイルまたはディレクトリのみです。",
    ),
    (
        "predicates_no_sfdx_project_found_text",
        "SFDX プロジェクトが見つかりません。sfdx-project.json を含むディレクトリで実行するか、--workspace を指定してください。",
    ),
    ("channel_starting_message", "{0} を開始しています"),
    ("channel_end_with_exit_code", "{0} が終了コード {1} で終了しました"),
    ("channel_end_with_error", "{0} がエラー {1} で終了しました"),
    ("notification_successful_execution_text", "{0} が正常に実行されました"),
    ("notification_unsuccessful_execution_text", "{0} の実行に失敗しました"),
    ("notification_canceled_execution_text", "{0} はキャンセルされました"),
];
