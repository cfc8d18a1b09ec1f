//! Retrieve source from the org for a selected file or directory

pub mod checker;
pub mod source_path;

pub use checker::SourcePathChecker;
pub use source_path::{
    RETRIEVE_LOG_NAME, RETRIEVE_SUBCOMMAND, RetrieveContext, SOURCEPATH_FLAG, SourceRetrieveCommand,
    build_retrieve_command,
};
