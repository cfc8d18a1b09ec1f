//! SFDX command construction and execution

pub mod builder;
pub mod execution;
pub mod sfdx_command;

// Re-export commonly used types
pub use builder::SfdxCommandBuilder;
pub use execution::{CliCommandExecutor, ExecutionOptions, ExecutionResult};
pub use sfdx_command::SfdxCommand;
