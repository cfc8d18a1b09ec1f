//! Four-stage command pipeline: precondition, gather, execute, postcondition

pub mod executor;
pub mod gatherers;
pub mod runner;
pub mod traits;
pub mod types;

pub use executor::{CommandSource, SfdxCommandletExecutor};
pub use gatherers::{FilePathGatherer, WorkspaceChecker};
pub use runner::{Commandlet, CommandletOutcome, Stage, StageOrder};
pub use traits::{CommandletExecutor, ParametersGatherer, PostconditionChecker, PreconditionChecker};
pub use types::Response;
