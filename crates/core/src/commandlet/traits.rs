//! Stage traits for the commandlet pipeline

use super::types::Response;
use crate::command::ExecutionResult;
use crate::error::Result;

/// Decides whether the command may start at all
pub trait PreconditionChecker {
    fn check(&self) -> bool;
}

/// Produces the command's input
pub trait ParametersGatherer<T> {
    fn gather(&self) -> Result<Response<T>>;
}

/// Validates gathered input; may cancel the run
pub trait PostconditionChecker<T> {
    fn check(&self, inputs: Response<T>) -> Response<T>;
}

pub trait CommandletExecutor<T> {
    fn execute(&self, data: &T) -> Result<ExecutionResult>;

    /// Human-readable name used in notifications
    fn description(&self) -> String;
}
