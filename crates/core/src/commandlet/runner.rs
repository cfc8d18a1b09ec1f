//! Commandlet runner with an explicit stage order

use super::traits::{CommandletExecutor, ParametersGatherer, PostconditionChecker, PreconditionChecker};
use super::types::Response;
use crate::{
    command::ExecutionResult,
    error::{Error, Result},
    report::Reporters,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Precondition,
    Gather,
    Postcondition,
    Execute,
}

/// Where the postcondition check sits relative to execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOrder {
    /// The command only runs for input that passed the postcondition
    #[default]
    ValidateThenExecute,
    /// The command runs first; a failed postcondition cancels afterwards
    ExecuteThenValidate,
}

impl StageOrder {
    pub fn stages(self) -> [Stage; 4] {
        match self {
            StageOrder::ValidateThenExecute => [
                Stage::Precondition,
                Stage::Gather,
                Stage::Postcondition,
                Stage::Execute,
            ],
            StageOrder::ExecuteThenValidate => [
                Stage::Precondition,
                Stage::Gather,
                Stage::Execute,
                Stage::Postcondition,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandletOutcome {
    PreconditionFailed,
    Canceled,
    Executed(ExecutionResult),
    /// The command ran but its input failed the postcondition afterwards
    ExecutedThenCanceled(ExecutionResult),
}

impl CommandletOutcome {
    pub fn execution(&self) -> Option<&ExecutionResult> {
        match self {
            CommandletOutcome::Executed(result) | CommandletOutcome::ExecutedThenCanceled(result) => {
                Some(result)
            }
            _ => None,
        }
    }
}

pub struct Commandlet<'a, T> {
    prechecker: Box<dyn PreconditionChecker + 'a>,
    gatherer: Box<dyn ParametersGatherer<T> + 'a>,
    executor: Box<dyn CommandletExecutor<T> + 'a>,
    postchecker: Box<dyn PostconditionChecker<T> + 'a>,
    order: StageOrder,
    reporters: Reporters,
}

impl<'a, T> Commandlet<'a, T> {
    pub fn new(
        prechecker: impl PreconditionChecker + 'a,
        gatherer: impl ParametersGatherer<T> + 'a,
        executor: impl CommandletExecutor<T> + 'a,
        postchecker: impl PostconditionChecker<T> + 'a,
        reporters: Reporters,
    ) -> Self {
        Self {
            prechecker: Box::new(prechecker),
            gatherer: Box::new(gatherer),
            executor: Box::new(executor),
            postchecker: Box::new(postchecker),
            order: StageOrder::default(),
            reporters,
        }
    }

    pub fn with_order(mut self, order: StageOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> StageOrder {
        self.order
    }

    /// Run every stage in `order`, stopping at the first one that declines.
    pub fn run(&self) -> Result<CommandletOutcome> {
        let mut inputs: Option<Response<T>> = None;
        let mut executed: Option<ExecutionResult> = None;

        for stage in self.order.stages() {
            tracing::debug!("Commandlet stage: {:?}", stage);
            match stage {
                Stage::Precondition => {
                    if !self.prechecker.check() {
                        return Ok(CommandletOutcome::PreconditionFailed);
                    }
                }
                Stage::Gather => match self.gatherer.gather()? {
                    Response::Continue(data) => inputs = Some(Response::Continue(data)),
                    Response::Cancel => return Ok(self.canceled(executed)),
                },
                Stage::Postcondition => {
                    let checked = self
                        .postchecker
                        .check(inputs.take().unwrap_or(Response::Cancel));
                    match checked {
                        Response::Continue(data) => inputs = Some(Response::Continue(data)),
                        Response::Cancel => return Ok(self.canceled(executed)),
                    }
                }
                Stage::Execute => {
                    let Some(Response::Continue(data)) = inputs.as_ref() else {
                        return Ok(self.canceled(executed));
                    };
                    executed = Some(self.executor.execute(data)?);
                }
            }
        }

        executed
            .map(CommandletOutcome::Executed)
            .ok_or_else(|| Error::Other("commandlet finished without executing".to_string()))
    }

    fn canceled(&self, executed: Option<ExecutionResult>) -> CommandletOutcome {
        let message = self.reporters.nls.localize(
            "notification_canceled_execution_text",
            &[&self.executor.description()],
        );
        self.reporters.notifications.show_warning(&message);
        tracing::info!("{}", message);

        match executed {
            Some(result) => CommandletOutcome::ExecutedThenCanceled(result),
            None => CommandletOutcome::Canceled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Localizer;
    use crate::report::MemoryReporters;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Pre(Log, bool);
    impl PreconditionChecker for Pre {
        fn check(&self) -> bool {
            self.0.borrow_mut().push("precondition");
            self.1
        }
    }

    struct Gather(Log, Option<&'static str>);
    impl ParametersGatherer<String> for Gather {
        fn gather(&self) -> Result<Response<String>> {
            self.0.borrow_mut().push("gather");
            Ok(match self.1 {
                Some(value) => Response::Continue(value.to_string()),
                None => Response::Cancel,
            })
        }
    }

    struct Exec(Log);
    impl CommandletExecutor<String> for Exec {
        fn execute(&self, _data: &String) -> Result<ExecutionResult> {
            self.0.borrow_mut().push("execute");
            Ok(ExecutionResult {
                exit_code: Some(0),
                duration: Duration::ZERO,
            })
        }

        fn description(&self) -> String {
            "Retrieve".to_string()
        }
    }

    struct Post(Log, bool);
    impl PostconditionChecker<String> for Post {
        fn check(&self, inputs: Response<String>) -> Response<String> {
            self.0.borrow_mut().push("postcondition");
            if self.1 { inputs } else { Response::Cancel }
        }
    }

    fn commandlet<'a>(
        log: &Log,
        memory: &MemoryReporters,
        pre: bool,
        gathered: Option<&'static str>,
        post: bool,
    ) -> Commandlet<'a, String> {
        Commandlet::new(
            Pre(log.clone(), pre),
            Gather(log.clone(), gathered),
            Exec(log.clone()),
            Post(log.clone(), post),
            memory.reporters(Localizer::default()),
        )
    }

    #[test]
    fn test_stage_order_contract() {
        assert_eq!(
            StageOrder::ValidateThenExecute.stages(),
            [Stage::Precondition, Stage::Gather, Stage::Postcondition, Stage::Execute]
        );
        assert_eq!(
            StageOrder::ExecuteThenValidate.stages(),
            [Stage::Precondition, Stage::Gather, Stage::Execute, Stage::Postcondition]
        );
    }

    #[test]
    fn test_validate_then_execute_runs_in_order() {
        let log = Log::default();
        let memory = MemoryReporters::new();

        let outcome = commandlet(&log, &memory, true, Some("x"), true).run().unwrap();

        assert!(matches!(outcome, CommandletOutcome::Executed(_)));
        assert_eq!(*log.borrow(), ["precondition", "gather", "postcondition", "execute"]);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_failed_postcondition_skips_execution() {
        let log = Log::default();
        let memory = MemoryReporters::new();

        let outcome = commandlet(&log, &memory, true, Some("x"), false).run().unwrap();

        assert_eq!(outcome, CommandletOutcome::Canceled);
        assert_eq!(*log.borrow(), ["precondition", "gather", "postcondition"]);
        assert_eq!(memory.warning_notifications(), vec!["Retrieve canceled"]);
    }

    #[test]
    fn test_execute_then_validate_runs_command_first() {
        let log = Log::default();
        let memory = MemoryReporters::new();

        let outcome = commandlet(&log, &memory, true, Some("x"), false)
            .with_order(StageOrder::ExecuteThenValidate)
            .run()
            .unwrap();

        assert!(matches!(outcome, CommandletOutcome::ExecutedThenCanceled(_)));
        assert!(outcome.execution().is_some());
        assert_eq!(*log.borrow(), ["precondition", "gather", "execute", "postcondition"]);
    }

    #[test]
    fn test_precondition_failure_stops_everything() {
        let log = Log::default();
        let memory = MemoryReporters::new();

        let outcome = commandlet(&log, &memory, false, Some("x"), true).run().unwrap();

        assert_eq!(outcome, CommandletOutcome::PreconditionFailed);
        assert_eq!(*log.borrow(), ["precondition"]);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_gather_cancel_skips_remaining_stages() {
        let log = Log::default();
        let memory = MemoryReporters::new();

        let outcome = commandlet(&log, &memory, true, None, true).run().unwrap();

        assert_eq!(outcome, CommandletOutcome::Canceled);
        assert_eq!(*log.borrow(), ["precondition", "gather"]);
        assert_eq!(memory.warning_notifications().len(), 1);
    }
}
