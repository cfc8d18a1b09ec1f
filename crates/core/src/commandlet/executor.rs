//! Executor that builds an `SfdxCommand` from the gathered input and runs it

use super::traits::CommandletExecutor;
use crate::{
    command::{CliCommandExecutor, ExecutionOptions, ExecutionResult, SfdxCommand},
    error::Result,
    report::Reporters,
};

/// Turns gathered input into a concrete command
pub trait CommandSource<T> {
    fn build(&self, data: &T) -> SfdxCommand;

    fn description(&self) -> String;
}

pub struct SfdxCommandletExecutor<B> {
    source: B,
    options: ExecutionOptions,
    reporters: Reporters,
}

impl<B> SfdxCommandletExecutor<B> {
    pub fn new(source: B, options: ExecutionOptions, reporters: Reporters) -> Self {
        Self {
            source,
            options,
            reporters,
        }
    }
}

impl<T, B: CommandSource<T>> CommandletExecutor<T> for SfdxCommandletExecutor<B> {
    fn execute(&self, data: &T) -> Result<ExecutionResult> {
        let command = self.source.build(data);
        let description = command.to_string();
        let executor = CliCommandExecutor::new(&command, self.options.clone());

        let result = match executor.execute(self.reporters.channel.as_ref(), &self.reporters.nls) {
            Ok(result) => result,
            Err(e) => {
                let message = self
                    .reporters
                    .nls
                    .localize("notification_unsuccessful_execution_text", &[&description]);
                self.reporters.notifications.show_error(&message);
                self.reporters.telemetry.send_error(e.name());
                return Err(e);
            }
        };

        let log_name = command.log_name.as_deref().unwrap_or("sfdx_command");
        self.reporters
            .telemetry
            .send_command_event(log_name, result.duration);

        if result.success() {
            let message = self
                .reporters
                .nls
                .localize("notification_successful_execution_text", &[&description]);
            self.reporters.notifications.show_info(&message);
        } else {
            let message = self
                .reporters
                .nls
                .localize("notification_unsuccessful_execution_text", &[&description]);
            self.reporters.notifications.show_error(&message);
            self.reporters.channel.show();
        }

        Ok(result)
    }

    fn description(&self) -> String {
        self.source.description()
    }
}
