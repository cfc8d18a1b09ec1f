//! Fluent builder for `SfdxCommand`

use super::sfdx_command::SfdxCommand;

pub const SFDX_PROGRAM: &str = "sfdx";

#[derive(Debug, Clone)]
pub struct SfdxCommandBuilder {
    program: String,
    args: Vec<String>,
    flags: Vec<(String, Option<String>)>,
    description: Option<String>,
    log_name: Option<String>,
}

impl Default for SfdxCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SfdxCommandBuilder {
    pub fn new() -> Self {
        Self::with_program(SFDX_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            flags: Vec::new(),
            description: None,
            log_name: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.push((name.into(), Some(value.into())));
        self
    }

    /// A flag that takes no value
    pub fn with_boolean_flag(mut self, name: impl Into<String>) -> Self {
        self.flags.push((name.into(), None));
        self
    }

    /// Ask the CLI for JSON output
    pub fn with_json(self) -> Self {
        self.with_boolean_flag("--json")
    }

    pub fn with_log_name(mut self, log_name: impl Into<String>) -> Self {
        self.log_name = Some(log_name.into());
        self
    }

    pub fn build(self) -> SfdxCommand {
        SfdxCommand {
            program: self.program,
            args: self.args,
            flags: self.flags,
            description: self.description,
            log_name: self.log_name,
        }
    }
}
