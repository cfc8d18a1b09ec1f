/// Immutable description of one external CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfdxCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Flag name and value; `None` marks a boolean flag such as `--json`
    pub flags: Vec<(String, Option<String>)>,
    pub description: Option<String>,
    pub log_name: Option<String>,
}

impl SfdxCommand {
    /// Subcommand token, e.g. `force:source:retrieve`
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Value of a flag that takes one
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags
            .iter()
            .find(|(flag, _)| flag == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|(flag, _)| flag == name)
    }

    /// Arguments handed to the program: positional args first, then flag/value pairs
    pub fn to_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        for (flag, value) in &self.flags {
            args.push(flag.clone());
            if let Some(value) = value {
                args.push(value.clone());
            }
        }
        args
    }

    pub fn to_command_string(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in self.to_args() {
            cmd.push(' ');
            if arg.is_empty() || arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(&arg);
            }
        }
        cmd
    }
}

impl std::fmt::Display for SfdxCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{description}"),
            None => write!(f, "{}", self.to_command_string()),
        }
    }
}
