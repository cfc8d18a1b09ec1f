//! Sink traits

use std::time::Duration;

pub trait TelemetryReporter: Send + Sync {
    fn send_error(&self, message: &str);

    /// Record one completed command run
    fn send_command_event(&self, log_name: &str, duration: Duration);
}

pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);

    fn show_warning(&self, message: &str);

    fn show_info(&self, message: &str);
}

pub trait OutputChannel: Send + Sync {
    fn append_line(&self, line: &str);

    /// Force the channel into view
    fn show(&self);
}
