//! Telemetry, notification and output channel sinks

pub mod console;
pub mod memory;
pub mod traits;

pub use console::{ConsoleOutputChannel, TerminalNotifier, TracingTelemetry};
pub use memory::{MemoryReporters, ReportEvent};
pub use traits::{Notifier, OutputChannel, TelemetryReporter};

use crate::messages::Localizer;
use std::sync::Arc;

/// The sinks a command reports through, plus the message catalog
#[derive(Clone)]
pub struct Reporters {
    pub telemetry: Arc<dyn TelemetryReporter>,
    pub notifications: Arc<dyn Notifier>,
    pub channel: Arc<dyn OutputChannel>,
    pub nls: Localizer,
}

impl Reporters {
    pub fn new(
        telemetry: Arc<dyn TelemetryReporter>,
        notifications: Arc<dyn Notifier>,
        channel: Arc<dyn OutputChannel>,
        nls: Localizer,
    ) -> Self {
        Self {
            telemetry,
            notifications,
            channel,
            nls,
        }
    }

    /// Report an error to every sink and bring the channel into view.
    pub fn report_error(&self, message: &str) {
        self.telemetry.send_error(message);
        self.notifications.show_error(message);
        self.channel.append_line(message);
        self.channel.show();
    }
}
