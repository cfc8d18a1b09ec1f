//! Recording sinks for embedding and tests

use super::traits::{Notifier, OutputChannel, TelemetryReporter};
use super::Reporters;
use crate::messages::Localizer;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    TelemetryError(String),
    TelemetryCommand(String),
    NotificationError(String),
    NotificationWarning(String),
    NotificationInfo(String),
    ChannelLine(String),
    ChannelShow,
}

/// Records every event in arrival order
#[derive(Debug, Default, Clone)]
pub struct MemoryReporters {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl MemoryReporters {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `Reporters` bundle whose sinks all record into this instance
    pub fn reporters(&self, nls: Localizer) -> Reporters {
        let sink = Arc::new(self.clone());
        Reporters::new(sink.clone(), sink.clone(), sink, nls)
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn telemetry_errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::TelemetryError(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn error_notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::NotificationError(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn warning_notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::NotificationWarning(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn info_notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::NotificationInfo(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn channel_lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::ChannelLine(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn channel_shows(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ReportEvent::ChannelShow))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }

    fn push(&self, event: ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

impl TelemetryReporter for MemoryReporters {
    fn send_error(&self, message: &str) {
        self.push(ReportEvent::TelemetryError(message.to_string()));
    }

    fn send_command_event(&self, log_name: &str, _duration: Duration) {
        self.push(ReportEvent::TelemetryCommand(log_name.to_string()));
    }
}

impl Notifier for MemoryReporters {
    fn show_error(&self, message: &str) {
        self.push(ReportEvent::NotificationError(message.to_string()));
    }

    fn show_warning(&self, message: &str) {
        self.push(ReportEvent::NotificationWarning(message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.push(ReportEvent::NotificationInfo(message.to_string()));
    }
}

impl OutputChannel for MemoryReporters {
    fn append_line(&self, line: &str) {
        self.push(ReportEvent::ChannelLine(line.to_string()));
    }

    fn show(&self) {
        self.push(ReportEvent::ChannelShow);
    }
}
