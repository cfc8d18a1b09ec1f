//! Terminal-facing sinks

use super::traits::{Notifier, OutputChannel, TelemetryReporter};
use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Telemetry as structured `tracing` events under the `telemetry` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl TelemetryReporter for TracingTelemetry {
    fn send_error(&self, message: &str) {
        tracing::error!(target: "telemetry", error = message, "error event");
    }

    fn send_command_event(&self, log_name: &str, duration: Duration) {
        tracing::info!(
            target: "telemetry",
            command = log_name,
            duration_ms = duration.as_millis() as u64,
            "command event"
        );
    }
}

/// Notifications on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show_error(&self, message: &str) {
        eprintln!("❌ {message}");
    }

    fn show_warning(&self, message: &str) {
        eprintln!("⚠️  {message}");
    }

    fn show_info(&self, message: &str) {
        eprintln!("✅ {message}");
    }
}

struct ChannelState {
    visible: bool,
    pending: Vec<String>,
    writer: Box<dyn Write + Send>,
    log: Option<File>,
}

/// Output channel backed by a writer and an optional persistent log.
///
/// While hidden, lines still reach the log but are held back from the
/// writer until `show` is called.
pub struct ConsoleOutputChannel {
    state: Mutex<ChannelState>,
}

impl ConsoleOutputChannel {
    pub fn stdout(visible: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), visible)
    }

    pub fn with_writer(writer: Box<dyn Write + Send>, visible: bool) -> Self {
        Self {
            state: Mutex::new(ChannelState {
                visible,
                pending: Vec::new(),
                writer,
                log: None,
            }),
        }
    }

    /// Also append every line to `path`, creating parent directories as needed.
    pub fn with_log_file(self, path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.log = Some(file);
        }
        Ok(self)
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).visible
    }
}

impl OutputChannel for ConsoleOutputChannel {
    fn append_line(&self, line: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(log) = state.log.as_mut() {
            if let Err(e) = writeln!(log, "{line}") {
                tracing::warn!("Failed to write output log: {}", e);
            }
        }

        if state.visible {
            let _ = writeln!(state.writer, "{line}");
        } else {
            state.pending.push(line.to_string());
        }
    }

    fn show(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.visible {
            return;
        }
        state.visible = true;

        let pending = std::mem::take(&mut state.pending);
        for line in pending {
            let _ = writeln!(state.writer, "{line}");
        }
        let _ = state.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_hidden_channel_flushes_on_show() {
        let buffer = SharedBuffer::default();
        let channel = ConsoleOutputChannel::with_writer(Box::new(buffer.clone()), false);

        channel.append_line("first");
        channel.append_line("second");
        assert_eq!(buffer.contents(), "");
        assert!(!channel.is_visible());

        channel.show();
        assert_eq!(buffer.contents(), "first\nsecond\n");

        channel.append_line("third");
        assert_eq!(buffer.contents(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_log_file_receives_every_line() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("logs/retrieve.log");
        let channel = ConsoleOutputChannel::with_writer(Box::new(io::sink()), false)
            .with_log_file(&log)
            .unwrap();

        channel.append_line("Starting sfdx force:source:retrieve");
        channel.append_line("done");

        let contents = std::fs::read_to_string(&log).unwrap();
        assert_eq!(contents, "Starting sfdx force:source:retrieve\ndone\n");
    }
}
