//! Integration test: one logger fanning out to console and backend.

use prettylog::destination::{BackendLog, BackendTransport, ConsoleLog, LogDestination};
use prettylog::model::{DestinationError, LogCategory, LogLevel, StatementAssembler};
use prettylog::{LevelRange, Logger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingTransport(Arc<Mutex<Vec<serde_json::Value>>>);

impl BackendTransport for RecordingTransport {
    fn send(&self, _endpoint: &str, body: &str) -> Result<(), DestinationError> {
        let value = serde_json::from_str(body)?;
        self.0.lock().unwrap().push(value);
        Ok(())
    }
}

fn console_and_backend() -> (Logger, SharedBuffer, RecordingTransport) {
    let console_output = SharedBuffer::default();
    let transport = RecordingTransport::default();
    let destinations: Vec<Box<dyn LogDestination>> = vec![
        Box::new(ConsoleLog::with_writer(console_output.clone())),
        Box::new(BackendLog::new("https://logs.test").with_transport(transport.clone())),
    ];
    (Logger::new(destinations), console_output, transport)
}

#[test]
fn debug_statement_only_reaches_console() {
    // GIVEN a console accepting everything and a backend from info up
    let (logger, console, backend) = console_and_backend();

    // WHEN a debug statement is logged
    let summary = logger.debug("Cache warmed", &LogCategory::Storage);

    // THEN only the console prints it
    assert_eq!(summary.emitted, 1);
    assert_eq!(summary.filtered, 1);
    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("Storage 🟤 Cache warmed"));
    assert!(backend.0.lock().unwrap().is_empty());
}

#[test]
fn sensitive_content_only_reaches_console() {
    let (logger, console, backend) = console_and_backend();

    logger.warning(
        StatementAssembler::new([Some("Login failed")], [Some("user=alice")], " - "),
        &LogCategory::User,
    );

    let lines = console.lines();
    assert!(lines[0].ends_with("User Action 🟡 Login failed - user=alice"));

    let sent = backend.0.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["message"], "Login failed");
    assert_eq!(sent[0]["level"], "🟡 warning");
    assert_eq!(sent[0]["category"], "User Action");
}

#[test]
fn sensitive_only_statement_skips_backend() {
    let (logger, console, backend) = console_and_backend();

    let summary = logger.error(StatementAssembler::sensitive([Some("card=4242")]), &LogCategory::Service);

    assert_eq!(summary.emitted, 1);
    assert_eq!(summary.empty, 1);
    assert!(console.lines()[0].ends_with("🔴 card=4242"));
    assert!(backend.0.lock().unwrap().is_empty());
}

#[test]
fn key_events_reach_every_open_ended_destination() {
    let (logger, console, backend) = console_and_backend();

    logger.key_event("Purchase completed", &LogCategory::custom("Sales"));

    assert!(console.lines()[0].ends_with("Sales 📊 Purchase completed"));
    assert_eq!(backend.0.lock().unwrap()[0]["category"], "Sales");
}

#[test]
fn custom_level_below_info_is_console_only() {
    let (logger, console, backend) = console_and_backend();
    let todo = LogLevel::custom("🟣", 200);

    logger.log(&todo, "Not implemented yet", &LogCategory::custom("To Do"));

    assert!(console.lines()[0].ends_with("To Do 🟣 Not implemented yet"));
    assert!(backend.0.lock().unwrap().is_empty());
}

#[test]
fn backend_with_allow_none_receives_nothing() {
    let transport = RecordingTransport::default();
    let destinations: Vec<Box<dyn LogDestination>> = vec![Box::new(
        BackendLog::new("https://logs.test")
            .with_level_range(LevelRange::allow_none())
            .with_transport(transport.clone()),
    )];
    let logger = Logger::new(destinations);

    for level in LogLevel::PREDEFINED {
        logger.log(&level, "anything", &LogCategory::General);
    }

    assert!(transport.0.lock().unwrap().is_empty());
}
