//! Backend destination: structured JSON statements for a log server.
//!
//! The payload is built here; delivery is delegated to a [`BackendTransport`]
//! so the network client stays outside the crate.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::LogDestination;
use crate::model::{DestinationError, LevelRange, LogCategory, LogLevel};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/logs";

/// JSON body sent for every statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendLogEntry {
    /// When the statement was created, RFC 3339 in UTC.
    pub timestamp: DateTime<Utc>,
    /// Glyph and level name, e.g. `"🟢 info"`.
    pub level: String,
    /// Category display name, empty when uncategorized.
    pub category: String,
    /// Rendered statement; sensitive fragments only when allowed.
    pub message: String,
    /// Host details, currently just `platform`.
    pub device_info: BTreeMap<String, String>,
}

/// Delivers an encoded payload to an endpoint.
pub trait BackendTransport: Send + Sync {
    /// Deliver one JSON `body` to `endpoint`.
    fn send(&self, endpoint: &str, body: &str) -> Result<(), DestinationError>;
}

/// Transport that only prints what would be sent.
pub struct EchoTransport {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl EchoTransport {
    /// Echo to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Echo to `writer`.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for EchoTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendTransport for EchoTransport {
    fn send(&self, endpoint: &str, body: &str) -> Result<(), DestinationError> {
        let mut writer = self.writer.lock().map_err(|_| DestinationError::Poisoned)?;
        writeln!(writer, "📡 [Backend Log] Would send to {endpoint}:")?;
        writeln!(writer, "   {body}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Sends non-sensitive statements of level info and above to a server.
pub struct BackendLog {
    endpoint: String,
    level_range: LevelRange,
    allows_sensitive_content: bool,
    transport: Box<dyn BackendTransport>,
}

impl BackendLog {
    /// Backend for `endpoint`, echoing payloads to stdout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            level_range: LevelRange::allow_from(LogLevel::Info),
            allows_sensitive_content: false,
            transport: Box::new(EchoTransport::new()),
        }
    }

    /// Replace the stdout echo with another transport.
    pub fn with_transport(mut self, transport: impl BackendTransport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Restrict the recorded levels. Defaults to info and above.
    pub fn with_level_range(mut self, level_range: LevelRange) -> Self {
        self.level_range = level_range;
        self
    }

    /// Allow or withhold sensitive fragments. Withheld by default.
    pub fn with_sensitive_content(mut self, allowed: bool) -> Self {
        self.allows_sensitive_content = allowed;
        self
    }

    /// URL payloads are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Payload for one statement at `timestamp`.
    pub fn entry(
        &self,
        timestamp: DateTime<Utc>,
        level: &LogLevel,
        message: &str,
        category: &LogCategory,
    ) -> BackendLogEntry {
        BackendLogEntry {
            timestamp,
            level: level.to_string(),
            category: category.name().to_string(),
            message: message.to_string(),
            device_info: device_info(),
        }
    }
}

impl Default for BackendLog {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl std::fmt::Debug for BackendLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendLog")
            .field("endpoint", &self.endpoint)
            .field("level_range", &self.level_range)
            .field("allows_sensitive_content", &self.allows_sensitive_content)
            .finish_non_exhaustive()
    }
}

impl LogDestination for BackendLog {
    fn name(&self) -> &str {
        "backend"
    }

    fn create_log(
        &self,
        level: &LogLevel,
        message: &str,
        category: &LogCategory,
    ) -> Result<(), DestinationError> {
        let entry = self.entry(Utc::now(), level, message, category);
        let body = serde_json::to_string(&entry)?;
        self.transport.send(&self.endpoint, &body)
    }

    fn level_range(&self) -> LevelRange {
        self.level_range.clone()
    }

    fn allows_sensitive_content(&self) -> bool {
        self.allows_sensitive_content
    }
}

fn device_info() -> BTreeMap<String, String> {
    let platform = match std::env::consts::OS {
        "" => "unknown",
        os => os,
    };
    BTreeMap::from([("platform".to_string(), platform.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    /// Records every payload instead of sending it.
    #[derive(Clone, Default)]
    struct RecordingTransport(Arc<Mutex<Vec<(String, String)>>>);

    impl BackendTransport for RecordingTransport {
        fn send(&self, endpoint: &str, body: &str) -> Result<(), DestinationError> {
            self.0
                .lock()
                .unwrap()
                .push((endpoint.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct RefusingTransport;

    impl BackendTransport for RefusingTransport {
        fn send(&self, endpoint: &str, _body: &str) -> Result<(), DestinationError> {
            Err(DestinationError::Transport {
                endpoint: endpoint.to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    #[test]
    fn defaults_filter_low_levels_and_sensitive_content() {
        let backend = BackendLog::default();
        assert_eq!(backend.endpoint(), DEFAULT_ENDPOINT);
        assert!(!backend.allows_sensitive_content());
        assert!(!backend.accepts(&LogLevel::Debug));
        assert!(!backend.accepts(&LogLevel::Verbose));
        assert!(backend.accepts(&LogLevel::Info));
        assert!(backend.accepts(&LogLevel::KeyEvent));
    }

    #[test]
    fn entry_serializes_with_snake_case_keys() {
        let backend = BackendLog::new("https://logs.test");
        let timestamp = Utc.with_ymd_and_hms(2024, 7, 25, 8, 0, 0).unwrap();
        let entry = backend.entry(timestamp, &LogLevel::Warning, "Low memory", &LogCategory::AppState);

        let json = serde_json::to_value(&entry).expect("entry should serialize");
        assert_eq!(json["timestamp"], "2024-07-25T08:00:00Z");
        assert_eq!(json["level"], "🟡 warning");
        assert_eq!(json["category"], "App State");
        assert_eq!(json["message"], "Low memory");
        assert_eq!(json["device_info"]["platform"], std::env::consts::OS);
    }

    #[test]
    fn create_log_hands_payload_to_transport() {
        // GIVEN a backend with a recording transport
        let transport = RecordingTransport::default();
        let backend = BackendLog::new("https://logs.test").with_transport(transport.clone());

        // WHEN a statement is recorded
        backend
            .create_log(&LogLevel::Info, "User signed in", &LogCategory::User)
            .expect("recording transport never fails");

        // THEN one JSON body reaches the configured endpoint
        let sent = transport.0.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://logs.test");
        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body["message"], "User signed in");
        assert_eq!(body["category"], "User Action");
    }

    #[test]
    fn transport_failure_is_returned() {
        let backend = BackendLog::new("https://down.test").with_transport(RefusingTransport);
        let err = backend
            .create_log(&LogLevel::Error, "boom", &LogCategory::General)
            .unwrap_err();
        assert!(matches!(err, DestinationError::Transport { .. }));
    }

    #[test]
    fn echo_transport_prints_endpoint_and_body() {
        #[derive(Clone, Default)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);
        impl Write for Buffer {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer::default();
        let transport = EchoTransport::with_writer(buffer.clone());
        transport.send("https://logs.test", "{}").unwrap();

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "📡 [Backend Log] Would send to https://logs.test:\n   {}\n"
        );
    }

    #[test]
    fn builder_overrides_policy() {
        let backend = BackendLog::default()
            .with_level_range(LevelRange::allow_all())
            .with_sensitive_content(true);
        assert!(backend.allows_sensitive_content());
        assert!(backend.accepts(&LogLevel::Debug));
    }
}
