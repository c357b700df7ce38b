use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, error, info};

/// Severity of an emitted record. `Verbose` is below `Info` and maps to
/// debug-level output when forwarded to `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Verbose,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Verbose => "verbose",
            Severity::Error => "error",
        }
    }
}

/// One record handed to the sink: a severity, a rendered message, and an
/// optional structured attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub details: Option<Value>,
}

impl LogRecord {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            details: None,
        }
    }

    pub fn verbose(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Verbose,
            message: message.into(),
            details: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Where records go. The sink is an external collaborator: the host's own
/// logging facility in production, a capture buffer in tests.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

/// Default sink, forwards each record to `tracing` with the attachment as a
/// structured field.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        match (record.severity, record.details) {
            (Severity::Info, Some(details)) => info!(%details, "{}", record.message),
            (Severity::Info, None) => info!("{}", record.message),
            (Severity::Verbose, Some(details)) => debug!(%details, "{}", record.message),
            (Severity::Verbose, None) => debug!("{}", record.message),
            (Severity::Error, Some(details)) => error!(%details, "{}", record.message),
            (Severity::Error, None) => error!("{}", record.message),
        }
    }
}

/// Capture sink backed by a mutex-guarded buffer.
#[derive(Default)]
pub struct InMemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in emission order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl LogSink for InMemorySink {
    fn emit(&self, record: LogRecord) {
        self.records.lock().push(record);
    }
}
