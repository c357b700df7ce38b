//! Voice presence logging for a group-communication host.
//!
//! Responsibilities:
//! - Classify each host-delivered voice state update as a join, leave, move,
//!   or in-place change and log one line per transition with resolved
//!   display names.
//! - Log a one-shot roster of every occupied voice channel shortly after
//!   activation, once the host's caches have had time to fill.
//!
//! Design notes:
//! - The host owns every entity. The plugin reads through the injected
//!   [`HostDirectory`] and writes through the injected [`LogSink`]; it keeps
//!   no state of its own between invocations.
//! - Failures stay contained: a bad batch element is logged and skipped, a
//!   failed snapshot traversal is dropped whole, and nothing propagates back
//!   into the host.

pub mod config;
pub mod errors;
pub mod host;
pub mod ids;
pub mod metrics;
pub mod model;
pub mod plugin;
pub mod reporter;
pub mod sink;
mod snapshot;
pub mod store;
pub mod transitions;

pub use config::PresenceConfig;
pub use errors::{PresenceError, PresenceResult};
pub use host::{HostDirectory, VoiceEvents, VoiceUpdateHandler};
pub use ids::{ChannelId, GroupId, UserId};
pub use metrics::{NoopMetrics, PresenceMetrics, PresenceMetricsImpl};
pub use model::{Channel, Group, User, VoiceOccupancy, VoiceStateUpdate};
pub use plugin::PresencePlugin;
pub use reporter::PresenceReporter;
pub use sink::{InMemorySink, LogRecord, LogSink, Severity, TracingSink};
pub use store::InMemoryDirectory;
pub use transitions::{classify, Transition};
