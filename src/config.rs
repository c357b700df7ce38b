use std::time::Duration;

/// Plugin knobs.
#[derive(Debug, Clone)]
pub struct PresenceConfig {
    /// How long after activation the one-shot occupancy snapshot runs. The
    /// host's caches are still filling right after connect, so this is a
    /// fixed grace period rather than a readiness poll.
    pub startup_delay: Duration,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_secs(5),
        }
    }
}
