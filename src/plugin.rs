use std::sync::Arc;

use tokio::time::sleep;

use crate::config::PresenceConfig;
use crate::host::{HostDirectory, VoiceEvents};
use crate::metrics::PresenceMetrics;
use crate::reporter::PresenceReporter;
use crate::sink::LogSink;

/// Voice presence logging plugin.
///
/// Construction wires the collaborators. [`start`](Self::start) is the one
/// lifecycle hook; there is no stop. The host simply ceases delivering
/// updates when it drops the subscription.
pub struct PresencePlugin {
    cfg: PresenceConfig,
    reporter: Arc<PresenceReporter>,
}

impl PresencePlugin {
    pub fn new(
        cfg: PresenceConfig,
        directory: Arc<dyn HostDirectory>,
        sink: Arc<dyn LogSink>,
        metrics: Arc<dyn PresenceMetrics>,
    ) -> Self {
        Self {
            cfg,
            reporter: Arc::new(PresenceReporter::new(directory, sink, metrics)),
        }
    }

    /// The reporter itself, for hosts that deliver batches without a
    /// subscription surface.
    pub fn reporter(&self) -> Arc<PresenceReporter> {
        self.reporter.clone()
    }

    /// Activation hook. Call once, inside a tokio runtime.
    ///
    /// Registers the update handler first, so live transitions flow from the
    /// very start, then schedules the one-shot occupancy snapshot after
    /// `startup_delay`. The snapshot task is detached; the host lifecycle
    /// offers no cancellation point to hang it on.
    pub fn start(&self, events: &dyn VoiceEvents) {
        events.on_voice_state_updates(self.reporter.clone());

        let reporter = self.reporter.clone();
        let delay = self.cfg.startup_delay;
        tokio::spawn(async move {
            sleep(delay).await;
            reporter.report_initial_state();
        });
    }
}
