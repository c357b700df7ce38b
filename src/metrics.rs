use metrics::counter;

/// Counters the reporter drives. Implement to wire presence activity into
/// your telemetry, or keep [`NoopMetrics`] to opt out.
pub trait PresenceMetrics: Send + Sync {
    fn inc_joins(&self);
    fn inc_leaves(&self);
    fn inc_moves(&self);
    fn inc_state_changes(&self);
    fn inc_skipped_unknown_user(&self);
    fn inc_update_errors(&self);
    fn inc_snapshots(&self);
    fn inc_snapshot_errors(&self);
}

pub struct NoopMetrics;

impl PresenceMetrics for NoopMetrics {
    fn inc_joins(&self) {}
    fn inc_leaves(&self) {}
    fn inc_moves(&self) {}
    fn inc_state_changes(&self) {}
    fn inc_skipped_unknown_user(&self) {}
    fn inc_update_errors(&self) {}
    fn inc_snapshots(&self) {}
    fn inc_snapshot_errors(&self) {}
}

/// Counters published through the `metrics` facade under
/// `{ns}_presence_*_total`.
pub struct PresenceMetricsImpl {
    ns: &'static str,
}

impl PresenceMetricsImpl {
    pub fn new(ns: &'static str) -> Self {
        Self { ns }
    }
}

impl PresenceMetrics for PresenceMetricsImpl {
    fn inc_joins(&self) {
        counter!(format!("{}_presence_joins_total", self.ns)).increment(1);
    }

    fn inc_leaves(&self) {
        counter!(format!("{}_presence_leaves_total", self.ns)).increment(1);
    }

    fn inc_moves(&self) {
        counter!(format!("{}_presence_moves_total", self.ns)).increment(1);
    }

    fn inc_state_changes(&self) {
        counter!(format!("{}_presence_state_changes_total", self.ns)).increment(1);
    }

    fn inc_skipped_unknown_user(&self) {
        counter!(format!("{}_presence_skipped_unknown_user_total", self.ns)).increment(1);
    }

    fn inc_update_errors(&self) {
        counter!(format!("{}_presence_update_errors_total", self.ns)).increment(1);
    }

    fn inc_snapshots(&self) {
        counter!(format!("{}_presence_snapshots_total", self.ns)).increment(1);
    }

    fn inc_snapshot_errors(&self) {
        counter!(format!("{}_presence_snapshot_errors_total", self.ns)).increment(1);
    }
}
