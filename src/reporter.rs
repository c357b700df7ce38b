use std::sync::Arc;

use serde_json::Value;

use crate::errors::PresenceResult;
use crate::host::{HostDirectory, VoiceUpdateHandler};
use crate::ids::ChannelId;
use crate::metrics::PresenceMetrics;
use crate::model::VoiceStateUpdate;
use crate::sink::{LogRecord, LogSink};
use crate::snapshot;
use crate::transitions::{classify, Transition};

/// Rendered in the group slot when a channel has no resolvable parent, which
/// covers direct and ad-hoc channels as well as stale group references.
const GROUP_FALLBACK: &str = "a DM/Group";

/// Resolves names through the host directory and turns occupancy changes
/// into log records. Owns no state beyond its collaborators.
pub struct PresenceReporter {
    directory: Arc<dyn HostDirectory>,
    sink: Arc<dyn LogSink>,
    metrics: Arc<dyn PresenceMetrics>,
}

impl PresenceReporter {
    pub fn new(
        directory: Arc<dyn HostDirectory>,
        sink: Arc<dyn LogSink>,
        metrics: Arc<dyn PresenceMetrics>,
    ) -> Self {
        Self {
            directory,
            sink,
            metrics,
        }
    }

    /// One-time summary of every occupied voice channel.
    ///
    /// Emits exactly one record: the roster, the nobody-connected notice, or
    /// the failure. A traversal that failed halfway is abandoned rather than
    /// reported partially, and no error escapes to the caller.
    pub fn report_initial_state(&self) {
        match snapshot::collect(self.directory.as_ref()) {
            Ok(roster) => {
                self.metrics.inc_snapshots();
                if roster.user_count == 0 {
                    self.sink.emit(LogRecord::info("no users in any voice channel"));
                } else {
                    self.sink.emit(
                        LogRecord::info("users currently in voice channels")
                            .with_details(roster.into_details()),
                    );
                }
            }
            Err(e) => {
                self.metrics.inc_snapshot_errors();
                self.sink
                    .emit(LogRecord::error(format!("initial voice snapshot failed: {e}")));
            }
        }
    }

    /// Process one host-delivered batch in delivery order. A failing element
    /// gets an error record with its raw payload attached and the rest of
    /// the batch still runs.
    pub fn handle_updates(&self, updates: &[VoiceStateUpdate]) {
        for update in updates {
            if let Err(e) = self.process_update(update) {
                self.metrics.inc_update_errors();
                self.sink.emit(
                    LogRecord::error(format!("voice state update handling failed: {e}"))
                        .with_details(raw_update(update)),
                );
            }
        }
    }

    fn process_update(&self, update: &VoiceStateUpdate) -> PresenceResult<()> {
        // Users the host has not cached yet are skipped without a trace.
        let Some(user) = self.directory.user(&update.user_id)? else {
            self.metrics.inc_skipped_unknown_user();
            return Ok(());
        };

        let Some(transition) = classify(update) else {
            return Ok(());
        };

        let record = match &transition {
            Transition::Joined { channel } => {
                let (channel, group) = self.channel_labels(channel)?;
                LogRecord::info(format!("{} joined VC: '{channel}' in '{group}'", user.name))
            }
            Transition::Left { channel } => {
                let (channel, group) = self.channel_labels(channel)?;
                LogRecord::info(format!("{} left VC: '{channel}' in '{group}'", user.name))
            }
            Transition::Moved { from, to } => {
                let (from_channel, from_group) = self.channel_labels(from)?;
                let (to_channel, to_group) = self.channel_labels(to)?;
                LogRecord::info(format!(
                    "{} moved from '{from_channel}' ({from_group}) to '{to_channel}' ({to_group})",
                    user.name
                ))
            }
            Transition::StateChanged { channel } => {
                let (channel, group) = self.channel_labels(channel)?;
                LogRecord::verbose(format!(
                    "{}'s state updated in '{channel}' ({group})",
                    user.name
                ))
                .with_details(raw_update(update))
            }
        };
        self.sink.emit(record);
        self.count(&transition);
        Ok(())
    }

    fn count(&self, transition: &Transition) {
        match transition {
            Transition::Joined { .. } => self.metrics.inc_joins(),
            Transition::Left { .. } => self.metrics.inc_leaves(),
            Transition::Moved { .. } => self.metrics.inc_moves(),
            Transition::StateChanged { .. } => self.metrics.inc_state_changes(),
        }
    }

    /// Printable (channel, group) pair for one channel id. A stale channel
    /// reference keeps the raw id visible instead of dropping the record.
    fn channel_labels(&self, id: &ChannelId) -> PresenceResult<(String, String)> {
        let Some(channel) = self.directory.channel(id)? else {
            return Ok((id.to_string(), GROUP_FALLBACK.to_string()));
        };
        let group = match &channel.group_id {
            Some(group_id) => self.directory.group(group_id)?,
            None => None,
        };
        let group_label = group
            .map(|g| g.name)
            .unwrap_or_else(|| GROUP_FALLBACK.to_string());
        Ok((channel.name, group_label))
    }
}

impl VoiceUpdateHandler for PresenceReporter {
    fn handle_updates(&self, updates: &[VoiceStateUpdate]) {
        PresenceReporter::handle_updates(self, updates);
    }
}

fn raw_update(update: &VoiceStateUpdate) -> Value {
    serde_json::to_value(update).unwrap_or(Value::Null)
}
