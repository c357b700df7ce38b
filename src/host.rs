use std::sync::Arc;

use crate::errors::PresenceResult;
use crate::ids::{ChannelId, GroupId, UserId};
use crate::model::{Channel, Group, User, VoiceOccupancy, VoiceStateUpdate};

/// Read-only window onto the entity caches the host already maintains.
///
/// Implementations answer from in-process state and must not block on I/O.
/// A missing entity is `Ok(None)` or an empty list; `Err` is reserved for
/// the adapter itself failing.
pub trait HostDirectory: Send + Sync {
    /// Every group the host currently knows.
    fn groups(&self) -> PresenceResult<Vec<Group>>;

    /// Channels belonging to one group, voice-capable or not.
    fn channels_in(&self, group: &GroupId) -> PresenceResult<Vec<Channel>>;

    /// Users connected to the channel's voice session, in the host's order.
    fn occupants_of(&self, channel: &ChannelId) -> PresenceResult<Vec<VoiceOccupancy>>;

    fn user(&self, id: &UserId) -> PresenceResult<Option<User>>;

    fn channel(&self, id: &ChannelId) -> PresenceResult<Option<Channel>>;

    fn group(&self, id: &GroupId) -> PresenceResult<Option<Group>>;
}

/// Callback the host invokes once per delivered voice state update batch.
/// Updates arrive in delivery order and the handler must not panic across
/// the boundary.
pub trait VoiceUpdateHandler: Send + Sync {
    fn handle_updates(&self, updates: &[VoiceStateUpdate]);
}

/// The host's subscription surface. Registration is one-way: the host keeps
/// invoking the handler until it drops the plugin, there is no unsubscribe.
pub trait VoiceEvents {
    fn on_voice_state_updates(&self, handler: Arc<dyn VoiceUpdateHandler>);
}
