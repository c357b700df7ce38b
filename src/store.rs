use std::collections::HashMap;

use parking_lot::RwLock;

use crate::errors::PresenceResult;
use crate::host::HostDirectory;
use crate::ids::{ChannelId, GroupId, UserId};
use crate::model::{Channel, Group, User, VoiceOccupancy};

/// Directory backed by plain collections.
///
/// Stands in for a live platform in tests and demo hosts. The mutators keep
/// the one-occupancy-per-user invariant the host would.
#[derive(Default)]
pub struct InMemoryDirectory {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    groups: Vec<Group>,
    channels: Vec<Channel>,
    users: HashMap<UserId, User>,
    voice: Vec<VoiceOccupancy>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&self, group: Group) {
        self.inner.write().groups.push(group);
    }

    pub fn add_channel(&self, channel: Channel) {
        self.inner.write().channels.push(channel);
    }

    pub fn add_user(&self, user: User) {
        let mut inner = self.inner.write();
        inner.users.insert(user.id.clone(), user);
    }

    /// Connect a user to a channel's voice session, leaving any previous
    /// channel first.
    pub fn connect(&self, user_id: &UserId, channel_id: &ChannelId) {
        let mut inner = self.inner.write();
        inner.voice.retain(|o| o.user_id != *user_id);
        inner.voice.push(VoiceOccupancy {
            user_id: user_id.clone(),
            channel_id: channel_id.clone(),
        });
    }

    pub fn disconnect(&self, user_id: &UserId) {
        self.inner.write().voice.retain(|o| o.user_id != *user_id);
    }
}

impl HostDirectory for InMemoryDirectory {
    fn groups(&self) -> PresenceResult<Vec<Group>> {
        Ok(self.inner.read().groups.clone())
    }

    fn channels_in(&self, group: &GroupId) -> PresenceResult<Vec<Channel>> {
        Ok(self
            .inner
            .read()
            .channels
            .iter()
            .filter(|c| c.group_id.as_ref() == Some(group))
            .cloned()
            .collect())
    }

    fn occupants_of(&self, channel: &ChannelId) -> PresenceResult<Vec<VoiceOccupancy>> {
        Ok(self
            .inner
            .read()
            .voice
            .iter()
            .filter(|o| o.channel_id == *channel)
            .cloned()
            .collect())
    }

    fn user(&self, id: &UserId) -> PresenceResult<Option<User>> {
        Ok(self.inner.read().users.get(id).cloned())
    }

    fn channel(&self, id: &ChannelId) -> PresenceResult<Option<Channel>> {
        Ok(self
            .inner
            .read()
            .channels
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }

    fn group(&self, id: &GroupId) -> PresenceResult<Option<Group>> {
        Ok(self
            .inner
            .read()
            .groups
            .iter()
            .find(|g| g.id == *id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_moves_a_user_between_channels() {
        let dir = InMemoryDirectory::new();
        let user = UserId::new("u1");
        dir.connect(&user, &ChannelId::new("C1"));
        dir.connect(&user, &ChannelId::new("C2"));

        assert!(dir.occupants_of(&ChannelId::new("C1")).unwrap().is_empty());
        let occupants = dir.occupants_of(&ChannelId::new("C2")).unwrap();
        assert_eq!(occupants.len(), 1);
        assert_eq!(occupants[0].user_id, user);
    }

    #[test]
    fn lookups_answer_absence_with_none() {
        let dir = InMemoryDirectory::new();
        assert!(dir.user(&UserId::new("nope")).unwrap().is_none());
        assert!(dir.channel(&ChannelId::new("nope")).unwrap().is_none());
        assert!(dir.group(&GroupId::new("nope")).unwrap().is_none());
    }

    #[test]
    fn disconnect_clears_the_occupancy() {
        let dir = InMemoryDirectory::new();
        let user = UserId::new("u1");
        dir.connect(&user, &ChannelId::new("C1"));
        dir.disconnect(&user);

        assert!(dir.occupants_of(&ChannelId::new("C1")).unwrap().is_empty());
    }
}
