use crate::ids::ChannelId;
use crate::model::VoiceStateUpdate;

/// Classified change in one user's voice occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Joined { channel: ChannelId },
    Left { channel: ChannelId },
    Moved { from: ChannelId, to: ChannelId },
    /// Same channel on both sides of the update: a mute or stream toggle,
    /// or a plain repeat delivery. The two are not told apart.
    StateChanged { channel: ChannelId },
}

/// Classify one update from its (previous, new) channel pair. Both sides
/// absent means nothing worth reporting.
pub fn classify(update: &VoiceStateUpdate) -> Option<Transition> {
    match (&update.old_channel_id, &update.channel_id) {
        (None, Some(new)) => Some(Transition::Joined {
            channel: new.clone(),
        }),
        (Some(old), None) => Some(Transition::Left {
            channel: old.clone(),
        }),
        (Some(old), Some(new)) if old != new => Some(Transition::Moved {
            from: old.clone(),
            to: new.clone(),
        }),
        (Some(_), Some(new)) => Some(Transition::StateChanged {
            channel: new.clone(),
        }),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;

    fn update(old: Option<&str>, new: Option<&str>) -> VoiceStateUpdate {
        VoiceStateUpdate::new(
            UserId::new("u1"),
            new.map(ChannelId::new),
            old.map(ChannelId::new),
        )
    }

    #[test]
    fn new_channel_only_is_a_join() {
        assert_eq!(
            classify(&update(None, Some("C1"))),
            Some(Transition::Joined {
                channel: ChannelId::new("C1"),
            })
        );
    }

    #[test]
    fn old_channel_only_is_a_leave() {
        assert_eq!(
            classify(&update(Some("C1"), None)),
            Some(Transition::Left {
                channel: ChannelId::new("C1"),
            })
        );
    }

    #[test]
    fn differing_channels_are_a_move() {
        assert_eq!(
            classify(&update(Some("C1"), Some("C2"))),
            Some(Transition::Moved {
                from: ChannelId::new("C1"),
                to: ChannelId::new("C2"),
            })
        );
    }

    #[test]
    fn same_channel_on_both_sides_is_a_state_change() {
        assert_eq!(
            classify(&update(Some("C1"), Some("C1"))),
            Some(Transition::StateChanged {
                channel: ChannelId::new("C1"),
            })
        );
    }

    #[test]
    fn no_channel_on_either_side_is_nothing() {
        assert_eq!(classify(&update(None, None)), None);
    }
}
