use serde_json::{Map, Value};

use crate::errors::PresenceResult;
use crate::host::HostDirectory;

/// Everyone currently connected, shaped for a single log attachment.
pub(crate) struct VoiceRoster {
    /// Group name to channel name to occupant display names.
    channels_by_group: Map<String, Value>,
    pub user_count: usize,
}

impl VoiceRoster {
    pub fn into_details(self) -> Value {
        Value::Object(self.channels_by_group)
    }
}

/// Walk every group's voice-capable channels and collect their occupants.
/// Channels with nobody connected are left out, as are groups whose voice
/// channels are all empty. Any lookup failure abandons the whole walk.
pub(crate) fn collect(directory: &dyn HostDirectory) -> PresenceResult<VoiceRoster> {
    let mut channels_by_group = Map::new();
    let mut user_count = 0;

    for group in directory.groups()? {
        let mut channels = Map::new();
        for channel in directory.channels_in(&group.id)? {
            if !channel.voice_capable {
                continue;
            }
            let occupants = directory.occupants_of(&channel.id)?;
            if occupants.is_empty() {
                continue;
            }
            let mut names = Vec::with_capacity(occupants.len());
            for occupancy in occupants {
                let name = match directory.user(&occupancy.user_id)? {
                    Some(user) => user.name,
                    None => format!("Unknown User ({})", occupancy.user_id),
                };
                names.push(Value::String(name));
                user_count += 1;
            }
            channels.insert(channel.name, Value::Array(names));
        }
        if !channels.is_empty() {
            channels_by_group.insert(group.name, Value::Object(channels));
        }
    }

    Ok(VoiceRoster {
        channels_by_group,
        user_count,
    })
}
