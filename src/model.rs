use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{ChannelId, GroupId, UserId};

/// A persistent community the host groups channels under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

/// A channel as the host's cache sees it. Direct and ad-hoc channels have no
/// parent group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub group_id: Option<GroupId>,
    pub voice_capable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Live membership of one user in one voice channel. The host guarantees at
/// most one occupancy per user at any instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceOccupancy {
    pub user_id: UserId,
    pub channel_id: ChannelId,
}

/// One element of a host-delivered voice state update batch.
///
/// Only the three id fields are interpreted. Anything else the host includes
/// (mute and deafen flags, session ids) lands in `rest` and rides along when
/// a record attaches the raw element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceStateUpdate {
    pub user_id: UserId,
    pub channel_id: Option<ChannelId>,
    pub old_channel_id: Option<ChannelId>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl VoiceStateUpdate {
    pub fn new(
        user_id: UserId,
        channel_id: Option<ChannelId>,
        old_channel_id: Option<ChannelId>,
    ) -> Self {
        Self {
            user_id,
            channel_id,
            old_channel_id,
            rest: Map::new(),
        }
    }
}
