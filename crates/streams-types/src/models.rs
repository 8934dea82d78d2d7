use serde::{Deserialize, Serialize};

pub type UserId = u32;
pub type ChannelId = u32;
pub type DmId = u32;
pub type MessageId = u32;
pub type SessionId = u32;

/// Public view of a user. DMs store these as snapshots taken at creation
/// time, so a member entry does not follow later profile changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub u_id: UserId,
    pub email: String,
    pub name_first: String,
    pub name_last: String,
    pub handle_str: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    pub u_id: UserId,
    pub message: String,
    /// Unix seconds.
    pub time_sent: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub channel_id: ChannelId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmSummary {
    pub dm_id: DmId,
    pub name: String,
}
