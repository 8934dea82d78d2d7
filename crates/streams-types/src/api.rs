use serde::{Deserialize, Serialize};

use crate::models::{
    ChannelId, ChannelSummary, DmId, DmSummary, Message, MessageId, SessionId, UserId, UserInfo,
};

// -- JWT Claims --

/// Claims carried by every session token. A token is only honoured while
/// `session_id` is still open for `auth_user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub auth_user_id: UserId,
    pub session_id: SessionId,
    pub exp: usize,
}

// Ids arrive as signed integers so that negative or oversized values can be
// rejected as invalid input instead of failing deserialisation.

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name_first: String,
    pub name_last: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub auth_user_id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

// -- Channels --

#[derive(Debug, Deserialize)]
pub struct ChannelsCreateRequest {
    pub token: String,
    pub name: String,
    /// Either a JSON boolean or the integers 0/1.
    pub is_public: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelsCreateResponse {
    pub channel_id: ChannelId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelsListResponse {
    pub channels: Vec<ChannelSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelQuery {
    pub token: String,
    pub channel_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChannelMessagesQuery {
    pub token: String,
    pub channel_id: i64,
    pub start: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChannelInviteRequest {
    pub token: String,
    pub channel_id: i64,
    pub u_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChannelJoinRequest {
    pub token: String,
    pub channel_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDetailsResponse {
    pub name: String,
    pub is_public: bool,
    pub owner_members: Vec<UserInfo>,
    pub all_members: Vec<UserInfo>,
}

// -- DMs --

#[derive(Debug, Deserialize)]
pub struct DmCreateRequest {
    pub token: String,
    pub u_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DmCreateResponse {
    pub dm_id: DmId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DmListResponse {
    pub dms: Vec<DmSummary>,
}

#[derive(Debug, Deserialize)]
pub struct DmRequest {
    pub token: String,
    pub dm_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct DmMessagesQuery {
    pub token: String,
    pub dm_id: i64,
    pub start: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmDetailsResponse {
    pub name: String,
    pub members: Vec<UserInfo>,
}

// -- Messages --

#[derive(Debug, Deserialize)]
pub struct MessageSendRequest {
    pub token: String,
    pub channel_id: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageSendDmRequest {
    pub token: String,
    pub dm_id: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRemoveRequest {
    pub token: String,
    pub message_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageSendResponse {
    pub message_id: MessageId,
}

/// One page of a channel or DM history. `end` is -1 once the oldest message
/// has been returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesPage {
    pub messages: Vec<Message>,
    pub start: usize,
    pub end: i64,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub name: String,
    pub message: String,
}
