use argon2::Params;
use tracing::info;

use streams_types::models::{ChannelId, DmId, MessageId, SessionId, UserId};

use crate::error::{StreamsError, StreamsResult};
use crate::models::{Channel, Dm, User};

/// All platform state. Operations receive it explicitly; nothing is global.
///
/// Ids come from monotonically increasing counters starting at 1, so an id
/// freed by a removal is never handed out again.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) users: Vec<User>,
    pub(crate) channels: Vec<Channel>,
    pub(crate) dms: Vec<Dm>,
    last_user_id: UserId,
    last_channel_id: ChannelId,
    last_dm_id: DmId,
    last_message_id: MessageId,
    last_session_id: SessionId,
    hash_params: Params,
}

fn next_id(last: &mut u32) -> u32 {
    *last += 1;
    *last
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that hashes passwords with the given argon2 cost parameters.
    pub fn with_hash_params(hash_params: Params) -> Self {
        Self {
            hash_params,
            ..Self::default()
        }
    }

    /// Drop every user, channel, DM and message and restart all id counters.
    pub fn clear(&mut self) {
        *self = Self::with_hash_params(self.hash_params.clone());
        info!("Store cleared");
    }

    pub(crate) fn hash_params(&self) -> &Params {
        &self.hash_params
    }

    // -- Id allocation --

    pub(crate) fn next_user_id(&mut self) -> UserId {
        next_id(&mut self.last_user_id)
    }

    pub(crate) fn next_channel_id(&mut self) -> ChannelId {
        next_id(&mut self.last_channel_id)
    }

    pub(crate) fn next_dm_id(&mut self) -> DmId {
        next_id(&mut self.last_dm_id)
    }

    pub(crate) fn next_message_id(&mut self) -> MessageId {
        next_id(&mut self.last_message_id)
    }

    pub(crate) fn next_session_id(&mut self) -> SessionId {
        next_id(&mut self.last_session_id)
    }

    // -- Users --

    pub fn user(&self, u_id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.u_id == u_id)
    }

    pub(crate) fn user_mut(&mut self, u_id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.u_id == u_id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn handle_taken(&self, handle: &str) -> bool {
        self.users.iter().any(|u| u.handle_str == handle)
    }

    pub fn require_user(&self, u_id: UserId) -> StreamsResult<&User> {
        self.user(u_id)
            .ok_or_else(|| StreamsError::input(format!("u_id {} does not refer to a valid user", u_id)))
    }

    // -- Channels --

    pub fn channel(&self, channel_id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.channel_id == channel_id)
    }

    pub(crate) fn require_channel(&self, channel_id: ChannelId) -> StreamsResult<&Channel> {
        self.channel(channel_id).ok_or_else(|| {
            StreamsError::input(format!("channel_id {} does not refer to a valid channel", channel_id))
        })
    }

    pub(crate) fn require_channel_mut(&mut self, channel_id: ChannelId) -> StreamsResult<&mut Channel> {
        self.channels
            .iter_mut()
            .find(|c| c.channel_id == channel_id)
            .ok_or_else(|| {
                StreamsError::input(format!("channel_id {} does not refer to a valid channel", channel_id))
            })
    }

    /// The channel, provided it exists and `u_id` belongs to it.
    pub(crate) fn channel_for_member(&self, channel_id: ChannelId, u_id: UserId) -> StreamsResult<&Channel> {
        let channel = self.require_channel(channel_id)?;
        if !channel.is_member(u_id) {
            return Err(StreamsError::access("The user is not a member of the channel"));
        }
        Ok(channel)
    }

    // -- DMs --

    pub fn dm(&self, dm_id: DmId) -> Option<&Dm> {
        self.dms.iter().find(|d| d.dm_id == dm_id)
    }

    pub fn require_dm(&self, dm_id: DmId) -> StreamsResult<&Dm> {
        self.dm(dm_id)
            .ok_or_else(|| StreamsError::input(format!("dm_id {} does not refer to a valid DM", dm_id)))
    }

    pub(crate) fn require_dm_mut(&mut self, dm_id: DmId) -> StreamsResult<&mut Dm> {
        self.dms
            .iter_mut()
            .find(|d| d.dm_id == dm_id)
            .ok_or_else(|| StreamsError::input(format!("dm_id {} does not refer to a valid DM", dm_id)))
    }

    /// The DM, provided it exists and `u_id` belongs to it.
    pub(crate) fn dm_for_member(&self, dm_id: DmId, u_id: UserId) -> StreamsResult<&Dm> {
        let dm = self.require_dm(dm_id)?;
        if !dm.is_member(u_id) {
            return Err(StreamsError::access("The user is not an authorised member of the DM"));
        }
        Ok(dm)
    }
}
