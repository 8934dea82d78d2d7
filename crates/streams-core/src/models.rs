//! Store records. These carry private state (password hashes, sessions,
//! message histories) and are distinct from the streams-types API models.

use streams_types::models::{
    ChannelId, ChannelSummary, DmId, DmSummary, Message, SessionId, UserId, UserInfo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Owner of the whole platform; has owner rights in every channel.
    Owner,
    Member,
}

#[derive(Debug, Clone)]
pub struct User {
    pub u_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub name_first: String,
    pub name_last: String,
    pub handle_str: String,
    pub permission: Permission,
    pub sessions: Vec<SessionId>,
}

impl User {
    pub fn info(&self) -> UserInfo {
        UserInfo {
            u_id: self.u_id,
            email: self.email.clone(),
            name_first: self.name_first.clone(),
            name_last: self.name_last.clone(),
            handle_str: self.handle_str.clone(),
        }
    }

    pub fn is_global_owner(&self) -> bool {
        self.permission == Permission::Owner
    }
}

/// Channel membership lists hold user ids, so details always reflect the
/// user's current profile.
#[derive(Debug, Clone)]
pub struct Channel {
    pub channel_id: ChannelId,
    pub name: String,
    pub is_public: bool,
    pub owner_members: Vec<UserId>,
    pub all_members: Vec<UserId>,
    /// Most recent first.
    pub messages: Vec<Message>,
}

impl Channel {
    pub fn new(channel_id: ChannelId, name: String, is_public: bool, creator: UserId) -> Self {
        Self {
            channel_id,
            name,
            is_public,
            owner_members: vec![creator],
            all_members: vec![creator],
            messages: Vec::new(),
        }
    }

    pub fn is_member(&self, u_id: UserId) -> bool {
        self.all_members.contains(&u_id)
    }

    pub fn is_owner(&self, u_id: UserId) -> bool {
        self.owner_members.contains(&u_id)
    }

    pub fn summary(&self) -> ChannelSummary {
        ChannelSummary {
            channel_id: self.channel_id,
            name: self.name.clone(),
        }
    }
}

/// Unlike channels, a DM keeps full user snapshots taken when it was created.
#[derive(Debug, Clone)]
pub struct Dm {
    pub dm_id: DmId,
    pub name: String,
    pub creator: UserInfo,
    pub members: Vec<UserInfo>,
    /// Most recent first.
    pub messages: Vec<Message>,
}

impl Dm {
    pub fn is_member(&self, u_id: UserId) -> bool {
        self.members.iter().any(|m| m.u_id == u_id)
    }

    pub fn summary(&self) -> DmSummary {
        DmSummary {
            dm_id: self.dm_id,
            name: self.name.clone(),
        }
    }
}
