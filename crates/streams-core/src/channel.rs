use tracing::{debug, info};

use streams_types::api::{ChannelDetailsResponse, MessagesPage};
use streams_types::models::{ChannelId, UserId, UserInfo};

use crate::error::{StreamsError, StreamsResult};
use crate::message;
use crate::models::User;
use crate::store::Store;

fn infos(store: &Store, ids: &[UserId]) -> Vec<UserInfo> {
    ids.iter()
        .filter_map(|&id| store.user(id))
        .map(User::info)
        .collect()
}

pub fn details(
    store: &Store,
    auth_user_id: UserId,
    channel_id: ChannelId,
) -> StreamsResult<ChannelDetailsResponse> {
    let channel = store.channel_for_member(channel_id, auth_user_id)?;
    Ok(ChannelDetailsResponse {
        name: channel.name.clone(),
        is_public: channel.is_public,
        owner_members: infos(store, &channel.owner_members),
        all_members: infos(store, &channel.all_members),
    })
}

/// Add `u_id` to a channel the requester already belongs to.
pub fn invite(
    store: &mut Store,
    auth_user_id: UserId,
    channel_id: ChannelId,
    u_id: UserId,
) -> StreamsResult<()> {
    let channel = store.require_channel(channel_id)?;
    store.require_user(u_id)?;
    if channel.is_member(u_id) {
        return Err(StreamsError::input("The invited user is already a member of the channel"));
    }
    store.channel_for_member(channel_id, auth_user_id)?;

    store.require_channel_mut(channel_id)?.all_members.push(u_id);
    info!(channel_id, auth_user_id, u_id, "User invited to channel");
    Ok(())
}

/// Join a public channel. Global owners may also join private ones.
pub fn join(store: &mut Store, auth_user_id: UserId, channel_id: ChannelId) -> StreamsResult<()> {
    let channel = store.require_channel(channel_id)?;
    if channel.is_member(auth_user_id) {
        return Err(StreamsError::input("The user is already a member of the channel"));
    }
    let global_owner = store
        .user(auth_user_id)
        .is_some_and(|u| u.is_global_owner());
    if !channel.is_public && !global_owner {
        return Err(StreamsError::access("The channel is private"));
    }

    store.require_channel_mut(channel_id)?.all_members.push(auth_user_id);
    info!(channel_id, auth_user_id, "User joined channel");
    Ok(())
}

pub fn messages(
    store: &Store,
    auth_user_id: UserId,
    channel_id: ChannelId,
    start: usize,
) -> StreamsResult<MessagesPage> {
    let channel = store.channel_for_member(channel_id, auth_user_id)?;
    debug!(channel_id, auth_user_id, start, "Fetching channel messages");
    message::page(&channel.messages, start)
}
