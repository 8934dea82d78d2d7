use tracing::{debug, info};

use streams_types::models::{ChannelId, ChannelSummary, UserId};

use crate::error::{StreamsError, StreamsResult};
use crate::models::Channel;
use crate::store::Store;

pub const MAX_CHANNEL_NAME_LEN: usize = 20;

/// Channels the user belongs to.
pub fn list(store: &Store, auth_user_id: UserId) -> Vec<ChannelSummary> {
    let channels: Vec<ChannelSummary> = store
        .channels
        .iter()
        .filter(|c| c.is_member(auth_user_id))
        .map(Channel::summary)
        .collect();
    debug!(auth_user_id, count = channels.len(), "Listed member channels");
    channels
}

/// Every channel, public or private.
pub fn listall(store: &Store, auth_user_id: UserId) -> Vec<ChannelSummary> {
    debug!(auth_user_id, count = store.channels.len(), "Listed all channels");
    store.channels.iter().map(Channel::summary).collect()
}

/// A channel name is 1 to 20 characters and does not start with whitespace.
pub fn validate_name(name: &str) -> StreamsResult<()> {
    if !(1..=MAX_CHANNEL_NAME_LEN).contains(&name.chars().count()) {
        return Err(StreamsError::input(
            "Length of name is less than 1 or more than 20 characters",
        ));
    }
    if name.starts_with(char::is_whitespace) {
        return Err(StreamsError::input("Channel name cannot start with a blank"));
    }
    Ok(())
}

/// Create a channel owned by `auth_user_id`, who also becomes its only member.
pub fn create(
    store: &mut Store,
    auth_user_id: UserId,
    name: &str,
    is_public: bool,
) -> StreamsResult<ChannelId> {
    validate_name(name)?;
    store.require_user(auth_user_id)?;

    let channel_id = store.next_channel_id();
    store
        .channels
        .push(Channel::new(channel_id, name.to_string(), is_public, auth_user_id));

    info!(channel_id, auth_user_id, is_public, "Channel created");
    Ok(channel_id)
}
