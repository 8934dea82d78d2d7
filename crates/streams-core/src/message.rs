use tracing::info;

use streams_types::api::MessagesPage;
use streams_types::models::{ChannelId, DmId, Message, MessageId, UserId};

use crate::error::{StreamsError, StreamsResult};
use crate::store::Store;

/// Messages returned per page.
pub const PAGE_SIZE: usize = 50;
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Slice one page out of a most-recent-first history.
///
/// `start == messages.len()` is a valid, empty final page.
pub(crate) fn page(messages: &[Message], start: usize) -> StreamsResult<MessagesPage> {
    if start > messages.len() {
        return Err(StreamsError::input(
            "start is greater than the total number of messages",
        ));
    }

    let end = start + PAGE_SIZE;
    if end >= messages.len() {
        Ok(MessagesPage {
            messages: messages[start..].to_vec(),
            start,
            end: -1,
        })
    } else {
        Ok(MessagesPage {
            messages: messages[start..end].to_vec(),
            start,
            end: end as i64,
        })
    }
}

fn check_length(text: &str) -> StreamsResult<()> {
    if !(1..=MAX_MESSAGE_LEN).contains(&text.chars().count()) {
        return Err(StreamsError::input(
            "Length of message is less than 1 or over 1000 characters",
        ));
    }
    Ok(())
}

fn new_message(store: &mut Store, u_id: UserId, text: &str) -> Message {
    Message {
        message_id: store.next_message_id(),
        u_id,
        message: text.to_string(),
        time_sent: chrono::Utc::now().timestamp(),
    }
}

/// Post to a channel the user belongs to.
pub fn send(
    store: &mut Store,
    auth_user_id: UserId,
    channel_id: ChannelId,
    text: &str,
) -> StreamsResult<MessageId> {
    store.require_channel(channel_id)?;
    check_length(text)?;
    store.channel_for_member(channel_id, auth_user_id)?;

    let message = new_message(store, auth_user_id, text);
    let message_id = message.message_id;
    store.require_channel_mut(channel_id)?.messages.insert(0, message);

    info!(message_id, channel_id, auth_user_id, "Message sent to channel");
    Ok(message_id)
}

/// Post to a DM the user belongs to.
pub fn send_dm(
    store: &mut Store,
    auth_user_id: UserId,
    dm_id: DmId,
    text: &str,
) -> StreamsResult<MessageId> {
    store.require_dm(dm_id)?;
    check_length(text)?;
    store.dm_for_member(dm_id, auth_user_id)?;

    let message = new_message(store, auth_user_id, text);
    let message_id = message.message_id;
    store.require_dm_mut(dm_id)?.messages.insert(0, message);

    info!(message_id, dm_id, auth_user_id, "Message sent to DM");
    Ok(message_id)
}

enum Location {
    Channel { index: usize, position: usize },
    Dm { index: usize, position: usize },
}

fn locate(store: &Store, message_id: MessageId) -> Option<Location> {
    let in_channel = store.channels.iter().enumerate().find_map(|(index, c)| {
        c.messages
            .iter()
            .position(|m| m.message_id == message_id)
            .map(|position| Location::Channel { index, position })
    });

    in_channel.or_else(|| {
        store.dms.iter().enumerate().find_map(|(index, d)| {
            d.messages
                .iter()
                .position(|m| m.message_id == message_id)
                .map(|position| Location::Dm { index, position })
        })
    })
}

/// Delete a message.
///
/// Channel messages may be removed by their sender, a channel owner, or a
/// global owner. DM messages may be removed by their sender or the DM
/// creator. Either way the requester must still belong to the conversation,
/// except that global owners reach every channel.
pub fn remove(store: &mut Store, auth_user_id: UserId, message_id: MessageId) -> StreamsResult<()> {
    let location = locate(store, message_id).ok_or_else(|| {
        StreamsError::input(format!("message_id {} does not refer to a valid message", message_id))
    })?;
    let global_owner = store
        .user(auth_user_id)
        .is_some_and(|u| u.is_global_owner());

    match location {
        Location::Channel { index, position } => {
            let channel = &store.channels[index];
            if !channel.is_member(auth_user_id) && !global_owner {
                return Err(StreamsError::access("The user is not a member of the channel"));
            }
            let sender = channel.messages[position].u_id;
            if sender != auth_user_id && !channel.is_owner(auth_user_id) && !global_owner {
                return Err(StreamsError::access(
                    "The user neither sent the message nor owns the channel",
                ));
            }
            store.channels[index].messages.remove(position);
        }
        Location::Dm { index, position } => {
            let dm = &store.dms[index];
            if !dm.is_member(auth_user_id) {
                return Err(StreamsError::access("The user is not an authorised member of the DM"));
            }
            let sender = dm.messages[position].u_id;
            if sender != auth_user_id && dm.creator.u_id != auth_user_id {
                return Err(StreamsError::access(
                    "The user neither sent the message nor created the DM",
                ));
            }
            store.dms[index].messages.remove(position);
        }
    }

    info!(message_id, auth_user_id, "Message removed");
    Ok(())
}
