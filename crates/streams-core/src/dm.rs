use std::collections::HashSet;

use tracing::{debug, info};

use streams_types::api::{DmDetailsResponse, MessagesPage};
use streams_types::models::{DmId, DmSummary, UserId, UserInfo};

use crate::error::{StreamsError, StreamsResult};
use crate::message;
use crate::models::Dm;
use crate::store::Store;

/// Name and members of a DM the requester belongs to.
pub fn details(store: &Store, auth_user_id: UserId, dm_id: DmId) -> StreamsResult<DmDetailsResponse> {
    let dm = store.dm_for_member(dm_id, auth_user_id)?;
    Ok(DmDetailsResponse {
        name: dm.name.clone(),
        members: dm.members.clone(),
    })
}

/// Up to 50 messages starting at `start`, most recent first.
pub fn messages(
    store: &Store,
    auth_user_id: UserId,
    dm_id: DmId,
    start: usize,
) -> StreamsResult<MessagesPage> {
    let dm = store.dm_for_member(dm_id, auth_user_id)?;
    debug!(dm_id, auth_user_id, start, "Fetching DM messages");
    message::page(&dm.messages, start)
}

/// Create a DM between the requester and `u_ids`.
///
/// The name is every participant's handle, sorted and joined with ", ".
pub fn create(store: &mut Store, auth_user_id: UserId, u_ids: &[UserId]) -> StreamsResult<DmId> {
    let creator = store.require_user(auth_user_id)?.info();

    let mut seen = HashSet::from([auth_user_id]);
    let mut members: Vec<UserInfo> = Vec::with_capacity(u_ids.len() + 1);
    members.push(creator.clone());
    for &u_id in u_ids {
        let user = store.require_user(u_id)?;
        if !seen.insert(u_id) {
            return Err(StreamsError::input(format!("u_id {} appears more than once", u_id)));
        }
        members.push(user.info());
    }

    let mut handles: Vec<&str> = members.iter().map(|m| m.handle_str.as_str()).collect();
    handles.sort_unstable();
    let name = handles.join(", ");

    let dm_id = store.next_dm_id();
    info!(dm_id, auth_user_id, name = %name, "DM created");
    store.dms.push(Dm {
        dm_id,
        name,
        creator,
        members,
        messages: Vec::new(),
    });
    Ok(dm_id)
}

/// Every id in `u_ids` names a registered user.
pub fn check_users(store: &Store, u_ids: &[UserId]) -> StreamsResult<()> {
    for &u_id in u_ids {
        store.require_user(u_id)?;
    }
    Ok(())
}

/// DMs the user is currently a member of.
pub fn list(store: &Store, auth_user_id: UserId) -> Vec<DmSummary> {
    store
        .dms
        .iter()
        .filter(|d| d.is_member(auth_user_id))
        .map(Dm::summary)
        .collect()
}

/// Delete a DM outright. Only its creator may do this.
pub fn remove(store: &mut Store, auth_user_id: UserId, dm_id: DmId) -> StreamsResult<()> {
    let index = store
        .dms
        .iter()
        .position(|d| d.dm_id == dm_id)
        .ok_or_else(|| StreamsError::input(format!("dm_id {} does not refer to a valid DM", dm_id)))?;

    if store.dms[index].creator.u_id != auth_user_id {
        return Err(StreamsError::access("The user is not the original DM creator"));
    }

    store.dms.remove(index);
    info!(dm_id, auth_user_id, "DM removed");
    Ok(())
}

/// Drop the requester from the DM's members. Leaving a DM one is not in
/// changes nothing.
pub fn leave(store: &mut Store, auth_user_id: UserId, dm_id: DmId) -> StreamsResult<()> {
    let dm = store.require_dm_mut(dm_id)?;
    let before = dm.members.len();
    dm.members.retain(|m| m.u_id != auth_user_id);

    if dm.members.len() < before {
        info!(dm_id, auth_user_id, "User left DM");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message as msg;
    use crate::testing::{register_user, test_store};

    #[test]
    fn name_is_sorted_handles_including_creator() {
        let mut store = test_store();
        let leanna = register_user(&mut store, "leanna", "chan");
        let hi = register_user(&mut store, "hi", "wore");
        let hello = register_user(&mut store, "hello", "world");

        let d = create(&mut store, leanna, &[hi, hello]).unwrap();
        let details = details(&store, leanna, d).unwrap();
        assert_eq!(details.name, "helloworld, hiwore, leannachan");
        assert_eq!(details.members.len(), 3);
        assert_eq!(details.members[0].u_id, leanna);
    }

    #[test]
    fn solo_dm_is_named_after_creator() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let d = create(&mut store, u1, &[]).unwrap();
        assert_eq!(details(&store, u1, d).unwrap().name, "annalee");
    }

    #[test]
    fn create_rejects_unknown_and_duplicate_users() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");

        assert!(matches!(create(&mut store, u1, &[u2, 99]), Err(StreamsError::Input(_))));
        assert!(matches!(create(&mut store, u1, &[u2, u2]), Err(StreamsError::Input(_))));
        assert!(matches!(create(&mut store, u1, &[u1]), Err(StreamsError::Input(_))));
        assert!(store.dms.is_empty());
    }

    #[test]
    fn check_users_needs_no_session() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");

        assert!(check_users(&store, &[]).is_ok());
        assert!(check_users(&store, &[u1]).is_ok());
        assert!(matches!(check_users(&store, &[u1, 42]), Err(StreamsError::Input(_))));
    }

    #[test]
    fn members_are_snapshots() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");
        let d = create(&mut store, u1, &[u2]).unwrap();

        store.user_mut(u2).unwrap().handle_str = "renamed".into();

        let details = details(&store, u1, d).unwrap();
        assert_eq!(details.members[1].handle_str, "bobsmith");
    }

    #[test]
    fn details_and_messages_gate_on_existence_then_membership() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");
        let u3 = register_user(&mut store, "larry", "li");
        let d = create(&mut store, u1, &[u2]).unwrap();

        assert!(matches!(details(&store, u3, 42), Err(StreamsError::Input(_))));
        assert!(matches!(details(&store, u3, d), Err(StreamsError::Access(_))));
        assert!(matches!(messages(&store, u3, 42, 0), Err(StreamsError::Input(_))));
        assert!(matches!(messages(&store, u3, d, 0), Err(StreamsError::Access(_))));
    }

    #[test]
    fn messages_paginate_most_recent_first() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");
        let d = create(&mut store, u1, &[u2]).unwrap();

        for i in 0..60 {
            msg::send_dm(&mut store, u1, d, &format!("message {}", i)).unwrap();
        }

        let first = messages(&store, u2, d, 0).unwrap();
        assert_eq!(first.messages.len(), 50);
        assert_eq!(first.end, 50);
        assert_eq!(first.messages[0].message, "message 59");

        let second = messages(&store, u2, d, first.end as usize).unwrap();
        assert_eq!(second.messages.len(), 10);
        assert_eq!(second.end, -1);
        assert_eq!(second.messages[9].message, "message 0");

        assert!(matches!(messages(&store, u2, d, 61), Err(StreamsError::Input(_))));
    }

    #[test]
    fn list_shows_member_dms() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");
        let u3 = register_user(&mut store, "larry", "li");

        let d1 = create(&mut store, u1, &[u2]).unwrap();
        let d2 = create(&mut store, u2, &[u3]).unwrap();

        assert_eq!(list(&store, u1), vec![DmSummary { dm_id: d1, name: "annalee, bobsmith".into() }]);
        let ids: Vec<DmId> = list(&store, u2).into_iter().map(|d| d.dm_id).collect();
        assert_eq!(ids, vec![d1, d2]);
        assert!(list(&store, 99).is_empty());
    }

    #[test]
    fn only_creator_can_remove() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");
        let d = create(&mut store, u1, &[u2]).unwrap();

        assert!(matches!(remove(&mut store, u2, d), Err(StreamsError::Access(_))));
        remove(&mut store, u1, d).unwrap();

        assert!(list(&store, u1).is_empty());
        assert!(list(&store, u2).is_empty());
        assert!(matches!(remove(&mut store, u1, d), Err(StreamsError::Input(_))));
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let d1 = create(&mut store, u1, &[]).unwrap();
        let d2 = create(&mut store, u1, &[]).unwrap();
        remove(&mut store, u1, d1).unwrap();

        let d3 = create(&mut store, u1, &[]).unwrap();
        assert_ne!(d3, d2);
        assert_eq!(d3, 3);
    }

    #[test]
    fn leave_removes_only_the_requester() {
        let mut store = test_store();
        let u1 = register_user(&mut store, "anna", "lee");
        let u2 = register_user(&mut store, "bob", "smith");
        let u3 = register_user(&mut store, "larry", "li");
        let d = create(&mut store, u1, &[u2]).unwrap();

        assert!(matches!(leave(&mut store, u2, 42), Err(StreamsError::Input(_))));

        leave(&mut store, u2, d).unwrap();
        assert!(list(&store, u2).is_empty());
        assert!(matches!(details(&store, u2, d), Err(StreamsError::Access(_))));

        let details = details(&store, u1, d).unwrap();
        assert_eq!(details.members.len(), 1);
        // Name is fixed at creation.
        assert_eq!(details.name, "annalee, bobsmith");

        // Not a member: nothing happens.
        leave(&mut store, u3, d).unwrap();
        assert_eq!(store.dm(d).unwrap().members.len(), 1);
    }
}
