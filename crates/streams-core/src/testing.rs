//! Fixtures shared by the unit tests.

use argon2::Params;

use streams_types::models::UserId;

use crate::auth;
use crate::store::Store;

/// A store with the cheapest argon2 parameters so tests stay fast.
pub fn test_store() -> Store {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
        .expect("minimum argon2 params are valid");
    Store::with_hash_params(params)
}

/// Register `first last` with an email derived from both names.
pub fn register_user(store: &mut Store, first: &str, last: &str) -> UserId {
    let local: String = format!("{}{}", first, last)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let email = format!("{}{}@gmail.com", local, store.users.len());
    let (u_id, _) = auth::register(store, &email, "password", first, last)
        .expect("test registration succeeds");
    u_id
}
