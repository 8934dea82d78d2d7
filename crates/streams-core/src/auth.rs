use std::sync::LazyLock;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand_core::OsRng;
use regex::Regex;
use tracing::{info, warn};

use streams_types::models::{SessionId, UserId};

use crate::error::{StreamsError, StreamsResult};
use crate::models::{Permission, User};
use crate::store::Store;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_HANDLE_LEN: usize = 20;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+[._]?[a-zA-Z0-9]+@\w+[.]\w{2,3}$"));

/// Register a new user and open a session for them.
/// The first user ever registered becomes the global owner.
pub fn register(
    store: &mut Store,
    email: &str,
    password: &str,
    name_first: &str,
    name_last: &str,
) -> StreamsResult<(UserId, SessionId)> {
    let email_re = EMAIL_RE
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Email pattern failed to compile: {}", e))?;
    if !email_re.is_match(email) {
        return Err(StreamsError::input("Email is not a valid email"));
    }
    if store.user_by_email(email).is_some() {
        return Err(StreamsError::input("Email is already being used by another user"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StreamsError::input("Password must be at least 6 characters"));
    }
    if !(1..=MAX_NAME_LEN).contains(&name_first.chars().count()) {
        return Err(StreamsError::input("name_first must be between 1 and 50 characters"));
    }
    if !(1..=MAX_NAME_LEN).contains(&name_last.chars().count()) {
        return Err(StreamsError::input("name_last must be between 1 and 50 characters"));
    }

    let password_hash = hash_password(store.hash_params(), password)?;
    let handle_str = generate_handle(store, name_first, name_last);
    let permission = if store.users.is_empty() {
        Permission::Owner
    } else {
        Permission::Member
    };

    let u_id = store.next_user_id();
    let session_id = store.next_session_id();
    store.users.push(User {
        u_id,
        email: email.to_string(),
        password_hash,
        name_first: name_first.to_string(),
        name_last: name_last.to_string(),
        handle_str,
        permission,
        sessions: vec![session_id],
    });

    info!(u_id, "User registered");
    Ok((u_id, session_id))
}

/// Check credentials and open a new session.
pub fn login(store: &mut Store, email: &str, password: &str) -> StreamsResult<(UserId, SessionId)> {
    let u_id = {
        let user = store
            .user_by_email(email)
            .ok_or_else(|| StreamsError::input("Email entered does not belong to a user"))?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Corrupt password hash for user {}: {}", user.u_id, e))?;
        hasher(store.hash_params())
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| StreamsError::input("Password is not correct"))?;
        user.u_id
    };

    let session_id = store.next_session_id();
    if let Some(user) = store.user_mut(u_id) {
        user.sessions.push(session_id);
    }

    info!(u_id, session_id, "User logged in");
    Ok((u_id, session_id))
}

/// Close a session. The token that carried it stops working immediately.
pub fn logout(store: &mut Store, u_id: UserId, session_id: SessionId) -> StreamsResult<()> {
    validate_session(store, u_id, session_id)?;
    if let Some(user) = store.user_mut(u_id) {
        user.sessions.retain(|&s| s != session_id);
    }
    info!(u_id, session_id, "User logged out");
    Ok(())
}

pub fn validate_session(store: &Store, u_id: UserId, session_id: SessionId) -> StreamsResult<()> {
    match store.user(u_id) {
        Some(user) if user.sessions.contains(&session_id) => Ok(()),
        _ => {
            warn!(u_id, session_id, "Rejected stale or unknown session");
            Err(StreamsError::access("Invalid token"))
        }
    }
}

/// Lowercase alphanumeric concatenation of both names, cut to 20 characters.
/// Collisions get the smallest free numeric suffix, starting at 0.
fn generate_handle(store: &Store, name_first: &str, name_last: &str) -> String {
    let base: String = name_first
        .chars()
        .chain(name_last.chars())
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .take(MAX_HANDLE_LEN)
        .collect();

    if !store.handle_taken(&base) {
        return base;
    }

    let mut suffix = 0u32;
    loop {
        let candidate = format!("{}{}", base, suffix);
        if !store.handle_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

fn hasher(params: &Params) -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
}

fn hash_password(params: &Params, password: &str) -> StreamsResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(params)
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {}", e))?;
    Ok(hash.to_string())
}
