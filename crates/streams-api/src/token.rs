use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::warn;

use streams_core::{Store, StreamsError, StreamsResult, auth};
use streams_types::api::Claims;
use streams_types::models::{SessionId, UserId};

const TOKEN_LIFETIME_DAYS: i64 = 30;

pub fn create_token(secret: &str, auth_user_id: UserId, session_id: SessionId) -> anyhow::Result<String> {
    let claims = Claims {
        auth_user_id,
        session_id,
        exp: (chrono::Utc::now() + chrono::Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Resolve a token to its claims against an already locked store, so the
/// session check and the operation it guards see the same state.
pub fn session(store: &Store, secret: &str, token: &str) -> StreamsResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        warn!("Rejected token: {}", e);
        StreamsError::access("Invalid token")
    })?;

    let claims = token_data.claims;
    auth::validate_session(store, claims.auth_user_id, claims.session_id)?;
    Ok(claims)
}
