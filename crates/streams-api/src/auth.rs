use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use streams_core::{DataStore, auth};
use streams_types::api::{AuthResponse, LoginRequest, RegisterRequest, TokenRequest};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::token::{create_token, session};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: DataStore,
    pub jwt_secret: String,
}

pub async fn register(
    State(state): State<AppState>,
    Payload(req): Payload<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (auth_user_id, session_id) = state.store.with_store_mut(|store| {
        auth::register(store, &req.email, &req.password, &req.name_first, &req.name_last)
    })?;

    let token = create_token(&state.jwt_secret, auth_user_id, session_id)?;
    Ok(Json(AuthResponse { token, auth_user_id }))
}

pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (auth_user_id, session_id) = state
        .store
        .with_store_mut(|store| auth::login(store, &req.email, &req.password))?;

    let token = create_token(&state.jwt_secret, auth_user_id, session_id)?;
    Ok(Json(AuthResponse { token, auth_user_id }))
}

pub async fn logout(
    State(state): State<AppState>,
    Payload(req): Payload<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        auth::logout(store, claims.auth_user_id, claims.session_id)
    })?;
    Ok(Json(serde_json::json!({})))
}
