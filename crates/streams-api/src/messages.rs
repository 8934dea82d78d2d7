use axum::{Json, extract::State, response::IntoResponse};

use streams_core::message;
use streams_types::api::{
    MessageRemoveRequest, MessageSendDmRequest, MessageSendRequest, MessageSendResponse,
};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{Payload, id};
use crate::token::session;

pub async fn send(
    State(state): State<AppState>,
    Payload(req): Payload<MessageSendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message_id = state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        let channel_id = id(req.channel_id, "channel_id")?;
        message::send(store, claims.auth_user_id, channel_id, &req.message)
    })?;
    Ok(Json(MessageSendResponse { message_id }))
}

pub async fn send_dm(
    State(state): State<AppState>,
    Payload(req): Payload<MessageSendDmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message_id = state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        let dm_id = id(req.dm_id, "dm_id")?;
        message::send_dm(store, claims.auth_user_id, dm_id, &req.message)
    })?;
    Ok(Json(MessageSendResponse { message_id }))
}

pub async fn remove(
    State(state): State<AppState>,
    Payload(req): Payload<MessageRemoveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        let message_id = id(req.message_id, "message_id")?;
        message::remove(store, claims.auth_user_id, message_id)
    })?;
    Ok(Json(serde_json::json!({})))
}
