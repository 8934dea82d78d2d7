use axum::{Json, extract::State, response::IntoResponse};

use streams_core::channel;
use streams_types::api::{
    ChannelInviteRequest, ChannelJoinRequest, ChannelMessagesQuery, ChannelQuery,
};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{Params, Payload, id, offset};
use crate::token::session;

pub async fn details(
    State(state): State<AppState>,
    Params(query): Params<ChannelQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        let channel_id = id(query.channel_id, "channel_id")?;
        channel::details(store, claims.auth_user_id, channel_id)
    })?;
    Ok(Json(details))
}

pub async fn invite(
    State(state): State<AppState>,
    Payload(req): Payload<ChannelInviteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        let channel_id = id(req.channel_id, "channel_id")?;
        let u_id = id(req.u_id, "u_id")?;
        channel::invite(store, claims.auth_user_id, channel_id, u_id)
    })?;
    Ok(Json(serde_json::json!({})))
}

pub async fn join(
    State(state): State<AppState>,
    Payload(req): Payload<ChannelJoinRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        let channel_id = id(req.channel_id, "channel_id")?;
        channel::join(store, claims.auth_user_id, channel_id)
    })?;
    Ok(Json(serde_json::json!({})))
}

pub async fn messages(
    State(state): State<AppState>,
    Params(query): Params<ChannelMessagesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        let channel_id = id(query.channel_id, "channel_id")?;
        let start = offset(query.start)?;
        channel::messages(store, claims.auth_user_id, channel_id, start)
    })?;
    Ok(Json(page))
}
