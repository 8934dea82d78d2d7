use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use streams_core::{StreamsError, channels};
use streams_types::api::{
    ChannelsCreateRequest, ChannelsCreateResponse, ChannelsListResponse, TokenRequest,
};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{Params, Payload};
use crate::token::session;

/// `is_public` may be sent as a boolean or as 0/1.
fn parse_is_public(value: &Value) -> Result<bool, ApiError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(StreamsError::input("the channel has to be either public or private").into()),
        },
        _ => Err(StreamsError::input("the channel has to be either public or private").into()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Payload(req): Payload<ChannelsCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Payload problems are reported even when the token is bad.
    channels::validate_name(&req.name)?;
    let is_public = parse_is_public(&req.is_public)?;

    let channel_id = state.store.with_store_mut(|store| {
        let claims = session(store, &state.jwt_secret, &req.token)?;
        channels::create(store, claims.auth_user_id, &req.name, is_public)
    })?;
    Ok(Json(ChannelsCreateResponse { channel_id }))
}

pub async fn list(
    State(state): State<AppState>,
    Params(query): Params<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let channels = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        Ok(channels::list(store, claims.auth_user_id))
    })?;
    Ok(Json(ChannelsListResponse { channels }))
}

pub async fn listall(
    State(state): State<AppState>,
    Params(query): Params<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let channels = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        Ok(channels::listall(store, claims.auth_user_id))
    })?;
    Ok(Json(ChannelsListResponse { channels }))
}
