use axum::{Json, extract::State, response::IntoResponse};

use streams_core::dm;
use streams_types::api::{
    DmCreateRequest, DmCreateResponse, DmListResponse, DmMessagesQuery, DmRequest, TokenRequest,
};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::{Params, Payload, id, offset};
use crate::token::session;

pub async fn create(
    State(state): State<AppState>,
    Payload(req): Payload<DmCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let u_ids = req
        .u_ids
        .iter()
        .map(|&u_id| id(u_id, "u_id"))
        .collect::<Result<Vec<_>, _>>()?;

    // Unknown users are reported even when the token is bad.
    let dm_id = state.store.with_store_mut(|store| {
        dm::check_users(store, &u_ids)?;
        let claims = session(store, &state.jwt_secret, &req.token)?;
        dm::create(store, claims.auth_user_id, &u_ids)
    })?;
    Ok(Json(DmCreateResponse { dm_id }))
}

pub async fn list(
    State(state): State<AppState>,
    Params(query): Params<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dms = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        Ok(dm::list(store, claims.auth_user_id))
    })?;
    Ok(Json(DmListResponse { dms }))
}

pub async fn remove(
    State(state): State<AppState>,
    Payload(req): Payload<DmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dm_id = id(req.dm_id, "dm_id")?;
    state.store.with_store_mut(|store| {
        store.require_dm(dm_id)?;
        let claims = session(store, &state.jwt_secret, &req.token)?;
        dm::remove(store, claims.auth_user_id, dm_id)
    })?;
    Ok(Json(serde_json::json!({})))
}

pub async fn details(
    State(state): State<AppState>,
    Params(query): Params<DmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        let dm_id = id(query.dm_id, "dm_id")?;
        dm::details(store, claims.auth_user_id, dm_id)
    })?;
    Ok(Json(details))
}

pub async fn messages(
    State(state): State<AppState>,
    Params(query): Params<DmMessagesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state.store.with_store(|store| {
        let claims = session(store, &state.jwt_secret, &query.token)?;
        let dm_id = id(query.dm_id, "dm_id")?;
        let start = offset(query.start)?;
        dm::messages(store, claims.auth_user_id, dm_id, start)
    })?;
    Ok(Json(page))
}

pub async fn leave(
    State(state): State<AppState>,
    Payload(req): Payload<DmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dm_id = id(req.dm_id, "dm_id")?;
    state.store.with_store_mut(|store| {
        store.require_dm(dm_id)?;
        let claims = session(store, &state.jwt_secret, &req.token)?;
        dm::leave(store, claims.auth_user_id, dm_id)
    })?;
    Ok(Json(serde_json::json!({})))
}
