use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::{JsonRejection, QueryRejection}},
    http::request::Parts,
};

use streams_core::{StreamsError, StreamsResult};

use crate::error::ApiError;

/// JSON body whose rejections surface as invalid input (400) rather than
/// axum's default 415/422.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| StreamsError::input(e.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string counterpart of [`Payload`].
pub struct Params<T>(pub T);

impl<S, T> FromRequestParts<S> for Params<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| StreamsError::input(e.body_text()))?;
        Ok(Self(value))
    }
}

/// Narrow a wire id to the store's id type. Negative or oversized ids cannot
/// name anything, so they are invalid input.
pub fn id(value: i64, field: &str) -> StreamsResult<u32> {
    u32::try_from(value)
        .map_err(|_| StreamsError::input(format!("{} {} is not a valid id", field, value)))
}

pub fn offset(value: i64) -> StreamsResult<usize> {
    usize::try_from(value)
        .map_err(|_| StreamsError::input(format!("start {} must not be negative", value)))
}
