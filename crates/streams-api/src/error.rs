use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use streams_core::StreamsError;
use streams_types::api::ErrorBody;

/// Handler error: a core error rendered as `{code, name, message}` with
/// 400 for invalid input and 403 for denied access.
#[derive(Debug)]
pub struct ApiError(pub StreamsError);

impl From<StreamsError> for ApiError {
    fn from(err: StreamsError) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(StreamsError::Internal(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, name, message) = match self.0 {
            StreamsError::Input(msg) => (StatusCode::BAD_REQUEST, "InputError", msg),
            StreamsError::Access(msg) => (StatusCode::FORBIDDEN, "AccessError", msg),
            StreamsError::Internal(e) => {
                error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            code: status.as_u16(),
            name: name.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
