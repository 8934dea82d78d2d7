use axum::{Json, extract::State, response::IntoResponse};

use crate::auth::AppState;
use crate::error::ApiError;

/// Reset all state. Used by test suites between cases.
pub async fn clear(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.store.with_store_mut(|store| {
        store.clear();
        Ok(())
    })?;
    Ok(Json(serde_json::json!({})))
}
