pub mod admin;
pub mod auth;
pub mod channel;
pub mod channels;
pub mod dm;
pub mod error;
pub mod extract;
pub mod messages;
pub mod token;

use axum::{
    Router,
    routing::{delete, get, post},
};

pub use auth::{AppState, AppStateInner};

/// Every route. Paths carry the API version as their last segment.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/register/v2", post(auth::register))
        .route("/auth/login/v2", post(auth::login))
        .route("/auth/logout/v1", post(auth::logout))
        .route("/channels/create/v2", post(channels::create))
        .route("/channels/list/v2", get(channels::list))
        .route("/channels/listall/v2", get(channels::listall))
        .route("/channel/details/v2", get(channel::details))
        .route("/channel/invite/v2", post(channel::invite))
        .route("/channel/join/v2", post(channel::join))
        .route("/channel/messages/v2", get(channel::messages))
        .route("/dm/create/v1", post(dm::create))
        .route("/dm/list/v1", get(dm::list))
        .route("/dm/remove/v1", delete(dm::remove))
        .route("/dm/details/v1", get(dm::details))
        .route("/dm/messages/v1", get(dm::messages))
        .route("/dm/leave/v1", post(dm::leave))
        .route("/message/send/v1", post(messages::send))
        .route("/message/senddm/v1", post(messages::send_dm))
        .route("/message/remove/v1", delete(messages::remove))
        .route("/clear/v1", delete(admin::clear))
        .with_state(state)
}
