//! Test server and request helpers shared by the HTTP tests.
#![allow(dead_code)]

use std::sync::Arc;

use argon2::Params;
use serde_json::{Value, json};

use streams_api::{AppState, AppStateInner};
use streams_core::{DataStore, Store};

pub const VALID: u16 = 200;
pub const INPUTERROR: u16 = 400;
pub const ACCESSERROR: u16 = 403;

pub const JWT_SECRET: &str = "test-secret";

pub struct TestApp {
    pub url: String,
    pub client: reqwest::Client,
}

pub struct Registered {
    pub token: String,
    pub u_id: u64,
}

/// Serve a fresh store on an ephemeral port.
pub async fn spawn_app() -> TestApp {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
        .unwrap();
    let state: AppState = Arc::new(AppStateInner {
        store: DataStore::new(Store::with_hash_params(params)),
        jwt_secret: JWT_SECRET.into(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, streams_api::router(state)).await.unwrap();
    });

    TestApp {
        url: format!("http://{}/", addr),
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.url, path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.url, path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.url, path))
            .query(params)
            .send()
            .await
            .unwrap()
    }

    pub async fn register(&self, email: &str, name_first: &str, name_last: &str) -> Registered {
        let resp = self
            .post(
                "auth/register/v2",
                json!({
                    "email": email,
                    "password": "password",
                    "name_first": name_first,
                    "name_last": name_last,
                }),
            )
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
        let body: Value = resp.json().await.unwrap();
        Registered {
            token: body["token"].as_str().unwrap().to_string(),
            u_id: body["auth_user_id"].as_u64().unwrap(),
        }
    }

    /// The first user registered; a global owner.
    pub async fn global_owner(&self) -> Registered {
        self.register("cat@gmail.com", "anna", "lee").await
    }

    pub async fn create_channel(&self, token: &str, name: &str, is_public: bool) -> u64 {
        let resp = self
            .post(
                "channels/create/v2",
                json!({ "token": token, "name": name, "is_public": is_public }),
            )
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
        let body: Value = resp.json().await.unwrap();
        body["channel_id"].as_u64().unwrap()
    }

    pub async fn create_dm(&self, token: &str, u_ids: &[u64]) -> u64 {
        let resp = self
            .post("dm/create/v1", json!({ "token": token, "u_ids": u_ids }))
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
        let body: Value = resp.json().await.unwrap();
        body["dm_id"].as_u64().unwrap()
    }

    pub async fn send(&self, token: &str, channel_id: u64, message: &str) -> u64 {
        let resp = self
            .post(
                "message/send/v1",
                json!({ "token": token, "channel_id": channel_id, "message": message }),
            )
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
        let body: Value = resp.json().await.unwrap();
        body["message_id"].as_u64().unwrap()
    }

    pub async fn send_dm(&self, token: &str, dm_id: u64, message: &str) -> u64 {
        let resp = self
            .post(
                "message/senddm/v1",
                json!({ "token": token, "dm_id": dm_id, "message": message }),
            )
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
        let body: Value = resp.json().await.unwrap();
        body["message_id"].as_u64().unwrap()
    }

    pub async fn channel_messages(&self, token: &str, channel_id: u64, start: i64) -> Value {
        let resp = self
            .get(
                "channel/messages/v2",
                &[
                    ("token", token.to_string()),
                    ("channel_id", channel_id.to_string()),
                    ("start", start.to_string()),
                ],
            )
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
        resp.json().await.unwrap()
    }

    pub async fn invite(&self, token: &str, channel_id: u64, u_id: u64) {
        let resp = self
            .post(
                "channel/invite/v2",
                json!({ "token": token, "channel_id": channel_id, "u_id": u_id }),
            )
            .await;
        assert_eq!(resp.status().as_u16(), VALID);
    }
}
