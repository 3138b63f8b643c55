#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::{self, Next},
    response::Response,
};
use carelink_client::{ApiClient, ClientConfig};
use carelink_core::models::session::{AdminSession, ProviderSession, UserSession};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// What the stand-in server saw for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: String,
    pub uri: String,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Seen(Arc<Mutex<Vec<SeenRequest>>>);

impl Seen {
    pub fn all(&self) -> Vec<SeenRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> SeenRequest {
        self.all().pop().expect("no request reached the server")
    }
}

pub struct TestServer {
    pub client: ApiClient,
    pub seen: Seen,
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn record(State(seen): State<Seen>, request: Request, next: Next) -> Response {
    let entry = SeenRequest {
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        authorization: header_value(request.headers(), header::AUTHORIZATION),
        cookie: header_value(request.headers(), header::COOKIE),
    };
    seen.0.lock().unwrap().push(entry);
    next.run(request).await
}

/// Serves `router` on an ephemeral local port and returns a client for it.
pub async fn start(router: Router) -> TestServer {
    let seen = Seen::default();
    let router = router.layer(middleware::from_fn_with_state(seen.clone(), record));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ClientConfig::with_default_timeout(&format!("http://{addr}/")).unwrap();
    TestServer {
        client: ApiClient::new(&config).unwrap(),
        seen,
    }
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

pub fn ack() -> Json<Value> {
    Json(json!({ "success": true, "message": "Done" }))
}

pub fn user_session() -> UserSession {
    UserSession {
        token: "user-token".to_string(),
        user_id: "u1".to_string(),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        has_completed_details: true,
    }
}

pub fn provider_session() -> ProviderSession {
    ProviderSession {
        token: "sp-token".to_string(),
        provider_id: "p1".to_string(),
        name: "Dr. Rao".to_string(),
        email: "rao@example.com".to_string(),
        has_completed_details: true,
        is_approved: true,
    }
}

pub fn admin_session() -> AdminSession {
    AdminSession {
        token: "admin-token".to_string(),
        email: "admin@example.com".to_string(),
    }
}

pub fn booking_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "userId": "u1",
        "userName": "Asha",
        "providerId": "p1",
        "providerName": "Dr. Rao",
        "slotId": "s1",
        "scheduleId": "e1",
        "date": "2026-03-02",
        "fromTime": "2026-03-02T09:00:00Z",
        "toTime": "2026-03-02T09:30:00Z",
        "price": "500",
        "status": status
    })
}
