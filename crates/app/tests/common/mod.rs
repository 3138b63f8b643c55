#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};
use carelink_app::{AppConfig, AppContext, Confirmer, Notifier};
use carelink_core::models::session::{AdminSession, ProviderSession, UserSession};
use carelink_store::MemoryStorage;
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Debug, Clone, Default)]
pub struct Seen(Arc<Mutex<Vec<String>>>);

impl Seen {
    /// `"METHOD /path?query"` for every request, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

async fn record(State(seen): State<Seen>, request: Request, next: Next) -> Response {
    seen.0
        .lock()
        .unwrap()
        .push(format!("{} {}", request.method(), request.uri()));
    next.run(request).await
}

/// Serves `router` on an ephemeral port and builds a context over
/// in-memory storage pointing at it.
pub async fn start(router: Router) -> (AppContext, Seen) {
    let seen = Seen::default();
    let router = router.layer(middleware::from_fn_with_state(seen.clone(), record));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let ctx = AppContext::new(config_for(&format!("http://{addr}/")), Arc::new(MemoryStorage::new()))
        .unwrap();
    (ctx, seen)
}

pub fn config_for(api_url: &str) -> AppConfig {
    let vars = HashMap::from([
        ("CARELINK_API_URL", api_url.to_string()),
        ("CARELINK_VIDEO_APP_ID", "video-app".to_string()),
    ]);
    AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

pub fn ack() -> Json<Value> {
    Json(json!({ "success": true, "message": "Done" }))
}

pub fn rejected(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "message": message }))
}

/// Notifier that keeps every toast for later assertions.
#[derive(Debug, Default)]
pub struct Toasts {
    successes: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl Toasts {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

/// Confirmer with a fixed answer.
pub struct Answer(pub bool);

impl Confirmer for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
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

pub fn provider_session(is_approved: bool) -> ProviderSession {
    ProviderSession {
        token: "sp-token".to_string(),
        provider_id: "p1".to_string(),
        name: "Dr. Rao".to_string(),
        email: "rao@example.com".to_string(),
        has_completed_details: true,
        is_approved,
    }
}

pub fn admin_session() -> AdminSession {
    AdminSession {
        token: "admin-token".to_string(),
        email: "admin@example.com".to_string(),
    }
}

/// Booking JSON for a window on `day` (`YYYY-MM-DD`) from 09:00 to 09:30.
pub fn booking_json(id: &str, status: &str, day: &str) -> Value {
    json!({
        "_id": id,
        "userId": "u1",
        "userName": "Asha",
        "providerId": "p1",
        "providerName": "Dr. Rao",
        "slotId": "s1",
        "scheduleId": "e1",
        "date": day,
        "fromTime": format!("{day}T09:00:00Z"),
        "toTime": format!("{day}T09:30:00Z"),
        "price": "500",
        "status": status
    })
}

pub fn entry_json(id: &str, status: &str, day: &str) -> Value {
    json!({
        "_id": id,
        "title": "Consultation",
        "price": 400,
        "fromTime": format!("{day}T10:00:00Z"),
        "toTime": format!("{day}T10:30:00Z"),
        "status": status,
        "services": ["General"]
    })
}
