mod common;

use std::{collections::HashMap, fs, path::Path};

use carelink_app::{AppConfig, AppContext};
use carelink_core::models::session::Role;
use common::{provider_session, user_session};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn config_in(dir: &Path) -> AppConfig {
    let vars = HashMap::from([
        ("CARELINK_API_URL", "http://127.0.0.1:9/".to_string()),
        ("CARELINK_STORAGE_DIR", dir.display().to_string()),
    ]);
    AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

#[test]
fn test_open_restores_sessions_saved_by_a_previous_run() {
    let dir = TempDir::new().unwrap();
    {
        let ctx = AppContext::open(config_in(dir.path())).unwrap();
        ctx.sessions.user.save(user_session()).unwrap();
        ctx.sessions.provider.save(provider_session(true)).unwrap();
    }

    let ctx = AppContext::open(config_in(dir.path())).unwrap();

    assert_eq!(ctx.sessions.active_roles(), vec![Role::User, Role::ServiceProvider]);
    assert_eq!(ctx.sessions.user.current(), Some(user_session()));
}

#[test]
fn test_open_ignores_an_unreadable_session_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("carelink.session.admin.json"), "{not json").unwrap();

    let ctx = AppContext::open(config_in(dir.path())).unwrap();

    assert!(ctx.sessions.active_roles().is_empty());
}

#[test]
fn test_open_creates_a_missing_storage_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("profiles").join("clinic");

    let ctx = AppContext::open(config_in(&nested)).unwrap();
    ctx.sessions.user.save(user_session()).unwrap();

    assert!(nested.join("carelink.session.user.json").exists());
}
