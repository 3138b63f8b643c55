//! # CareLink App
//!
//! The presentation layer of the CareLink booking client, without the
//! rendering. Controllers take input, call the API through
//! [`carelink_client`], update the lists they were handed and report
//! through a [`notify::Notifier`].
//!
//! ## Architecture
//!
//! - **Config**: environment driven settings
//! - **Context**: client, session stores and config, passed explicitly
//! - **Controllers**: one per screen group
//! - **Toggle / Pagination / Search**: behaviour shared between screens

/// Application configuration
pub mod config;
/// Shared application context
pub mod context;
/// Screen controllers
pub mod controllers;
/// Mock notifier and confirmer for tests
pub mod mock;
/// Toasts and confirmation prompts
pub mod notify;
/// Paginated list state
pub mod pagination;
/// Debounced search input
pub mod search;
/// Confirm-then-mutate toggles
pub mod toggle;

pub use config::AppConfig;
pub use context::AppContext;
pub use notify::{Confirmer, Notifier};
