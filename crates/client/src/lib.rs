//! # CareLink Client
//!
//! Typed access to the CareLink REST API.
//!
//! ## Architecture
//!
//! - **Config**: base URL and request timeout
//! - **Auth**: how each role proves its session (bearer token or cookie)
//! - **Client**: request construction and response decoding
//! - **Endpoints**: one scoped API per role plus the unauthenticated calls
//!
//! Every response body is decoded through
//! [`Envelope`](carelink_core::envelope::Envelope), so a call either yields
//! its payload or a [`CareError`](carelink_core::errors::CareError). There
//! is no way to read a payload without the success flag having been checked.
//! Requests are never retried.

/// Authentication schemes per role
pub mod auth;
/// HTTP plumbing shared by all endpoints
pub mod client;
/// Client configuration
pub mod config;
/// Endpoint groups
pub mod endpoints;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use endpoints::{admin::AdminApi, provider::ProviderApi, user::UserApi};
