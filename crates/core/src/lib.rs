//! # CareLink Core
//!
//! Domain types shared by every CareLink crate: the client-side copies of
//! server entities, the error type, and the handful of pure view rules the
//! client applies on its own (expiry display, toggle patching, pagination
//! math, OTP shape).

pub mod envelope;
pub mod errors;
pub mod expiry;
pub mod models;
pub mod otp;
pub mod pagination;
pub mod toggle;
