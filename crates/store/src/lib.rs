//! # CareLink Store
//!
//! Client-side persistence. A [`storage::LocalStorage`] backend plays the
//! part of the browser's local storage, and [`sessions::Sessions`] holds one
//! explicitly scoped session store per role on top of it.

pub mod mock;
pub mod sessions;
pub mod storage;

pub use sessions::{SessionStore, Sessions};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
