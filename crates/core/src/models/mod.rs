pub mod auth;
pub mod blog;
pub mod booking;
pub mod category;
pub mod complaint;
pub mod dashboard;
pub mod provider;
pub mod review;
pub mod session;
pub mod slot;
pub mod user;
pub mod video;
