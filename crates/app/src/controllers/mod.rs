//! View controllers, one per screen group. Each borrows the
//! [`AppContext`](crate::context::AppContext) and a
//! [`Notifier`](crate::notify::Notifier). Server failures become failure
//! toasts and leave prior state intact; only missing sessions and local
//! validation come back as `Err`.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod browse;
pub mod complaints;
pub mod dashboard;
pub mod profile;
pub mod reviews;
pub mod slots;
pub mod video;

pub use admin::AdminController;
pub use auth::AuthFlow;
pub use bookings::BookingsController;
pub use browse::BrowseController;
pub use complaints::ComplaintsController;
pub use dashboard::DashboardController;
pub use profile::ProfileController;
pub use reviews::ReviewsController;
pub use slots::SlotsController;
pub use video::VideoController;
