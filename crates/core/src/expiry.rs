//! Read-time expiry projection.
//!
//! The server keeps a booking `Scheduled` (and a schedule entry `open`) until
//! something else happens to it. The client shows such a record as expired
//! once its deciding timestamp has passed. These functions only compute what
//! to display; nothing here is ever sent back to the server.

use chrono::{DateTime, Utc};

use crate::models::{
    booking::BookingStatus,
    slot::{SlotDisplayStatus, SlotStatus},
};

/// True once `now` is strictly after `deadline`.
pub fn is_expired(deadline: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > deadline
}

/// Displayed status of a booking whose stored status is `stored` and whose
/// time range ends at `to_time`.
pub fn booking_display_status(
    stored: BookingStatus,
    to_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> BookingStatus {
    if stored == BookingStatus::Scheduled && is_expired(to_time, now) {
        BookingStatus::Expired
    } else {
        stored
    }
}

/// Displayed status of a schedule entry starting at `from_time`.
pub fn slot_display_status(
    stored: SlotStatus,
    from_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> SlotDisplayStatus {
    if stored == SlotStatus::Open && is_expired(from_time, now) {
        SlotDisplayStatus::Expired
    } else {
        stored.into()
    }
}
