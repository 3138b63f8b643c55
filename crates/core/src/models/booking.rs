use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expiry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Cancelled,
    Expired,
    Refunded,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Scheduled => "Scheduled",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Expired => "Expired",
            BookingStatus::Refunded => "Refunded",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    pub provider_id: String,
    #[serde(default)]
    pub provider_name: String,
    pub slot_id: String,
    pub schedule_id: String,
    pub date: NaiveDate,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
    pub price: Decimal,
    pub status: BookingStatus,
    #[serde(default)]
    pub cancel_reason: Option<String>,
}

impl Booking {
    /// Status as it should be shown at `now`. Read-only: the stored status is
    /// never modified.
    pub fn display_status(&self, now: DateTime<Utc>) -> BookingStatus {
        expiry::booking_display_status(self.status, self.to_time, now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.display_status(now) == BookingStatus::Expired
    }

    /// A booking can still be cancelled or joined only while it displays as
    /// `Scheduled`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.display_status(now) == BookingStatus::Scheduled
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub slot_id: String,
    pub schedule_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub payment_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub reason: String,
}
