use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expiry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Open,
    Booked,
}

/// What a schedule entry shows in a list. `Expired` exists only here; the
/// server never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotDisplayStatus {
    Open,
    Booked,
    Expired,
}

impl From<SlotStatus> for SlotDisplayStatus {
    fn from(status: SlotStatus) -> Self {
        match status {
            SlotStatus::Open => SlotDisplayStatus::Open,
            SlotStatus::Booked => SlotDisplayStatus::Booked,
        }
    }
}

impl fmt::Display for SlotDisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlotDisplayStatus::Open => "open",
            SlotDisplayStatus::Booked => "booked",
            SlotDisplayStatus::Expired => "Expired",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
    pub status: SlotStatus,
    #[serde(default)]
    pub services: Vec<String>,
}

impl ScheduleEntry {
    pub fn display_status(&self, now: DateTime<Utc>) -> SlotDisplayStatus {
        expiry::slot_display_status(self.status, self.from_time, now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.display_status(now) == SlotDisplayStatus::Expired
    }

    pub fn is_bookable(&self, now: DateTime<Utc>) -> bool {
        self.display_status(now) == SlotDisplayStatus::Open
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub provider_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl SlotDocument {
    pub fn entry(&self, schedule_id: &str) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|entry| entry.id == schedule_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotRequest {
    pub date: NaiveDate,
    pub title: String,
    pub price: Decimal,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
    #[serde(default)]
    pub services: Vec<String>,
}
