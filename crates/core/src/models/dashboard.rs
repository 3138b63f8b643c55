use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::booking::BookingStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: BookingStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_users: u64,
    pub total_providers: u64,
    pub total_bookings: u64,
    pub total_revenue: Decimal,
    #[serde(default)]
    pub bookings_by_status: Vec<StatusCount>,
}

impl AdminDashboard {
    pub fn count_for(&self, status: BookingStatus) -> u64 {
        self.bookings_by_status
            .iter()
            .filter(|entry| entry.status == status)
            .map(|entry| entry.count)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDashboard {
    pub total_bookings: u64,
    pub completed_bookings: u64,
    pub upcoming_bookings: u64,
    pub total_earnings: Decimal,
    #[serde(default)]
    pub average_rating: Option<f32>,
}
