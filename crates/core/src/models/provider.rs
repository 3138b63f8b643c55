use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::toggle::{ToggleKind, Toggleable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default, alias = "is_approved")]
    pub is_approved: bool,
    #[serde(default)]
    pub has_completed_details: bool,
}

impl Toggleable for ProviderSummary {
    const KIND: ToggleKind = ToggleKind::Block;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn flag(&self) -> bool {
        self.is_blocked
    }

    fn set_flag(&mut self, value: bool) {
        self.is_blocked = value;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default, alias = "is_approved")]
    pub is_approved: bool,
}

/// Professional details a provider submits before the admin can approve them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDetailsRequest {
    pub specialization: String,
    pub qualification: String,
    pub experience_years: u32,
    pub category: String,
    pub about: String,
    pub fee: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
}
