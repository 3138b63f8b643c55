use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::toggle::{ToggleKind, Toggleable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_listed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Toggleable for Blog {
    const KIND: ToggleKind = ToggleKind::List;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn flag(&self) -> bool {
        self.is_listed
    }

    fn set_flag(&mut self, value: bool) {
        self.is_listed = value;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRequest {
    pub title: String,
    pub image: Option<String>,
    pub content: String,
}
