use serde::{Deserialize, Serialize};

use crate::toggle::{ToggleKind, Toggleable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sub_categories: Vec<String>,
    #[serde(default)]
    pub is_listed: bool,
}

impl Toggleable for Category {
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
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    pub sub_categories: Vec<String>,
}

impl CategoryRequest {
    /// Builds a request from a comma separated tag list, keeping tag order
    /// and dropping blanks.
    pub fn from_tags(name: &str, tags: &str) -> Self {
        CategoryRequest {
            name: name.trim().to_string(),
            sub_categories: tags
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
