use serde::{Deserialize, Serialize};

/// Room assigned by the server to a booking's video consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRoom {
    pub room_id: String,
    pub booking_id: String,
}

/// Everything the external video SDK needs to join a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHandoff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    pub room_id: String,
    pub participant_id: String,
    pub participant_name: String,
}
