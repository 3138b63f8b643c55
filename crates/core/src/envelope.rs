//! The server wraps every JSON body as `{ success, message?, data? }`.
//!
//! Decoding always goes through [`Envelope::into_data`] or
//! [`Envelope::into_ack`], which turn a missing or false `success` flag into
//! [`CareError::Rejected`]. Callers therefore only ever see a `Result`.

use serde::{Deserialize, Serialize};

use crate::errors::{CareError, CareResult};

const DEFAULT_REJECTION: &str = "The server did not confirm the request";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Absent counts as `false`.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Successful response that carries no payload the caller needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ack {
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Payload of a successful response. A success without `data` is
    /// treated as a rejection because the caller cannot proceed.
    pub fn into_data(self) -> CareResult<T> {
        if !self.success {
            return Err(rejection(self.message));
        }
        self.data
            .ok_or_else(|| CareError::Rejected("The server response carried no data".to_string()))
    }

    pub fn into_ack(self) -> CareResult<Ack> {
        if self.success {
            Ok(Ack {
                message: self.message,
            })
        } else {
            Err(rejection(self.message))
        }
    }
}

fn rejection(message: Option<String>) -> CareError {
    CareError::Rejected(
        message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
    )
}

/// One page of a server-side list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Paginated {
            items: Vec::new(),
            total: 0,
        }
    }
}
