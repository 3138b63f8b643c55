use std::{fmt, str::FromStr};

use crate::errors::{CareError, CareResult};

pub const OTP_LENGTH: usize = 4;

/// A verification code that has passed the local shape check. Holding one
/// is the only way to reach the verify-OTP endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn parse(input: &str) -> CareResult<Self> {
        let code = input.trim();
        if code.chars().count() != OTP_LENGTH {
            return Err(CareError::Validation(format!(
                "Please enter the {OTP_LENGTH}-digit code"
            )));
        }
        if !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(CareError::Validation(
                "The verification code may only contain digits".to_string(),
            ));
        }
        Ok(OtpCode(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OtpCode {
    type Err = CareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OtpCode::parse(s)
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
