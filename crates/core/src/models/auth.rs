use serde::{Deserialize, Serialize};

use super::session::{AdminSession, ProviderSession, UserSession};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub has_completed_details: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAuthResponse {
    pub token: String,
    pub user: UserAccount,
}

impl From<UserAuthResponse> for UserSession {
    fn from(auth: UserAuthResponse) -> Self {
        UserSession {
            token: auth.token,
            user_id: auth.user.id,
            name: auth.user.name,
            email: auth.user.email,
            has_completed_details: auth.user.has_completed_details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccount {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub has_completed_details: bool,
    #[serde(default, alias = "is_approved")]
    pub is_approved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAuthResponse {
    pub token: String,
    pub service_provider: ProviderAccount,
}

impl From<ProviderAuthResponse> for ProviderSession {
    fn from(auth: ProviderAuthResponse) -> Self {
        let account = auth.service_provider;
        ProviderSession {
            token: auth.token,
            provider_id: account.id,
            name: account.name,
            email: account.email,
            has_completed_details: account.has_completed_details,
            is_approved: account.is_approved,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAuthResponse {
    pub token: String,
    pub email: String,
}

impl From<AdminAuthResponse> for AdminSession {
    fn from(auth: AdminAuthResponse) -> Self {
        AdminSession {
            token: auth.token,
            email: auth.email,
        }
    }
}
