use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    ServiceProvider,
    Admin,
}

impl Role {
    /// Key under which the role's session is mirrored to local storage.
    pub fn storage_key(self) -> &'static str {
        match self {
            Role::User => "carelink.session.user",
            Role::ServiceProvider => "carelink.session.service_provider",
            Role::Admin => "carelink.session.admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::User => "user",
            Role::ServiceProvider => "service provider",
            Role::Admin => "admin",
        };
        f.write_str(label)
    }
}

/// A role-specific session credential.
///
/// Credentials are created on login or OTP verification and only ever
/// replaced wholesale.
pub trait Credential: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync {
    const ROLE: Role;

    fn token(&self) -> &str;

    /// Identifier of the signed-in account, used as the video-call participant id.
    fn account_id(&self) -> &str;

    fn display_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub token: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub has_completed_details: bool,
}

impl Credential for UserSession {
    const ROLE: Role = Role::User;

    fn token(&self) -> &str {
        &self.token
    }

    fn account_id(&self) -> &str {
        &self.user_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSession {
    pub token: String,
    pub provider_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub has_completed_details: bool,
    #[serde(default, alias = "is_approved")]
    pub is_approved: bool,
}

impl Credential for ProviderSession {
    const ROLE: Role = Role::ServiceProvider;

    fn token(&self) -> &str {
        &self.token
    }

    fn account_id(&self) -> &str {
        &self.provider_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub token: String,
    pub email: String,
}

impl Credential for AdminSession {
    const ROLE: Role = Role::Admin;

    fn token(&self) -> &str {
        &self.token
    }

    fn account_id(&self) -> &str {
        &self.email
    }

    fn display_name(&self) -> &str {
        "Admin"
    }
}
