//! Endpoint groups. Unauthenticated calls live on [`ApiClient`] itself
//! ([`public`]); everything else goes through a scoped API borrowed from a
//! role's session.

use carelink_core::models::session::{AdminSession, ProviderSession, UserSession};

use crate::ApiClient;

pub mod admin;
pub mod provider;
pub mod public;
pub mod user;

impl ApiClient {
    pub fn user<'a>(&'a self, session: &'a UserSession) -> user::UserApi<'a> {
        user::UserApi::new(self, &session.token)
    }

    pub fn provider<'a>(&'a self, session: &'a ProviderSession) -> provider::ProviderApi<'a> {
        provider::ProviderApi::new(self, &session.token)
    }

    pub fn admin<'a>(&'a self, session: &'a AdminSession) -> admin::AdminApi<'a> {
        admin::AdminApi::new(self, &session.token)
    }
}
