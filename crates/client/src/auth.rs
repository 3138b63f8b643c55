use carelink_core::models::session::Role;
use reqwest::{RequestBuilder, header::COOKIE};

/// Cookie the admin API reads its session from.
pub const ADMIN_COOKIE: &str = "adminToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Bearer,
    Cookie(&'static str),
}

impl AuthScheme {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::User | Role::ServiceProvider => AuthScheme::Bearer,
            Role::Admin => AuthScheme::Cookie(ADMIN_COOKIE),
        }
    }
}

/// A token together with the way it has to be presented.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    pub scheme: AuthScheme,
    pub token: &'a str,
}

impl<'a> Auth<'a> {
    pub fn new(role: Role, token: &'a str) -> Self {
        Self {
            scheme: AuthScheme::for_role(role),
            token,
        }
    }

    pub(crate) fn apply(self, request: RequestBuilder) -> RequestBuilder {
        match self.scheme {
            AuthScheme::Bearer => request.bearer_auth(self.token),
            AuthScheme::Cookie(name) => request.header(COOKIE, format!("{name}={}", self.token)),
        }
    }
}
