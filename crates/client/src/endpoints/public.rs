//! Registration, OTP and login. These calls carry no credentials.

use carelink_core::{
    envelope::Ack,
    errors::{CareError, CareResult},
    models::{
        auth::{
            AdminAuthResponse, LoginRequest, ProviderAuthResponse, RegisterRequest,
            RegisterResponse, ResendOtpRequest, UserAuthResponse, VerifyOtpRequest,
        },
        session::Role,
    },
    otp::OtpCode,
};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::ApiClient;

/// Path prefix of the self-service account endpoints for `role`.
fn account_prefix(role: Role) -> CareResult<&'static str> {
    match role {
        Role::User => Ok("user"),
        Role::ServiceProvider => Ok("sp"),
        Role::Admin => Err(CareError::Validation(
            "Admin accounts cannot register or verify through OTP".to_string(),
        )),
    }
}

impl ApiClient {
    /// Starts registration; the server emails an OTP to `request.email`.
    pub async fn register(&self, role: Role, request: &RegisterRequest) -> CareResult<RegisterResponse> {
        let prefix = account_prefix(role)?;
        let request = self.request(Method::POST, &[prefix, "register"], None)?.json(request);
        self.data(request).await
    }

    pub async fn resend_otp(&self, role: Role, email: &str) -> CareResult<Ack> {
        let prefix = account_prefix(role)?;
        let body = ResendOtpRequest {
            email: email.to_string(),
        };
        let request = self.request(Method::POST, &[prefix, "resend-otp"], None)?.json(&body);
        self.ack(request).await
    }

    /// Takes an [`OtpCode`], so a code that failed the local length check
    /// can never reach the network.
    pub async fn verify_user_otp(&self, email: &str, otp: &OtpCode) -> CareResult<UserAuthResponse> {
        self.verify_otp(Role::User, email, otp).await
    }

    pub async fn verify_provider_otp(
        &self,
        email: &str,
        otp: &OtpCode,
    ) -> CareResult<ProviderAuthResponse> {
        self.verify_otp(Role::ServiceProvider, email, otp).await
    }

    pub async fn login_user(&self, credentials: &LoginRequest) -> CareResult<UserAuthResponse> {
        let request = self.request(Method::POST, &["user", "login"], None)?.json(credentials);
        self.data(request).await
    }

    pub async fn login_provider(&self, credentials: &LoginRequest) -> CareResult<ProviderAuthResponse> {
        let request = self.request(Method::POST, &["sp", "login"], None)?.json(credentials);
        self.data(request).await
    }

    pub async fn login_admin(&self, credentials: &LoginRequest) -> CareResult<AdminAuthResponse> {
        let request = self
            .request(Method::POST, &["api", "admin", "login"], None)?
            .json(credentials);
        self.data(request).await
    }

    async fn verify_otp<T: DeserializeOwned>(
        &self,
        role: Role,
        email: &str,
        otp: &OtpCode,
    ) -> CareResult<T> {
        let prefix = account_prefix(role)?;
        let body = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.as_str().to_string(),
        };
        let request = self.request(Method::POST, &[prefix, "verify-otp"], None)?.json(&body);
        self.data(request).await
    }
}
