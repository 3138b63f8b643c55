use carelink_core::{
    errors::CareResult,
    models::{
        auth::{LoginRequest, RegisterRequest},
        session::{AdminSession, ProviderSession, Role, UserSession},
    },
    otp::OtpCode,
};
use tracing::{info, warn};

use crate::{
    context::AppContext,
    notify::{Notifier, toast_outcome},
};

/// Registration, OTP verification and sign-in/out for every role.
pub struct AuthFlow<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> AuthFlow<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    /// Returns the email the OTP was sent to.
    pub async fn register(&self, role: Role, request: &RegisterRequest) -> CareResult<Option<String>> {
        let result = self.ctx.client.register(role, request).await;
        Ok(toast_outcome(
            self.notifier,
            "Registration",
            "Registered, check your email for the verification code",
            result,
        )
        .map(|registered| registered.email))
    }

    /// A code of the wrong shape is rejected before any request is made.
    pub async fn verify_user_otp(&self, email: &str, code: &str) -> CareResult<Option<UserSession>> {
        let otp = OtpCode::parse(code)?;
        let result = self.ctx.client.verify_user_otp(email, &otp).await;
        let Some(auth) = toast_outcome(self.notifier, "OTP verification", "Email verified", result)
        else {
            return Ok(None);
        };
        let session = UserSession::from(auth);
        self.ctx.sessions.user.save(session.clone())?;
        Ok(Some(session))
    }

    pub async fn verify_provider_otp(
        &self,
        email: &str,
        code: &str,
    ) -> CareResult<Option<ProviderSession>> {
        let otp = OtpCode::parse(code)?;
        let result = self.ctx.client.verify_provider_otp(email, &otp).await;
        let Some(auth) = toast_outcome(self.notifier, "OTP verification", "Email verified", result)
        else {
            return Ok(None);
        };
        let session = ProviderSession::from(auth);
        self.ctx.sessions.provider.save(session.clone())?;
        Ok(Some(session))
    }

    pub async fn resend_otp(&self, role: Role, email: &str) -> CareResult<bool> {
        let result = self.ctx.client.resend_otp(role, email).await;
        Ok(toast_outcome(self.notifier, "Resending OTP", "A new code has been sent", result).is_some())
    }

    pub async fn login_user(&self, email: &str, password: &str) -> CareResult<Option<UserSession>> {
        let result = self.ctx.client.login_user(&credentials(email, password)).await;
        let Some(auth) = toast_outcome(self.notifier, "User login", "Logged in", result) else {
            return Ok(None);
        };
        let session = UserSession::from(auth);
        self.ctx.sessions.user.save(session.clone())?;
        Ok(Some(session))
    }

    pub async fn login_provider(&self, email: &str, password: &str) -> CareResult<Option<ProviderSession>> {
        let result = self.ctx.client.login_provider(&credentials(email, password)).await;
        let Some(auth) = toast_outcome(self.notifier, "Provider login", "Logged in", result) else {
            return Ok(None);
        };
        let session = ProviderSession::from(auth);
        if !session.is_approved {
            info!("Provider {} is awaiting approval", session.provider_id);
        }
        self.ctx.sessions.provider.save(session.clone())?;
        Ok(Some(session))
    }

    pub async fn login_admin(&self, email: &str, password: &str) -> CareResult<Option<AdminSession>> {
        let result = self.ctx.client.login_admin(&credentials(email, password)).await;
        let Some(auth) = toast_outcome(self.notifier, "Admin login", "Logged in", result) else {
            return Ok(None);
        };
        let session = AdminSession::from(auth);
        self.ctx.sessions.admin.save(session.clone())?;
        Ok(Some(session))
    }

    /// Clears the role's stored session. The admin cookie is also revoked
    /// server-side; a failure there is logged and does not keep the admin
    /// signed in locally.
    pub async fn logout(&self, role: Role) -> CareResult<()> {
        match role {
            Role::User => self.ctx.sessions.user.clear()?,
            Role::ServiceProvider => self.ctx.sessions.provider.clear()?,
            Role::Admin => {
                if let Some(session) = self.ctx.sessions.admin.current() {
                    if let Err(err) = self.ctx.client.admin(&session).logout().await {
                        warn!("Server-side admin logout failed, clearing the local session anyway: {}", err);
                    }
                }
                self.ctx.sessions.admin.clear()?;
            }
        }
        self.notifier.success("Logged out");
        Ok(())
    }
}

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    }
}
