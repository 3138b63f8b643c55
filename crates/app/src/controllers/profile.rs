use carelink_core::{
    errors::CareResult,
    models::{
        category::Category,
        provider::{ProviderDetailsRequest, ProviderProfile, UpdateProviderProfileRequest},
        user::{UpdateUserProfileRequest, UserProfile},
    },
};

use crate::{
    context::AppContext,
    notify::{Notifier, toast_failure, toast_outcome},
};

pub struct ProfileController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> ProfileController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn user_profile(&self) -> CareResult<Option<UserProfile>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).profile().await;
        Ok(toast_failure(self.notifier, "Loading profile", result))
    }

    /// A changed name is mirrored into the stored session so the header
    /// shows it without signing in again.
    pub async fn update_user_profile(
        &self,
        changes: &UpdateUserProfileRequest,
    ) -> CareResult<Option<UserProfile>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).update_profile(changes).await;
        let Some(profile) = toast_outcome(self.notifier, "Updating profile", "Profile updated", result)
        else {
            return Ok(None);
        };
        if profile.name != session.name {
            let name = profile.name.clone();
            self.ctx.sessions.user.update(|session| session.name = name)?;
        }
        Ok(Some(profile))
    }

    pub async fn provider_profile(&self) -> CareResult<Option<ProviderProfile>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).profile().await;
        Ok(toast_failure(self.notifier, "Loading profile", result))
    }

    pub async fn update_provider_profile(
        &self,
        changes: &UpdateProviderProfileRequest,
    ) -> CareResult<Option<ProviderProfile>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).update_profile(changes).await;
        let Some(profile) = toast_outcome(self.notifier, "Updating profile", "Profile updated", result)
        else {
            return Ok(None);
        };
        if profile.name != session.name {
            let name = profile.name.clone();
            self.ctx.sessions.provider.update(|session| session.name = name)?;
        }
        Ok(Some(profile))
    }

    /// Categories offered in the details form.
    pub async fn provider_categories(&self) -> CareResult<Option<Vec<Category>>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).categories().await;
        Ok(toast_failure(self.notifier, "Loading categories", result))
    }

    /// Sends the professional details. Once accepted the stored session
    /// records that details are complete; approval stays with the admin.
    pub async fn submit_provider_details(
        &self,
        details: &ProviderDetailsRequest,
    ) -> CareResult<Option<ProviderProfile>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).submit_details(details).await;
        let Some(profile) = toast_outcome(
            self.notifier,
            "Submitting details",
            "Details submitted, waiting for admin approval",
            result,
        ) else {
            return Ok(None);
        };
        self.ctx
            .sessions
            .provider
            .update(|session| session.has_completed_details = true)?;
        Ok(Some(profile))
    }
}
