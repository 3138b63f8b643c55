use carelink_core::{errors::CareResult, models::dashboard::ProviderDashboard};

use crate::{
    context::AppContext,
    notify::{Notifier, toast_failure},
};

pub struct DashboardController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> DashboardController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn provider(&self) -> CareResult<Option<ProviderDashboard>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).dashboard().await;
        Ok(toast_failure(self.notifier, "Loading dashboard", result))
    }
}
