use carelink_core::{
    errors::CareResult,
    models::{
        blog::Blog,
        category::Category,
        provider::{ProviderProfile, ProviderSummary},
    },
};

use crate::{
    context::AppContext,
    notify::{Notifier, toast_failure},
    pagination::{PageNav, PagedList},
    search::PendingQuery,
};

/// What a signed-in user browses: providers, categories and blogs.
pub struct BrowseController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> BrowseController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn providers(
        &self,
        list: &mut PagedList<ProviderSummary>,
        nav: PageNav,
        search: Option<&str>,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.user.require()?;
        let api = self.ctx.client.user(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move {
                api.providers(&query, search).await
            })
            .await)
    }

    /// Runs a debounced provider search from the first page. A superseded
    /// input returns `Ok(false)` without a request.
    pub async fn search_providers(
        &self,
        list: &mut PagedList<ProviderSummary>,
        pending: PendingQuery,
    ) -> CareResult<bool> {
        self.ctx.sessions.user.require()?;
        let Some(term) = pending.settle().await else {
            return Ok(false);
        };
        let search = (!term.is_empty()).then_some(term.as_str());
        self.providers(list, PageNav::Goto(1), search).await
    }

    pub async fn provider(&self, provider_id: &str) -> CareResult<Option<ProviderProfile>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).provider(provider_id).await;
        Ok(toast_failure(self.notifier, "Loading provider", result))
    }

    pub async fn categories(&self) -> CareResult<Option<Vec<Category>>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).categories().await;
        Ok(toast_failure(self.notifier, "Loading categories", result))
    }

    pub async fn blogs(&self, list: &mut PagedList<Blog>, nav: PageNav) -> CareResult<bool> {
        let session = self.ctx.sessions.user.require()?;
        let api = self.ctx.client.user(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move { api.blogs(&query).await })
            .await)
    }
}
