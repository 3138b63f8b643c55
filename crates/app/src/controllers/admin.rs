use carelink_core::{
    errors::{CareError, CareResult},
    models::{
        blog::{Blog, BlogRequest},
        category::{Category, CategoryRequest},
        dashboard::AdminDashboard,
        provider::ProviderSummary,
        user::UserSummary,
    },
};

use crate::{
    context::AppContext,
    notify::{Confirmer, Notifier, toast_failure, toast_outcome},
    pagination::{PageNav, PagedList},
    toggle::{ConfirmToggle, ToggleOutcome},
};

/// Admin screens: account moderation, provider approval, categories and
/// blogs.
pub struct AdminController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> AdminController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn users(
        &self,
        list: &mut PagedList<UserSummary>,
        nav: PageNav,
        search: Option<&str>,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move {
                api.users(&query, search).await
            })
            .await)
    }

    pub async fn set_user_blocked(
        &self,
        list: &mut PagedList<UserSummary>,
        user_id: &str,
        blocked: bool,
        confirmer: &dyn Confirmer,
    ) -> CareResult<ToggleOutcome> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(ConfirmToggle::new(confirmer, self.notifier)
            .run(list.items_mut(), user_id, blocked, "user", move || async move {
                api.set_user_blocked(user_id, blocked).await
            })
            .await)
    }

    pub async fn providers(
        &self,
        list: &mut PagedList<ProviderSummary>,
        nav: PageNav,
        search: Option<&str>,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move {
                api.providers(&query, search).await
            })
            .await)
    }

    pub async fn set_provider_blocked(
        &self,
        list: &mut PagedList<ProviderSummary>,
        provider_id: &str,
        blocked: bool,
        confirmer: &dyn Confirmer,
    ) -> CareResult<ToggleOutcome> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(ConfirmToggle::new(confirmer, self.notifier)
            .run(list.items_mut(), provider_id, blocked, "provider", move || async move {
                api.set_provider_blocked(provider_id, blocked).await
            })
            .await)
    }

    /// Approves a provider who has submitted their details. Approval is one
    /// way; there is no endpoint to revoke it.
    pub async fn approve_provider(
        &self,
        list: &mut PagedList<ProviderSummary>,
        provider_id: &str,
        confirmer: &dyn Confirmer,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let provider = list
            .items()
            .iter()
            .find(|provider| provider.id == provider_id)
            .ok_or_else(|| CareError::NotFound(format!("Service provider {provider_id}")))?;
        if provider.is_approved {
            return Err(CareError::Validation(format!("{} is already approved", provider.name)));
        }
        if !provider.has_completed_details {
            return Err(CareError::Validation(format!(
                "{} has not submitted their details yet",
                provider.name
            )));
        }
        if !confirmer.confirm("Are you sure you want to approve this provider?") {
            return Ok(false);
        }
        let result = self.ctx.client.admin(&session).approve_provider(provider_id).await;
        if toast_outcome(self.notifier, "Approving provider", "Provider approved", result).is_none() {
            return Ok(false);
        }
        if let Some(provider) = list
            .items_mut()
            .iter_mut()
            .find(|provider| provider.id == provider_id)
        {
            provider.is_approved = true;
        }
        Ok(true)
    }

    pub async fn categories(&self, list: &mut PagedList<Category>, nav: PageNav) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move {
                api.categories(&query).await
            })
            .await)
    }

    /// Adds a category from a name and a comma separated list of
    /// sub-categories, then reloads the current page.
    pub async fn add_category(
        &self,
        list: &mut PagedList<Category>,
        name: &str,
        tags: &str,
    ) -> CareResult<Option<Category>> {
        let session = self.ctx.sessions.admin.require()?;
        let request = category_request(name, tags)?;
        let result = self.ctx.client.admin(&session).add_category(&request).await;
        let Some(category) = toast_outcome(self.notifier, "Adding category", "Category added", result)
        else {
            return Ok(None);
        };
        self.categories(list, PageNav::Reload).await?;
        Ok(Some(category))
    }

    pub async fn edit_category(
        &self,
        list: &mut PagedList<Category>,
        category_id: &str,
        name: &str,
        tags: &str,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let request = category_request(name, tags)?;
        let result = self
            .ctx
            .client
            .admin(&session)
            .edit_category(category_id, &request)
            .await;
        match toast_outcome(self.notifier, "Editing category", "Category updated", result) {
            Some(category) => {
                list.replace(|existing| existing.id == category_id, category);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn set_category_listed(
        &self,
        list: &mut PagedList<Category>,
        category_id: &str,
        listed: bool,
        confirmer: &dyn Confirmer,
    ) -> CareResult<ToggleOutcome> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(ConfirmToggle::new(confirmer, self.notifier)
            .run(list.items_mut(), category_id, listed, "category", move || async move {
                api.set_category_listed(category_id, listed).await
            })
            .await)
    }

    pub async fn blogs(&self, list: &mut PagedList<Blog>, nav: PageNav) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move { api.blogs(&query).await })
            .await)
    }

    pub async fn add_blog(&self, list: &mut PagedList<Blog>, blog: &BlogRequest) -> CareResult<Option<Blog>> {
        let session = self.ctx.sessions.admin.require()?;
        let result = self.ctx.client.admin(&session).add_blog(blog).await;
        let Some(blog) = toast_outcome(self.notifier, "Adding blog", "Blog published", result) else {
            return Ok(None);
        };
        self.blogs(list, PageNav::Reload).await?;
        Ok(Some(blog))
    }

    pub async fn edit_blog(
        &self,
        list: &mut PagedList<Blog>,
        blog_id: &str,
        blog: &BlogRequest,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let result = self.ctx.client.admin(&session).edit_blog(blog_id, blog).await;
        match toast_outcome(self.notifier, "Editing blog", "Blog updated", result) {
            Some(updated) => {
                list.replace(|existing| existing.id == blog_id, updated);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn set_blog_listed(
        &self,
        list: &mut PagedList<Blog>,
        blog_id: &str,
        listed: bool,
        confirmer: &dyn Confirmer,
    ) -> CareResult<ToggleOutcome> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(ConfirmToggle::new(confirmer, self.notifier)
            .run(list.items_mut(), blog_id, listed, "blog", move || async move {
                api.set_blog_listed(blog_id, listed).await
            })
            .await)
    }

    pub async fn dashboard(&self) -> CareResult<Option<AdminDashboard>> {
        let session = self.ctx.sessions.admin.require()?;
        let result = self.ctx.client.admin(&session).dashboard().await;
        Ok(toast_failure(self.notifier, "Loading dashboard", result))
    }
}

fn category_request(name: &str, tags: &str) -> CareResult<CategoryRequest> {
    let request = CategoryRequest::from_tags(name, tags);
    if request.name.is_empty() {
        return Err(CareError::Validation("Category name is required".to_string()));
    }
    Ok(request)
}
