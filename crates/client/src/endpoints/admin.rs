use carelink_core::{
    envelope::{Ack, Paginated},
    errors::CareResult,
    models::{
        blog::{Blog, BlogRequest},
        booking::Booking,
        category::{Category, CategoryRequest},
        complaint::{Complaint, ResolveComplaintRequest},
        dashboard::AdminDashboard,
        provider::ProviderSummary,
        session::Role,
        user::UserSummary,
    },
    pagination::PageQuery,
    toggle::ToggleKind,
};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{ApiClient, auth::Auth};

/// Endpoints under `/api/admin`, authenticated by the admin cookie.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
    auth: Auth<'a>,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient, token: &'a str) -> Self {
        Self {
            client,
            auth: Auth::new(Role::Admin, token),
        }
    }

    pub async fn logout(&self) -> CareResult<Ack> {
        let request = self
            .client
            .request(Method::POST, &["api", "admin", "logout"], Some(self.auth))?;
        self.client.ack(request).await
    }

    pub async fn users(
        &self,
        page: &PageQuery,
        search: Option<&str>,
    ) -> CareResult<Paginated<UserSummary>> {
        self.list("users", page, search).await
    }

    pub async fn set_user_blocked(&self, user_id: &str, blocked: bool) -> CareResult<Ack> {
        self.toggle("users", user_id, ToggleKind::Block, blocked).await
    }

    pub async fn providers(
        &self,
        page: &PageQuery,
        search: Option<&str>,
    ) -> CareResult<Paginated<ProviderSummary>> {
        self.list("service-providers", page, search).await
    }

    pub async fn set_provider_blocked(&self, provider_id: &str, blocked: bool) -> CareResult<Ack> {
        self.toggle("service-providers", provider_id, ToggleKind::Block, blocked)
            .await
    }

    pub async fn approve_provider(&self, provider_id: &str) -> CareResult<Ack> {
        let request = self.client.request(
            Method::PATCH,
            &["api", "admin", "service-providers", provider_id, "approve"],
            Some(self.auth),
        )?;
        self.client.ack(request).await
    }

    pub async fn categories(&self, page: &PageQuery) -> CareResult<Paginated<Category>> {
        self.list("categories", page, None).await
    }

    pub async fn add_category(&self, category: &CategoryRequest) -> CareResult<Category> {
        let request = self
            .client
            .request(Method::POST, &["api", "admin", "categories"], Some(self.auth))?
            .json(category);
        self.client.data(request).await
    }

    pub async fn edit_category(&self, category_id: &str, category: &CategoryRequest) -> CareResult<Category> {
        let request = self
            .client
            .request(
                Method::PUT,
                &["api", "admin", "categories", category_id],
                Some(self.auth),
            )?
            .json(category);
        self.client.data(request).await
    }

    pub async fn set_category_listed(&self, category_id: &str, listed: bool) -> CareResult<Ack> {
        self.toggle("categories", category_id, ToggleKind::List, listed).await
    }

    pub async fn blogs(&self, page: &PageQuery) -> CareResult<Paginated<Blog>> {
        self.list("blogs", page, None).await
    }

    pub async fn add_blog(&self, blog: &BlogRequest) -> CareResult<Blog> {
        let request = self
            .client
            .request(Method::POST, &["api", "admin", "blogs"], Some(self.auth))?
            .json(blog);
        self.client.data(request).await
    }

    pub async fn edit_blog(&self, blog_id: &str, blog: &BlogRequest) -> CareResult<Blog> {
        let request = self
            .client
            .request(Method::PUT, &["api", "admin", "blogs", blog_id], Some(self.auth))?
            .json(blog);
        self.client.data(request).await
    }

    pub async fn set_blog_listed(&self, blog_id: &str, listed: bool) -> CareResult<Ack> {
        self.toggle("blogs", blog_id, ToggleKind::List, listed).await
    }

    pub async fn bookings(&self, page: &PageQuery) -> CareResult<Paginated<Booking>> {
        self.list("bookings", page, None).await
    }

    pub async fn refund_booking(&self, booking_id: &str) -> CareResult<Booking> {
        let request = self.client.request(
            Method::PATCH,
            &["api", "admin", "bookings", booking_id, "refund"],
            Some(self.auth),
        )?;
        self.client.data(request).await
    }

    pub async fn dashboard(&self) -> CareResult<AdminDashboard> {
        let request = self
            .client
            .request(Method::GET, &["api", "admin", "dashboard"], Some(self.auth))?;
        self.client.data(request).await
    }

    pub async fn complaints(&self, page: &PageQuery) -> CareResult<Paginated<Complaint>> {
        self.list("complaints", page, None).await
    }

    pub async fn resolve_complaint(&self, complaint_id: &str, response: &str) -> CareResult<Complaint> {
        let body = ResolveComplaintRequest {
            response: response.to_string(),
        };
        let request = self
            .client
            .request(
                Method::PATCH,
                &["api", "admin", "complaints", complaint_id, "resolve"],
                Some(self.auth),
            )?
            .json(&body);
        self.client.data(request).await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        page: &PageQuery,
        search: Option<&str>,
    ) -> CareResult<Paginated<T>> {
        let mut request = self
            .client
            .request(Method::GET, &["api", "admin", collection], Some(self.auth))?
            .query(&page.as_pairs());
        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            request = request.query(&[("search", term)]);
        }
        self.client.data(request).await
    }

    /// `PATCH /api/admin/{collection}/{id}/{action}`, where the action is
    /// the verb for the requested flag value.
    async fn toggle(&self, collection: &str, id: &str, kind: ToggleKind, value: bool) -> CareResult<Ack> {
        let request = self.client.request(
            Method::PATCH,
            &["api", "admin", collection, id, kind.action(value)],
            Some(self.auth),
        )?;
        self.client.ack(request).await
    }
}
