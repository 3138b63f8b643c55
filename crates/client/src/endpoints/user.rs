use carelink_core::{
    envelope::Paginated,
    errors::CareResult,
    models::{
        blog::Blog,
        booking::{Booking, CancelBookingRequest, CheckoutRequest, CheckoutResponse},
        category::Category,
        complaint::{Complaint, CreateComplaintRequest},
        provider::{ProviderProfile, ProviderSummary},
        review::{CreateReviewRequest, Review},
        session::Role,
        slot::SlotDocument,
        user::{UpdateUserProfileRequest, UserProfile},
        video::CallRoom,
    },
    pagination::PageQuery,
};
use reqwest::Method;

use crate::{ApiClient, auth::Auth};

/// Endpoints available to a signed-in user (bearer token).
#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a ApiClient,
    auth: Auth<'a>,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a ApiClient, token: &'a str) -> Self {
        Self {
            client,
            auth: Auth::new(Role::User, token),
        }
    }

    pub async fn profile(&self) -> CareResult<UserProfile> {
        let request = self.client.request(Method::GET, &["user", "profile"], Some(self.auth))?;
        self.client.data(request).await
    }

    pub async fn update_profile(&self, changes: &UpdateUserProfileRequest) -> CareResult<UserProfile> {
        let request = self
            .client
            .request(Method::PUT, &["user", "profile"], Some(self.auth))?
            .json(changes);
        self.client.data(request).await
    }

    /// Approved, unblocked providers, optionally filtered by a search term.
    pub async fn providers(
        &self,
        page: &PageQuery,
        search: Option<&str>,
    ) -> CareResult<Paginated<ProviderSummary>> {
        let mut request = self
            .client
            .request(Method::GET, &["user", "service-providers"], Some(self.auth))?
            .query(&page.as_pairs());
        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            request = request.query(&[("search", term)]);
        }
        self.client.data(request).await
    }

    pub async fn provider(&self, provider_id: &str) -> CareResult<ProviderProfile> {
        let request = self.client.request(
            Method::GET,
            &["user", "service-providers", provider_id],
            Some(self.auth),
        )?;
        self.client.data(request).await
    }

    pub async fn provider_slots(&self, provider_id: &str) -> CareResult<Vec<SlotDocument>> {
        let request = self.client.request(
            Method::GET,
            &["user", "service-providers", provider_id, "slots"],
            Some(self.auth),
        )?;
        self.client.data(request).await
    }

    pub async fn provider_reviews(&self, provider_id: &str) -> CareResult<Vec<Review>> {
        let request = self.client.request(
            Method::GET,
            &["user", "service-providers", provider_id, "reviews"],
            Some(self.auth),
        )?;
        self.client.records(request).await
    }

    /// Reserves the schedule entry and returns the payment page to redirect to.
    pub async fn checkout(&self, checkout: &CheckoutRequest) -> CareResult<CheckoutResponse> {
        let request = self
            .client
            .request(Method::POST, &["user", "bookings", "checkout"], Some(self.auth))?
            .json(checkout);
        self.client.data(request).await
    }

    pub async fn bookings(&self, page: &PageQuery) -> CareResult<Paginated<Booking>> {
        let request = self
            .client
            .request(Method::GET, &["user", "bookings"], Some(self.auth))?
            .query(&page.as_pairs());
        self.client.data(request).await
    }

    pub async fn booking(&self, booking_id: &str) -> CareResult<Booking> {
        let request = self
            .client
            .request(Method::GET, &["user", "bookings", booking_id], Some(self.auth))?;
        self.client.data(request).await
    }

    /// The server cancels the booking and starts the refund; the returned
    /// booking carries the resulting status.
    pub async fn cancel_booking(&self, booking_id: &str, reason: &str) -> CareResult<Booking> {
        let body = CancelBookingRequest {
            reason: reason.to_string(),
        };
        let request = self
            .client
            .request(
                Method::PATCH,
                &["user", "bookings", booking_id, "cancel"],
                Some(self.auth),
            )?
            .json(&body);
        self.client.data(request).await
    }

    pub async fn call_room(&self, booking_id: &str) -> CareResult<CallRoom> {
        let request = self.client.request(
            Method::GET,
            &["user", "bookings", booking_id, "call"],
            Some(self.auth),
        )?;
        self.client.data(request).await
    }

    pub async fn post_review(&self, review: &CreateReviewRequest) -> CareResult<Review> {
        let request = self
            .client
            .request(Method::POST, &["user", "reviews"], Some(self.auth))?
            .json(review);
        self.client.data(request).await
    }

    pub async fn file_complaint(&self, complaint: &CreateComplaintRequest) -> CareResult<Complaint> {
        let request = self
            .client
            .request(Method::POST, &["user", "complaints"], Some(self.auth))?
            .json(complaint);
        self.client.data(request).await
    }

    pub async fn complaints(&self) -> CareResult<Vec<Complaint>> {
        let request = self
            .client
            .request(Method::GET, &["user", "complaints"], Some(self.auth))?;
        self.client.data(request).await
    }

    /// Listed categories only.
    pub async fn categories(&self) -> CareResult<Vec<Category>> {
        let request = self
            .client
            .request(Method::GET, &["user", "categories"], Some(self.auth))?;
        self.client.data(request).await
    }

    pub async fn blogs(&self, page: &PageQuery) -> CareResult<Paginated<Blog>> {
        let request = self
            .client
            .request(Method::GET, &["user", "blogs"], Some(self.auth))?
            .query(&page.as_pairs());
        self.client.data(request).await
    }
}
