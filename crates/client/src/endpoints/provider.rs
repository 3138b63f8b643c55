use carelink_core::{
    envelope::{Ack, Paginated},
    errors::CareResult,
    models::{
        booking::Booking,
        category::Category,
        dashboard::ProviderDashboard,
        provider::{ProviderDetailsRequest, ProviderProfile, UpdateProviderProfileRequest},
        review::Review,
        session::Role,
        slot::{CreateSlotRequest, SlotDocument},
        video::CallRoom,
    },
    pagination::PageQuery,
};
use reqwest::Method;

use crate::{ApiClient, auth::Auth};

/// Endpoints available to a signed-in service provider (bearer token).
#[derive(Debug, Clone, Copy)]
pub struct ProviderApi<'a> {
    client: &'a ApiClient,
    auth: Auth<'a>,
}

impl<'a> ProviderApi<'a> {
    pub(crate) fn new(client: &'a ApiClient, token: &'a str) -> Self {
        Self {
            client,
            auth: Auth::new(Role::ServiceProvider, token),
        }
    }

    pub async fn profile(&self) -> CareResult<ProviderProfile> {
        let request = self.client.request(Method::GET, &["sp", "profile"], Some(self.auth))?;
        self.client.data(request).await
    }

    pub async fn update_profile(
        &self,
        changes: &UpdateProviderProfileRequest,
    ) -> CareResult<ProviderProfile> {
        let request = self
            .client
            .request(Method::PUT, &["sp", "profile"], Some(self.auth))?
            .json(changes);
        self.client.data(request).await
    }

    /// Submits the professional details the admin reviews before approval.
    pub async fn submit_details(&self, details: &ProviderDetailsRequest) -> CareResult<ProviderProfile> {
        let request = self
            .client
            .request(Method::POST, &["sp", "profile", "details"], Some(self.auth))?
            .json(details);
        self.client.data(request).await
    }

    pub async fn slots(&self) -> CareResult<Vec<SlotDocument>> {
        let request = self.client.request(Method::GET, &["sp", "slots"], Some(self.auth))?;
        self.client.data(request).await
    }

    /// Adds a schedule entry; the server files it under the slot document
    /// for `slot.date`, creating that document if needed.
    pub async fn create_slot(&self, slot: &CreateSlotRequest) -> CareResult<SlotDocument> {
        let request = self
            .client
            .request(Method::POST, &["sp", "slots"], Some(self.auth))?
            .json(slot);
        self.client.data(request).await
    }

    pub async fn delete_schedule(&self, slot_id: &str, schedule_id: &str) -> CareResult<Ack> {
        let request = self.client.request(
            Method::DELETE,
            &["sp", "slots", slot_id, "schedules", schedule_id],
            Some(self.auth),
        )?;
        self.client.ack(request).await
    }

    pub async fn bookings(&self, page: &PageQuery) -> CareResult<Paginated<Booking>> {
        let request = self
            .client
            .request(Method::GET, &["sp", "bookings"], Some(self.auth))?
            .query(&page.as_pairs());
        self.client.data(request).await
    }

    pub async fn complete_booking(&self, booking_id: &str) -> CareResult<Booking> {
        let request = self.client.request(
            Method::PATCH,
            &["sp", "bookings", booking_id, "complete"],
            Some(self.auth),
        )?;
        self.client.data(request).await
    }

    pub async fn call_room(&self, booking_id: &str) -> CareResult<CallRoom> {
        let request = self.client.request(
            Method::GET,
            &["sp", "bookings", booking_id, "call"],
            Some(self.auth),
        )?;
        self.client.data(request).await
    }

    pub async fn reviews(&self) -> CareResult<Vec<Review>> {
        let request = self.client.request(Method::GET, &["sp", "reviews"], Some(self.auth))?;
        self.client.records(request).await
    }

    pub async fn dashboard(&self) -> CareResult<ProviderDashboard> {
        let request = self.client.request(Method::GET, &["sp", "dashboard"], Some(self.auth))?;
        self.client.data(request).await
    }

    pub async fn categories(&self) -> CareResult<Vec<Category>> {
        let request = self.client.request(Method::GET, &["sp", "categories"], Some(self.auth))?;
        self.client.data(request).await
    }
}
