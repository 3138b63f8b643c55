use chrono::{DateTime, Utc};
use carelink_core::{
    errors::{CareError, CareResult},
    models::booking::{Booking, BookingStatus, CheckoutRequest},
};

use crate::{
    context::AppContext,
    controllers::slots::ScheduleRow,
    notify::{Confirmer, Notifier, toast_failure, toast_outcome},
    pagination::{PageNav, PagedList},
};

/// A booking with the status it displays at `now`, and the actions that
/// status allows.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub booking: Booking,
    pub status: BookingStatus,
}

impl BookingRow {
    pub fn at(booking: Booking, now: DateTime<Utc>) -> Self {
        let status = booking.display_status(now);
        Self { booking, status }
    }

    pub fn can_cancel(&self) -> bool {
        self.status == BookingStatus::Scheduled
    }

    pub fn can_join_call(&self) -> bool {
        self.status == BookingStatus::Scheduled
    }

    /// Completion goes by the stored status: the consultation usually ends
    /// after the booked window has passed.
    pub fn can_complete(&self) -> bool {
        self.booking.status == BookingStatus::Scheduled
    }

    pub fn can_refund(&self) -> bool {
        self.booking.status == BookingStatus::Cancelled
    }
}

pub fn booking_rows(bookings: &[Booking], now: DateTime<Utc>) -> Vec<BookingRow> {
    bookings
        .iter()
        .cloned()
        .map(|booking| BookingRow::at(booking, now))
        .collect()
}

pub struct BookingsController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> BookingsController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn user_bookings(&self, list: &mut PagedList<Booking>, nav: PageNav) -> CareResult<bool> {
        let session = self.ctx.sessions.user.require()?;
        let api = self.ctx.client.user(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move { api.bookings(&query).await })
            .await)
    }

    pub async fn user_booking(&self, booking_id: &str) -> CareResult<Option<BookingRow>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).booking(booking_id).await;
        Ok(toast_failure(self.notifier, "Loading booking", result)
            .map(|booking| BookingRow::at(booking, Utc::now())))
    }

    /// Reserves an entry and returns the payment page URL. Settlement
    /// happens on that page, outside this client.
    pub async fn checkout(&self, row: &ScheduleRow) -> CareResult<Option<String>> {
        let session = self.ctx.sessions.user.require()?;
        if !row.is_bookable() {
            return Err(CareError::Validation(format!(
                "This slot can no longer be booked, it is {}",
                row.status
            )));
        }
        let checkout = CheckoutRequest {
            slot_id: row.slot_id.clone(),
            schedule_id: row.entry.id.clone(),
        };
        let result = self.ctx.client.user(&session).checkout(&checkout).await;
        Ok(toast_failure(self.notifier, "Checkout", result).map(|response| response.payment_url))
    }

    /// Cancels a booking that still displays as scheduled. The server starts
    /// the refund; the returned booking replaces the one in `list`.
    pub async fn cancel(
        &self,
        list: &mut PagedList<Booking>,
        booking_id: &str,
        reason: &str,
        confirmer: &dyn Confirmer,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.user.require()?;
        let row = self.row_in(list, booking_id)?;
        if !row.can_cancel() {
            return Err(CareError::Validation(format!(
                "Only scheduled bookings can be cancelled, this one is {}",
                row.status
            )));
        }
        if !confirmer.confirm("Are you sure you want to cancel this booking?") {
            return Ok(false);
        }
        let result = self
            .ctx
            .client
            .user(&session)
            .cancel_booking(booking_id, reason)
            .await;
        Ok(self.settle(list, booking_id, "Cancelling booking", "Booking cancelled", result))
    }

    pub async fn provider_bookings(
        &self,
        list: &mut PagedList<Booking>,
        nav: PageNav,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.provider.require()?;
        let api = self.ctx.client.provider(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move { api.bookings(&query).await })
            .await)
    }

    pub async fn complete(&self, list: &mut PagedList<Booking>, booking_id: &str) -> CareResult<bool> {
        let session = self.ctx.sessions.provider.require()?;
        let row = self.row_in(list, booking_id)?;
        if !row.can_complete() {
            return Err(CareError::Validation(format!(
                "Only scheduled bookings can be completed, this one is {}",
                row.booking.status
            )));
        }
        let result = self.ctx.client.provider(&session).complete_booking(booking_id).await;
        Ok(self.settle(list, booking_id, "Completing booking", "Booking marked as completed", result))
    }

    pub async fn admin_bookings(&self, list: &mut PagedList<Booking>, nav: PageNav) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move { api.bookings(&query).await })
            .await)
    }

    pub async fn refund(
        &self,
        list: &mut PagedList<Booking>,
        booking_id: &str,
        confirmer: &dyn Confirmer,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let row = self.row_in(list, booking_id)?;
        if !row.can_refund() {
            return Err(CareError::Validation(format!(
                "Only cancelled bookings can be refunded, this one is {}",
                row.booking.status
            )));
        }
        if !confirmer.confirm("Are you sure you want to refund this booking?") {
            return Ok(false);
        }
        let result = self.ctx.client.admin(&session).refund_booking(booking_id).await;
        Ok(self.settle(list, booking_id, "Refunding booking", "Booking refunded", result))
    }

    fn row_in(&self, list: &PagedList<Booking>, booking_id: &str) -> CareResult<BookingRow> {
        list.items()
            .iter()
            .find(|booking| booking.id == booking_id)
            .cloned()
            .map(|booking| BookingRow::at(booking, Utc::now()))
            .ok_or_else(|| CareError::NotFound(format!("Booking {booking_id}")))
    }

    fn settle(
        &self,
        list: &mut PagedList<Booking>,
        booking_id: &str,
        action: &str,
        success: &str,
        result: CareResult<Booking>,
    ) -> bool {
        match toast_outcome(self.notifier, action, success, result) {
            Some(updated) => {
                list.replace(|booking| booking.id == booking_id, updated);
                true
            }
            None => false,
        }
    }
}
