use chrono::Utc;
use carelink_core::{
    errors::{CareError, CareResult},
    models::{
        booking::{Booking, BookingStatus},
        session::Credential,
        video::{CallHandoff, CallRoom},
    },
};
use tracing::info;

use crate::{
    context::AppContext,
    notify::{Notifier, toast_failure},
};

/// Prepares the hand-off to the external video SDK. Joining the room is
/// the SDK's job.
pub struct VideoController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> VideoController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn user_call(&self, booking: &Booking) -> CareResult<Option<CallHandoff>> {
        let session = self.ctx.sessions.user.require()?;
        ensure_joinable(booking)?;
        let result = self.ctx.client.user(&session).call_room(&booking.id).await;
        Ok(toast_failure(self.notifier, "Joining call", result)
            .map(|room| self.handoff(&session, room)))
    }

    pub async fn provider_call(&self, booking: &Booking) -> CareResult<Option<CallHandoff>> {
        let session = self.ctx.sessions.provider.require()?;
        ensure_joinable(booking)?;
        let result = self.ctx.client.provider(&session).call_room(&booking.id).await;
        Ok(toast_failure(self.notifier, "Joining call", result)
            .map(|room| self.handoff(&session, room)))
    }

    fn handoff<C: Credential>(&self, session: &C, room: CallRoom) -> CallHandoff {
        info!("Handing off booking {} to room {}", room.booking_id, room.room_id);
        CallHandoff {
            app_id: self.ctx.config.video_app_id.clone(),
            room_id: room.room_id,
            participant_id: session.account_id().to_string(),
            participant_name: session.display_name().to_string(),
        }
    }
}

fn ensure_joinable(booking: &Booking) -> CareResult<()> {
    let status = booking.display_status(Utc::now());
    if status == BookingStatus::Scheduled {
        Ok(())
    } else {
        Err(CareError::Validation(format!(
            "The call is only available for scheduled bookings, this one is {status}"
        )))
    }
}
