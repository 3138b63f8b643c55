use chrono::{DateTime, NaiveDate, Utc};
use carelink_core::{
    errors::{CareError, CareResult},
    models::slot::{CreateSlotRequest, ScheduleEntry, SlotDisplayStatus, SlotDocument},
};

use crate::{
    context::AppContext,
    notify::{Confirmer, Notifier, toast_failure, toast_outcome},
};

/// One schedule entry as listed, with its status projected at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub slot_id: String,
    pub date: NaiveDate,
    pub entry: ScheduleEntry,
    pub status: SlotDisplayStatus,
}

impl ScheduleRow {
    pub fn is_bookable(&self) -> bool {
        self.status == SlotDisplayStatus::Open
    }
}

/// Flattens slot documents into rows ordered by start time.
pub fn schedule_rows(slots: &[SlotDocument], now: DateTime<Utc>) -> Vec<ScheduleRow> {
    let mut rows: Vec<ScheduleRow> = slots
        .iter()
        .flat_map(|slot| {
            slot.schedule.iter().map(move |entry| ScheduleRow {
                slot_id: slot.id.clone(),
                date: slot.date,
                entry: entry.clone(),
                status: entry.display_status(now),
            })
        })
        .collect();
    rows.sort_by_key(|row| row.entry.from_time);
    rows
}

pub struct SlotsController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> SlotsController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    /// Only approved providers may publish slots.
    pub async fn create_slot(&self, slot: &CreateSlotRequest) -> CareResult<Option<SlotDocument>> {
        let session = self.ctx.sessions.provider.require()?;
        if !session.is_approved {
            return Err(CareError::Authorization(
                "Your account is awaiting admin approval".to_string(),
            ));
        }
        let result = self.ctx.client.provider(&session).create_slot(slot).await;
        Ok(toast_outcome(self.notifier, "Creating slot", "Slot added", result))
    }

    pub async fn own_slots(&self) -> CareResult<Option<Vec<ScheduleRow>>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).slots().await;
        Ok(toast_failure(self.notifier, "Loading slots", result)
            .map(|slots| schedule_rows(&slots, Utc::now())))
    }

    /// Removes an open entry after confirmation, dropping it from `rows`
    /// once the server agreed. Returns whether it was removed.
    pub async fn delete_entry(
        &self,
        rows: &mut Vec<ScheduleRow>,
        schedule_id: &str,
        confirmer: &dyn Confirmer,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.provider.require()?;
        let row = rows
            .iter()
            .find(|row| row.entry.id == schedule_id)
            .ok_or_else(|| CareError::NotFound(format!("Schedule entry {schedule_id}")))?;
        if row.status != SlotDisplayStatus::Open {
            return Err(CareError::Validation(format!(
                "Only open entries can be deleted, this one is {}",
                row.status
            )));
        }
        if !confirmer.confirm("Are you sure you want to delete this slot?") {
            return Ok(false);
        }
        let result = self
            .ctx
            .client
            .provider(&session)
            .delete_schedule(&row.slot_id, schedule_id)
            .await;
        if toast_outcome(self.notifier, "Deleting slot", "Slot deleted", result).is_none() {
            return Ok(false);
        }
        rows.retain(|row| row.entry.id != schedule_id);
        Ok(true)
    }

    /// A provider's slots as a user sees them; booked and expired entries
    /// are listed but not bookable.
    pub async fn provider_slots(&self, provider_id: &str) -> CareResult<Option<Vec<ScheduleRow>>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).provider_slots(provider_id).await;
        Ok(toast_failure(self.notifier, "Loading slots", result)
            .map(|slots| schedule_rows(&slots, Utc::now())))
    }
}
