use carelink_core::{
    errors::{CareError, CareResult},
    models::complaint::{Complaint, ComplaintStatus, CreateComplaintRequest},
};

use crate::{
    context::AppContext,
    notify::{Notifier, toast_failure, toast_outcome},
    pagination::{PageNav, PagedList},
};

pub struct ComplaintsController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> ComplaintsController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    pub async fn file(
        &self,
        booking_id: &str,
        subject: &str,
        description: &str,
    ) -> CareResult<Option<Complaint>> {
        let session = self.ctx.sessions.user.require()?;
        let complaint = CreateComplaintRequest {
            booking_id: booking_id.to_string(),
            subject: subject.trim().to_string(),
            description: description.trim().to_string(),
        };
        let result = self.ctx.client.user(&session).file_complaint(&complaint).await;
        Ok(toast_outcome(
            self.notifier,
            "Filing complaint",
            "Complaint submitted",
            result,
        ))
    }

    pub async fn own_complaints(&self) -> CareResult<Option<Vec<Complaint>>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).complaints().await;
        Ok(toast_failure(self.notifier, "Loading complaints", result))
    }

    pub async fn admin_complaints(
        &self,
        list: &mut PagedList<Complaint>,
        nav: PageNav,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let api = self.ctx.client.admin(&session);
        Ok(list
            .navigate(nav, self.notifier, move |query| async move {
                api.complaints(&query).await
            })
            .await)
    }

    pub async fn resolve(
        &self,
        list: &mut PagedList<Complaint>,
        complaint_id: &str,
        response: &str,
    ) -> CareResult<bool> {
        let session = self.ctx.sessions.admin.require()?;
        let pending = list
            .items()
            .iter()
            .find(|complaint| complaint.id == complaint_id)
            .map(|complaint| complaint.status == ComplaintStatus::Pending)
            .ok_or_else(|| CareError::NotFound(format!("Complaint {complaint_id}")))?;
        if !pending {
            return Err(CareError::Validation(
                "This complaint has already been resolved".to_string(),
            ));
        }
        let result = self
            .ctx
            .client
            .admin(&session)
            .resolve_complaint(complaint_id, response.trim())
            .await;
        match toast_outcome(self.notifier, "Resolving complaint", "Complaint resolved", result) {
            Some(resolved) => {
                list.replace(|complaint| complaint.id == complaint_id, resolved);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
