use carelink_core::{
    errors::{CareError, CareResult},
    models::{
        booking::{Booking, BookingStatus},
        review::{CreateReviewRequest, Rating, Review, average_rating},
    },
};

use crate::{
    context::AppContext,
    notify::{Notifier, toast_failure, toast_outcome},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub reviews: Vec<Review>,
    pub average: Option<f32>,
}

impl From<Vec<Review>> for ReviewSummary {
    fn from(reviews: Vec<Review>) -> Self {
        let average = average_rating(&reviews);
        Self { reviews, average }
    }
}

pub struct ReviewsController<'a> {
    ctx: &'a AppContext,
    notifier: &'a dyn Notifier,
}

impl<'a> ReviewsController<'a> {
    pub fn new(ctx: &'a AppContext, notifier: &'a dyn Notifier) -> Self {
        Self { ctx, notifier }
    }

    /// Reviews are accepted for completed bookings only, with a rating
    /// from 1 to 5.
    pub async fn post_review(
        &self,
        booking: &Booking,
        rating: u8,
        comment: &str,
    ) -> CareResult<Option<Review>> {
        let session = self.ctx.sessions.user.require()?;
        let rating = Rating::try_from(rating)?;
        if booking.status != BookingStatus::Completed {
            return Err(CareError::Validation(
                "Only completed consultations can be reviewed".to_string(),
            ));
        }
        let review = CreateReviewRequest {
            booking_id: booking.id.clone(),
            provider_id: booking.provider_id.clone(),
            rating,
            comment: comment.trim().to_string(),
        };
        let result = self.ctx.client.user(&session).post_review(&review).await;
        Ok(toast_outcome(self.notifier, "Posting review", "Thanks for your review", result))
    }

    pub async fn provider_reviews(&self, provider_id: &str) -> CareResult<Option<ReviewSummary>> {
        let session = self.ctx.sessions.user.require()?;
        let result = self.ctx.client.user(&session).provider_reviews(provider_id).await;
        Ok(toast_failure(self.notifier, "Loading reviews", result).map(ReviewSummary::from))
    }

    pub async fn own_reviews(&self) -> CareResult<Option<ReviewSummary>> {
        let session = self.ctx.sessions.provider.require()?;
        let result = self.ctx.client.provider(&session).reviews().await;
        Ok(toast_failure(self.notifier, "Loading reviews", result).map(ReviewSummary::from))
    }
}
