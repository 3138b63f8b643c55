use carelink_app::{
    controllers::{
        BookingsController, BrowseController, ComplaintsController, ProfileController,
        ReviewsController, SlotsController, VideoController, bookings::booking_rows,
    },
    pagination::{PageNav, PagedList},
    search::Debouncer,
};
use carelink_core::models::user::UpdateUserProfileRequest;
use chrono::Utc;
use eyre::{Result, eyre};

use super::{Shell, done, loaded, page_list};
use crate::{cli::UserAction, render};

pub async fn run(action: UserAction, shell: &Shell<'_>) -> Result<()> {
    let (ctx, notifier) = (shell.ctx, shell.notifier);
    match action {
        UserAction::Profile => {
            let profile = loaded(ProfileController::new(ctx, notifier).user_profile().await?)?;
            render::user_profile(&profile);
        }
        UserAction::UpdateProfile(args) => {
            let changes = UpdateUserProfileRequest {
                name: args.name,
                phone: args.phone,
                gender: args.gender,
                date_of_birth: args.date_of_birth,
                address: args.address,
            };
            let profile =
                loaded(ProfileController::new(ctx, notifier).update_user_profile(&changes).await?)?;
            render::user_profile(&profile);
        }
        UserAction::Providers { page, search } => {
            let mut list = page_list(page);
            let browse = BrowseController::new(ctx, notifier);
            done(browse.providers(&mut list, PageNav::Reload, search.as_deref()).await?)?;
            render::providers(&list);
        }
        UserAction::Search { inputs } => {
            let debouncer = Debouncer::new(ctx.config.search_debounce);
            let browse = BrowseController::new(ctx, notifier);
            let mut list = PagedList::default();
            // Every input but the last is superseded before its window ends.
            let latest = inputs
                .into_iter()
                .map(|input| debouncer.submit(input))
                .last()
                .ok_or_else(|| eyre!("Nothing to search for"))?;
            done(browse.search_providers(&mut list, latest).await?)?;
            render::providers(&list);
        }
        UserAction::Provider { id } => {
            let profile = loaded(BrowseController::new(ctx, notifier).provider(&id).await?)?;
            render::provider_profile(&profile);
        }
        UserAction::Slots { provider_id } => {
            let rows = loaded(SlotsController::new(ctx, notifier).provider_slots(&provider_id).await?)?;
            render::schedule(&rows);
        }
        UserAction::Reviews { provider_id } => {
            let summary =
                loaded(ReviewsController::new(ctx, notifier).provider_reviews(&provider_id).await?)?;
            render::reviews(&summary);
        }
        UserAction::Book {
            provider_id,
            schedule_id,
        } => {
            let rows = loaded(SlotsController::new(ctx, notifier).provider_slots(&provider_id).await?)?;
            let row = rows
                .iter()
                .find(|row| row.entry.id == schedule_id)
                .ok_or_else(|| eyre!("Schedule entry {schedule_id} not found"))?;
            let payment_url = loaded(BookingsController::new(ctx, notifier).checkout(row).await?)?;
            println!("Complete the payment at {payment_url}");
        }
        UserAction::Bookings { page } => {
            let mut list = page_list(page);
            done(BookingsController::new(ctx, notifier).user_bookings(&mut list, PageNav::Reload).await?)?;
            render::bookings(&booking_rows(list.items(), Utc::now()), &list);
        }
        UserAction::Booking { id } => {
            let row = loaded(BookingsController::new(ctx, notifier).user_booking(&id).await?)?;
            render::booking(&row);
        }
        UserAction::Cancel { id, reason, page } => {
            let bookings = BookingsController::new(ctx, notifier);
            let mut list = page_list(page);
            done(bookings.user_bookings(&mut list, PageNav::Reload).await?)?;
            bookings.cancel(&mut list, &id, &reason, shell.confirmer).await?;
        }
        UserAction::Call { id } => {
            let row = loaded(BookingsController::new(ctx, notifier).user_booking(&id).await?)?;
            let handoff = loaded(VideoController::new(ctx, notifier).user_call(&row.booking).await?)?;
            render::handoff(&handoff);
        }
        UserAction::Review {
            booking_id,
            rating,
            comment,
        } => {
            let row = loaded(BookingsController::new(ctx, notifier).user_booking(&booking_id).await?)?;
            loaded(
                ReviewsController::new(ctx, notifier)
                    .post_review(&row.booking, rating, &comment)
                    .await?,
            )?;
        }
        UserAction::Complain {
            booking_id,
            subject,
            description,
        } => {
            loaded(
                ComplaintsController::new(ctx, notifier)
                    .file(&booking_id, &subject, &description)
                    .await?,
            )?;
        }
        UserAction::Complaints => {
            let complaints = loaded(ComplaintsController::new(ctx, notifier).own_complaints().await?)?;
            render::complaints(&complaints);
        }
        UserAction::Categories => {
            let categories = loaded(BrowseController::new(ctx, notifier).categories().await?)?;
            render::categories(&categories);
        }
        UserAction::Blogs { page } => {
            let mut list = page_list(page);
            done(BrowseController::new(ctx, notifier).blogs(&mut list, PageNav::Reload).await?)?;
            render::blogs(&list);
        }
    }
    Ok(())
}
