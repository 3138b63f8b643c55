use carelink_app::{
    controllers::{
        BookingsController, DashboardController, ProfileController, ReviewsController,
        SlotsController, VideoController, bookings::booking_rows,
    },
    pagination::PageNav,
};
use carelink_core::models::{
    provider::{ProviderDetailsRequest, UpdateProviderProfileRequest},
    slot::CreateSlotRequest,
};
use chrono::{TimeZone, Utc};
use eyre::{Result, ensure, eyre};

use super::{Shell, done, loaded, page_list, split_list};
use crate::{cli::ProviderAction, render};

pub async fn run(action: ProviderAction, shell: &Shell<'_>) -> Result<()> {
    let (ctx, notifier) = (shell.ctx, shell.notifier);
    match action {
        ProviderAction::Profile => {
            let profile = loaded(ProfileController::new(ctx, notifier).provider_profile().await?)?;
            render::provider_profile(&profile);
        }
        ProviderAction::UpdateProfile(args) => {
            let changes = UpdateProviderProfileRequest {
                name: args.name,
                phone: args.phone,
                about: args.about,
                fee: args.fee,
            };
            let profile = loaded(
                ProfileController::new(ctx, notifier)
                    .update_provider_profile(&changes)
                    .await?,
            )?;
            render::provider_profile(&profile);
        }
        ProviderAction::Details {
            specialization,
            qualification,
            experience_years,
            category,
            about,
            fee,
        } => {
            let details = ProviderDetailsRequest {
                specialization: specialization.trim().to_string(),
                qualification: qualification.trim().to_string(),
                experience_years,
                category: category.trim().to_string(),
                about: about.trim().to_string(),
                fee,
            };
            loaded(
                ProfileController::new(ctx, notifier)
                    .submit_provider_details(&details)
                    .await?,
            )?;
        }
        ProviderAction::Categories => {
            let categories =
                loaded(ProfileController::new(ctx, notifier).provider_categories().await?)?;
            render::categories(&categories);
        }
        ProviderAction::Slots => {
            let rows = loaded(SlotsController::new(ctx, notifier).own_slots().await?)?;
            render::schedule(&rows);
        }
        ProviderAction::AddSlot {
            date,
            title,
            price,
            from,
            to,
            services,
        } => {
            ensure!(to > from, "The slot must end after it starts");
            let slot = CreateSlotRequest {
                date,
                title: title.trim().to_string(),
                price,
                from_time: Utc.from_utc_datetime(&date.and_time(from)),
                to_time: Utc.from_utc_datetime(&date.and_time(to)),
                services: split_list(&services),
            };
            loaded(SlotsController::new(ctx, notifier).create_slot(&slot).await?)?;
        }
        ProviderAction::DeleteSlot { schedule_id } => {
            let slots = SlotsController::new(ctx, notifier);
            let mut rows = loaded(slots.own_slots().await?)?;
            slots.delete_entry(&mut rows, &schedule_id, shell.confirmer).await?;
        }
        ProviderAction::Bookings { page } => {
            let mut list = page_list(page);
            done(
                BookingsController::new(ctx, notifier)
                    .provider_bookings(&mut list, PageNav::Reload)
                    .await?,
            )?;
            render::bookings(&booking_rows(list.items(), Utc::now()), &list);
        }
        ProviderAction::Complete { id, page } => {
            let bookings = BookingsController::new(ctx, notifier);
            let mut list = page_list(page);
            done(bookings.provider_bookings(&mut list, PageNav::Reload).await?)?;
            done(bookings.complete(&mut list, &id).await?)?;
        }
        ProviderAction::Call { id, page } => {
            let mut list = page_list(page);
            done(
                BookingsController::new(ctx, notifier)
                    .provider_bookings(&mut list, PageNav::Reload)
                    .await?,
            )?;
            let booking = list
                .items()
                .iter()
                .find(|booking| booking.id == id)
                .ok_or_else(|| eyre!("Booking {id} is not on this page"))?;
            let handoff = loaded(VideoController::new(ctx, notifier).provider_call(booking).await?)?;
            render::handoff(&handoff);
        }
        ProviderAction::Reviews => {
            let summary = loaded(ReviewsController::new(ctx, notifier).own_reviews().await?)?;
            render::reviews(&summary);
        }
        ProviderAction::Dashboard => {
            let dashboard = loaded(DashboardController::new(ctx, notifier).provider().await?)?;
            render::provider_dashboard(&dashboard);
        }
    }
    Ok(())
}
