use carelink_app::{
    controllers::{
        AdminController, BookingsController, ComplaintsController, bookings::booking_rows,
    },
    pagination::{PageNav, PagedList},
    toggle::ToggleOutcome,
};
use carelink_core::{
    models::{blog::BlogRequest, user::UserSummary},
    pagination::PageQuery,
};
use chrono::Utc;
use eyre::{Result, eyre};

use super::{Shell, done, loaded, page_list};
use crate::{cli::AdminAction, render};

pub async fn run(action: AdminAction, shell: &Shell<'_>) -> Result<()> {
    let (ctx, notifier, confirmer) = (shell.ctx, shell.notifier, shell.confirmer);
    let admin = AdminController::new(ctx, notifier);
    match action {
        AdminAction::Users { page, search } => {
            let list = users_page(&admin, page.into(), search.as_deref()).await?;
            render::users(&list);
        }
        AdminAction::BlockUser { id, page } => {
            let mut list = users_page(&admin, page.into(), None).await?;
            toggled(admin.set_user_blocked(&mut list, &id, true, confirmer).await?)?;
        }
        AdminAction::UnblockUser { id, page } => {
            let mut list = users_page(&admin, page.into(), None).await?;
            toggled(admin.set_user_blocked(&mut list, &id, false, confirmer).await?)?;
        }
        AdminAction::Providers { page, search } => {
            let mut list = page_list(page);
            done(admin.providers(&mut list, PageNav::Reload, search.as_deref()).await?)?;
            render::providers(&list);
        }
        AdminAction::BlockProvider { id, page } => {
            let mut list = page_list(page);
            done(admin.providers(&mut list, PageNav::Reload, None).await?)?;
            toggled(admin.set_provider_blocked(&mut list, &id, true, confirmer).await?)?;
        }
        AdminAction::UnblockProvider { id, page } => {
            let mut list = page_list(page);
            done(admin.providers(&mut list, PageNav::Reload, None).await?)?;
            toggled(admin.set_provider_blocked(&mut list, &id, false, confirmer).await?)?;
        }
        AdminAction::Approve { id, page } => {
            let mut list = page_list(page);
            done(admin.providers(&mut list, PageNav::Reload, None).await?)?;
            admin.approve_provider(&mut list, &id, confirmer).await?;
        }
        AdminAction::Categories { page } => {
            let mut list = page_list(page);
            done(admin.categories(&mut list, PageNav::Reload).await?)?;
            render::categories(list.items());
            render::page_footer(&list);
        }
        AdminAction::AddCategory { name, tags } => {
            let mut list = PagedList::default();
            loaded(admin.add_category(&mut list, &name, &tags).await?)?;
            render::categories(list.items());
        }
        AdminAction::EditCategory {
            id,
            name,
            tags,
            page,
        } => {
            let mut list = page_list(page);
            done(admin.categories(&mut list, PageNav::Reload).await?)?;
            done(admin.edit_category(&mut list, &id, &name, &tags).await?)?;
        }
        AdminAction::ListCategory { id, page } => {
            let mut list = page_list(page);
            done(admin.categories(&mut list, PageNav::Reload).await?)?;
            toggled(admin.set_category_listed(&mut list, &id, true, confirmer).await?)?;
        }
        AdminAction::UnlistCategory { id, page } => {
            let mut list = page_list(page);
            done(admin.categories(&mut list, PageNav::Reload).await?)?;
            toggled(admin.set_category_listed(&mut list, &id, false, confirmer).await?)?;
        }
        AdminAction::Blogs { page } => {
            let mut list = page_list(page);
            done(admin.blogs(&mut list, PageNav::Reload).await?)?;
            render::blogs(&list);
        }
        AdminAction::AddBlog {
            title,
            content,
            image,
        } => {
            let mut list = PagedList::default();
            loaded(admin.add_blog(&mut list, &blog_request(title, content, image)).await?)?;
            render::blogs(&list);
        }
        AdminAction::EditBlog {
            id,
            title,
            content,
            image,
            page,
        } => {
            let mut list = page_list(page);
            done(admin.blogs(&mut list, PageNav::Reload).await?)?;
            let blog = blog_request(title, content, image);
            done(admin.edit_blog(&mut list, &id, &blog).await?)?;
        }
        AdminAction::ListBlog { id, page } => {
            let mut list = page_list(page);
            done(admin.blogs(&mut list, PageNav::Reload).await?)?;
            toggled(admin.set_blog_listed(&mut list, &id, true, confirmer).await?)?;
        }
        AdminAction::UnlistBlog { id, page } => {
            let mut list = page_list(page);
            done(admin.blogs(&mut list, PageNav::Reload).await?)?;
            toggled(admin.set_blog_listed(&mut list, &id, false, confirmer).await?)?;
        }
        AdminAction::Bookings { page } => {
            let mut list = page_list(page);
            done(
                BookingsController::new(ctx, notifier)
                    .admin_bookings(&mut list, PageNav::Reload)
                    .await?,
            )?;
            render::bookings(&booking_rows(list.items(), Utc::now()), &list);
        }
        AdminAction::Refund { id, page } => {
            let bookings = BookingsController::new(ctx, notifier);
            let mut list = page_list(page);
            done(bookings.admin_bookings(&mut list, PageNav::Reload).await?)?;
            bookings.refund(&mut list, &id, confirmer).await?;
        }
        AdminAction::Complaints { page } => {
            let mut list = page_list(page);
            done(
                ComplaintsController::new(ctx, notifier)
                    .admin_complaints(&mut list, PageNav::Reload)
                    .await?,
            )?;
            render::complaints(list.items());
            render::page_footer(&list);
        }
        AdminAction::Resolve { id, response, page } => {
            let complaints = ComplaintsController::new(ctx, notifier);
            let mut list = page_list(page);
            done(complaints.admin_complaints(&mut list, PageNav::Reload).await?)?;
            done(complaints.resolve(&mut list, &id, &response).await?)?;
        }
        AdminAction::Dashboard => {
            let dashboard = loaded(admin.dashboard().await?)?;
            render::admin_dashboard(&dashboard);
        }
    }
    Ok(())
}

async fn users_page(
    admin: &AdminController<'_>,
    query: PageQuery,
    search: Option<&str>,
) -> Result<PagedList<UserSummary>> {
    let mut list = PagedList::new(query);
    done(admin.users(&mut list, PageNav::Reload, search).await?)?;
    Ok(list)
}

fn blog_request(title: String, content: String, image: Option<String>) -> BlogRequest {
    BlogRequest {
        title: title.trim().to_string(),
        image: image.filter(|url| !url.trim().is_empty()),
        content,
    }
}

/// A declined prompt is a normal exit; a failed mutation is not.
fn toggled(outcome: ToggleOutcome) -> Result<()> {
    match outcome {
        ToggleOutcome::Failed => Err(eyre!("Request did not complete")),
        ToggleOutcome::Declined | ToggleOutcome::Applied => Ok(()),
    }
}
