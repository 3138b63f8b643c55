mod common;

use axum::{
    Router,
    extract::Path,
    routing::{delete, get, patch, post},
};
use carelink_app::{
    controllers::{
        BookingsController, BrowseController, ReviewsController, SlotsController, VideoController,
        bookings::booking_rows,
    },
    pagination::{PageNav, PagedList},
    search::Debouncer,
};
use carelink_core::{
    errors::CareError,
    models::{
        booking::{Booking, BookingStatus},
        slot::SlotDisplayStatus,
    },
};
use chrono::Utc;
use common::{
    Answer, Toasts, ack, booking_json, entry_json, ok, provider_session, start, user_session,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use std::time::Duration;

const PAST: &str = "2001-05-10";
const FUTURE: &str = "2099-05-10";

fn bookings_router() -> Router {
    Router::new()
        .route(
            "/user/bookings",
            get(|| async {
                ok(json!({
                    "items": [
                        booking_json("b-past", "Scheduled", PAST),
                        booking_json("b-next", "Scheduled", FUTURE),
                        booking_json("b-done", "Completed", PAST)
                    ],
                    "total": 3
                }))
            }),
        )
        .route(
            "/user/bookings/:id/cancel",
            patch(|Path(id): Path<String>| async move { ok(booking_json(&id, "Cancelled", FUTURE)) }),
        )
        .route(
            "/user/bookings/:id/call",
            get(|Path(id): Path<String>| async move {
                ok(json!({ "roomId": format!("room-{id}"), "bookingId": id }))
            }),
        )
}

async fn loaded_bookings(
    controller: &BookingsController<'_>,
) -> PagedList<Booking> {
    let mut list = PagedList::default();
    assert!(controller.user_bookings(&mut list, PageNav::Reload).await.unwrap());
    list
}

#[tokio::test]
async fn test_listed_bookings_project_expiry_without_changing_stored_status() {
    let (ctx, _) = start(bookings_router()).await;
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let list = loaded_bookings(&BookingsController::new(&ctx, &toasts)).await;

    let rows = booking_rows(list.items(), Utc::now());
    let statuses: Vec<BookingStatus> = rows.iter().map(|row| row.status).collect();

    assert_eq!(
        statuses,
        vec![BookingStatus::Expired, BookingStatus::Scheduled, BookingStatus::Completed]
    );
    assert_eq!(list.items()[0].status, BookingStatus::Scheduled);
    assert!(!rows[0].can_cancel());
    assert!(rows[0].can_complete());
    assert!(rows[1].can_join_call());
}

#[tokio::test]
async fn test_cancel_replaces_booking_with_server_copy() {
    let (ctx, seen) = start(bookings_router()).await;
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let bookings = BookingsController::new(&ctx, &toasts);
    let mut list = loaded_bookings(&bookings).await;

    let cancelled = bookings
        .cancel(&mut list, "b-next", "Feeling better", &Answer(true))
        .await
        .unwrap();

    assert!(cancelled);
    assert_eq!(list.items()[1].status, BookingStatus::Cancelled);
    assert_eq!(seen.requests().last().unwrap(), "PATCH /user/bookings/b-next/cancel");
    assert_eq!(toasts.successes(), vec!["Booking cancelled"]);
}

#[tokio::test]
async fn test_expired_booking_cannot_be_cancelled() {
    let (ctx, seen) = start(bookings_router()).await;
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let bookings = BookingsController::new(&ctx, &toasts);
    let mut list = loaded_bookings(&bookings).await;

    let result = bookings
        .cancel(&mut list, "b-past", "Too late", &Answer(true))
        .await;

    assert!(matches!(result, Err(CareError::Validation(_))));
    assert_eq!(seen.requests().len(), 1);
}

#[tokio::test]
async fn test_call_handoff_carries_room_and_participant() {
    let (ctx, _) = start(bookings_router()).await;
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let list = loaded_bookings(&BookingsController::new(&ctx, &toasts)).await;
    let video = VideoController::new(&ctx, &toasts);

    let handoff = video.user_call(&list.items()[1]).await.unwrap().unwrap();

    assert_eq!(handoff.room_id, "room-b-next");
    assert_eq!(handoff.participant_id, "u1");
    assert_eq!(handoff.participant_name, "Asha");
    assert_eq!(handoff.app_id.as_deref(), Some("video-app"));
    assert!(matches!(
        video.user_call(&list.items()[0]).await,
        Err(CareError::Validation(_))
    ));
}

#[tokio::test]
async fn test_review_requires_valid_rating_and_completed_booking() {
    let router = bookings_router().route(
        "/user/reviews",
        post(|| async {
            ok(json!({
                "_id": "r1", "providerId": "p1", "bookingId": "b-done",
                "userName": "Asha", "rating": 5, "comment": "Very thorough"
            }))
        }),
    );
    let (ctx, seen) = start(router).await;
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let list = loaded_bookings(&BookingsController::new(&ctx, &toasts)).await;
    let reviews = ReviewsController::new(&ctx, &toasts);

    assert!(matches!(
        reviews.post_review(&list.items()[2], 6, "Great").await,
        Err(CareError::Validation(_))
    ));
    assert!(matches!(
        reviews.post_review(&list.items()[1], 5, "Great").await,
        Err(CareError::Validation(_))
    ));
    let review = reviews
        .post_review(&list.items()[2], 5, " Very thorough ")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(review.rating.value(), 5);
    assert_eq!(seen.requests().len(), 2);
}

fn slots_router() -> Router {
    Router::new()
        .route(
            "/sp/slots",
            get(|| async {
                ok(json!([
                    {
                        "_id": "s2", "providerId": "p1", "date": FUTURE,
                        "schedule": [entry_json("e-open", "open", FUTURE), entry_json("e-booked", "booked", FUTURE)]
                    },
                    {
                        "_id": "s1", "providerId": "p1", "date": PAST,
                        "schedule": [entry_json("e-old", "open", PAST)]
                    }
                ]))
            })
            .post(|| async {
                ok(json!({
                    "_id": "s2", "providerId": "p1", "date": FUTURE,
                    "schedule": [entry_json("e-open", "open", FUTURE)]
                }))
            }),
        )
        .route("/sp/slots/:slot/schedules/:entry", delete(|| async { ack() }))
}

#[tokio::test]
async fn test_own_slots_are_sorted_and_projected() {
    let (ctx, _) = start(slots_router()).await;
    ctx.sessions.provider.save(provider_session(true)).unwrap();
    let toasts = Toasts::default();

    let rows = SlotsController::new(&ctx, &toasts).own_slots().await.unwrap().unwrap();

    let summary: Vec<(&str, SlotDisplayStatus)> = rows
        .iter()
        .map(|row| (row.entry.id.as_str(), row.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("e-old", SlotDisplayStatus::Expired),
            ("e-open", SlotDisplayStatus::Open),
            ("e-booked", SlotDisplayStatus::Booked)
        ]
    );
    assert_eq!(rows[1].entry.price, Decimal::new(400, 0));
}

#[tokio::test]
async fn test_only_open_entries_can_be_deleted() {
    let (ctx, seen) = start(slots_router()).await;
    ctx.sessions.provider.save(provider_session(true)).unwrap();
    let toasts = Toasts::default();
    let slots = SlotsController::new(&ctx, &toasts);
    let mut rows = slots.own_slots().await.unwrap().unwrap();

    assert!(matches!(
        slots.delete_entry(&mut rows, "e-old", &Answer(true)).await,
        Err(CareError::Validation(_))
    ));
    assert!(slots.delete_entry(&mut rows, "e-open", &Answer(true)).await.unwrap());

    assert_eq!(rows.len(), 2);
    assert_eq!(seen.requests().last().unwrap(), "DELETE /sp/slots/s2/schedules/e-open");
}

#[tokio::test]
async fn test_unapproved_provider_cannot_create_slots() {
    let (ctx, seen) = start(slots_router()).await;
    ctx.sessions.provider.save(provider_session(false)).unwrap();
    let toasts = Toasts::default();
    let request = serde_json::from_value(json!({
        "date": FUTURE,
        "title": "Consultation",
        "price": "400",
        "fromTime": format!("{FUTURE}T10:00:00Z"),
        "toTime": format!("{FUTURE}T10:30:00Z"),
        "services": []
    }))
    .unwrap();

    let result = SlotsController::new(&ctx, &toasts).create_slot(&request).await;

    assert!(matches!(result, Err(CareError::Authorization(_))));
    assert!(seen.requests().is_empty());
}

#[tokio::test]
async fn test_checkout_refuses_entries_that_are_not_open() {
    let router = slots_router().route(
        "/user/bookings/checkout",
        post(|| async { ok(json!({ "paymentUrl": "https://pay.example.com/s/1" })) }),
    );
    let (ctx, _) = start(router).await;
    ctx.sessions.provider.save(provider_session(true)).unwrap();
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let rows = SlotsController::new(&ctx, &toasts).own_slots().await.unwrap().unwrap();
    let bookings = BookingsController::new(&ctx, &toasts);

    assert!(matches!(bookings.checkout(&rows[0]).await, Err(CareError::Validation(_))));
    assert!(matches!(bookings.checkout(&rows[2]).await, Err(CareError::Validation(_))));
    assert_eq!(
        bookings.checkout(&rows[1]).await.unwrap().as_deref(),
        Some("https://pay.example.com/s/1")
    );
}

#[tokio::test]
async fn test_superseded_search_sends_no_request() {
    let router = Router::new().route(
        "/user/service-providers",
        get(|| async { ok(json!({ "items": [], "total": 0 })) }),
    );
    let (ctx, seen) = start(router).await;
    ctx.sessions.user.save(user_session()).unwrap();
    let toasts = Toasts::default();
    let browse = BrowseController::new(&ctx, &toasts);
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let mut stale_list = PagedList::default();
    let mut list = PagedList::default();

    let stale = debouncer.submit("car");
    let latest = debouncer.submit("cardio");
    let (stale, latest) = tokio::join!(
        browse.search_providers(&mut stale_list, stale),
        browse.search_providers(&mut list, latest)
    );

    assert!(!stale.unwrap());
    assert!(latest.unwrap());
    assert_eq!(
        seen.requests(),
        vec!["GET /user/service-providers?page=1&limit=10&search=cardio"]
    );
}
