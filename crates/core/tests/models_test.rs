use carelink_core::models::{
    auth::{ProviderAuthResponse, UserAuthResponse},
    booking::BookingStatus,
    category::CategoryRequest,
    dashboard::AdminDashboard,
    review::{Rating, Review, average_rating},
    session::{Credential, ProviderSession, Role, UserSession},
    slot::SlotDocument,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::{from_str, json, to_value};

#[test]
fn test_user_session_from_auth_response() {
    let auth: UserAuthResponse = from_str(
        r#"{"token":"tok-1","user":{"_id":"u1","name":"Asha","email":"asha@example.com"}}"#,
    )
    .unwrap();

    let session = UserSession::from(auth);

    assert_eq!(session.token(), "tok-1");
    assert_eq!(session.account_id(), "u1");
    assert!(!session.has_completed_details);
    assert_eq!(UserSession::ROLE, Role::User);
}

#[test]
fn test_provider_session_accepts_snake_case_approval_flag() {
    let auth: ProviderAuthResponse = from_str(
        r#"{
            "token": "tok-sp",
            "serviceProvider": {
                "_id": "p1",
                "name": "Dr. Rao",
                "email": "rao@example.com",
                "hasCompletedDetails": true,
                "is_approved": true
            }
        }"#,
    )
    .unwrap();

    let session = ProviderSession::from(auth);

    assert!(session.has_completed_details);
    assert!(session.is_approved);
    assert_eq!(session.display_name(), "Dr. Rao");
}

#[rstest]
#[case(Role::User, "carelink.session.user")]
#[case(Role::ServiceProvider, "carelink.session.service_provider")]
#[case(Role::Admin, "carelink.session.admin")]
fn test_role_storage_keys_are_distinct(#[case] role: Role, #[case] key: &str) {
    assert_eq!(role.storage_key(), key);
}

#[test]
fn test_category_request_from_tags_keeps_order() {
    let request = CategoryRequest::from_tags(" Cardiology ", "ECG, Echo,, Holter ");

    assert_eq!(request.name, "Cardiology");
    assert_eq!(request.sub_categories, vec!["ECG", "Echo", "Holter"]);
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(5, true)]
#[case(6, false)]
fn test_rating_range(#[case] value: u8, #[case] valid: bool) {
    assert_eq!(Rating::try_from(value).is_ok(), valid);
}

#[test]
fn test_review_with_out_of_range_rating_does_not_decode() {
    let result = from_str::<Review>(
        r#"{"_id":"r1","providerId":"p1","bookingId":"b1","rating":9,"comment":"great"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_average_rating() {
    let review = |rating: u8| Review {
        id: format!("r{rating}"),
        provider_id: "p1".into(),
        booking_id: "b1".into(),
        user_name: "Asha".into(),
        rating: Rating::try_from(rating).unwrap(),
        comment: String::new(),
        created_at: None,
    };

    assert_eq!(average_rating(&[]), None);
    assert_eq!(average_rating(&[review(4), review(5), review(5)]), Some(4.7));
}

#[test]
fn test_rating_serializes_as_number() {
    let rating = Rating::try_from(4).unwrap();
    assert_eq!(to_value(rating).unwrap(), json!(4));
}

#[test]
fn test_admin_dashboard_count_for() {
    let dashboard: AdminDashboard = serde_json::from_value(json!({
        "totalUsers": 120,
        "totalProviders": 14,
        "totalBookings": 300,
        "totalRevenue": 45000,
        "bookingsByStatus": [
            {"status": "Completed", "count": 210},
            {"status": "Cancelled", "count": 40}
        ]
    }))
    .unwrap();

    assert_eq!(dashboard.count_for(BookingStatus::Completed), 210);
    assert_eq!(dashboard.count_for(BookingStatus::Refunded), 0);
    assert_eq!(dashboard.total_revenue, Decimal::new(45000, 0));
}

#[test]
fn test_slot_document_lookup() {
    let slot: SlotDocument = serde_json::from_value(json!({
        "_id": "s1",
        "providerId": "p1",
        "date": "2024-07-01",
        "schedule": [
            {
                "_id": "e1",
                "title": "Morning",
                "price": 400,
                "fromTime": "2024-07-01T04:00:00Z",
                "toTime": "2024-07-01T04:30:00Z",
                "status": "open",
                "services": ["Consultation", "Follow-up"]
            }
        ]
    }))
    .unwrap();

    assert_eq!(slot.entry("e1").map(|e| e.services.len()), Some(2));
    assert!(slot.entry("e2").is_none());
}
