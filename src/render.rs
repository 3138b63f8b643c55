//! Plain-text listings for the terminal.

use carelink_app::{
    controllers::{bookings::BookingRow, reviews::ReviewSummary, slots::ScheduleRow},
    pagination::PagedList,
};
use carelink_core::models::{
    blog::Blog,
    booking::Booking,
    category::Category,
    complaint::Complaint,
    dashboard::{AdminDashboard, ProviderDashboard},
    provider::{ProviderProfile, ProviderSummary},
    user::{UserProfile, UserSummary},
    video::CallHandoff,
};

pub fn page_footer<T>(list: &PagedList<T>) {
    let state = list.state();
    let query = list.query();
    println!(
        "page {} of {} ({} per page)",
        query.page,
        state.total_pages().max(1),
        query.limit
    );
}

pub fn users(list: &PagedList<UserSummary>) {
    for user in list.items() {
        let blocked = if user.is_blocked { " [blocked]" } else { "" };
        println!("{}  {} <{}>{}", user.id, user.name, user.email, blocked);
    }
    page_footer(list);
}

pub fn providers(list: &PagedList<ProviderSummary>) {
    for provider in list.items() {
        let mut flags = Vec::new();
        if provider.is_blocked {
            flags.push("blocked");
        }
        if !provider.is_approved {
            flags.push("pending approval");
        }
        if !provider.has_completed_details {
            flags.push("no details");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!(
            "{}  {}  {}{}",
            provider.id,
            provider.name,
            provider.specialization.as_deref().unwrap_or("-"),
            flags
        );
    }
    page_footer(list);
}

pub fn provider_profile(profile: &ProviderProfile) {
    println!("{} <{}>", profile.name, profile.email);
    println!("  specialization: {}", profile.specialization.as_deref().unwrap_or("-"));
    println!("  qualification:  {}", profile.qualification.as_deref().unwrap_or("-"));
    if let Some(years) = profile.experience_years {
        println!("  experience:     {years} years");
    }
    println!("  category:       {}", profile.category.as_deref().unwrap_or("-"));
    if let Some(fee) = profile.fee {
        println!("  fee:            {fee}");
    }
    if let Some(about) = &profile.about {
        println!("  about:          {about}");
    }
    println!("  approved:       {}", profile.is_approved);
}

pub fn user_profile(profile: &UserProfile) {
    println!("{} <{}>", profile.name, profile.email);
    println!("  phone:   {}", profile.phone.as_deref().unwrap_or("-"));
    println!("  gender:  {}", profile.gender.as_deref().unwrap_or("-"));
    match profile.date_of_birth {
        Some(date) => println!("  born:    {date}"),
        None => println!("  born:    -"),
    }
    println!("  address: {}", profile.address.as_deref().unwrap_or("-"));
}

pub fn schedule(rows: &[ScheduleRow]) {
    if rows.is_empty() {
        println!("No slots");
    }
    for row in rows {
        println!(
            "{}  {} {}-{}  {}  {}  [{}]",
            row.entry.id,
            row.date,
            row.entry.from_time.format("%H:%M"),
            row.entry.to_time.format("%H:%M"),
            row.entry.title,
            row.entry.price,
            row.status
        );
    }
}

pub fn booking(row: &BookingRow) {
    let booking = &row.booking;
    println!(
        "{}  {} {}-{}  {} with {}  {}  [{}]",
        booking.id,
        booking.date,
        booking.from_time.format("%H:%M"),
        booking.to_time.format("%H:%M"),
        booking.user_name,
        booking.provider_name,
        booking.price,
        row.status
    );
    if let Some(reason) = &booking.cancel_reason {
        println!("    cancelled: {reason}");
    }
}

pub fn bookings(rows: &[BookingRow], list: &PagedList<Booking>) {
    for row in rows {
        booking(row);
    }
    page_footer(list);
}

pub fn reviews(summary: &ReviewSummary) {
    match summary.average {
        Some(average) => println!("Average rating {average:.1} from {} reviews", summary.reviews.len()),
        None => println!("No reviews yet"),
    }
    for review in &summary.reviews {
        println!("  {}/5  {}: {}", review.rating.value(), review.user_name, review.comment);
    }
}

pub fn categories(categories: &[Category]) {
    for category in categories {
        let listed = if category.is_listed { "" } else { " [unlisted]" };
        println!(
            "{}  {} ({}){}",
            category.id,
            category.name,
            category.sub_categories.join(", "),
            listed
        );
    }
}

pub fn blogs(list: &PagedList<Blog>) {
    for blog in list.items() {
        let listed = if blog.is_listed { "" } else { " [unlisted]" };
        println!("{}  {}{}", blog.id, blog.title, listed);
    }
    page_footer(list);
}

pub fn complaints(complaints: &[Complaint]) {
    for complaint in complaints {
        println!(
            "{}  booking {}  {}  [{:?}]",
            complaint.id, complaint.booking_id, complaint.subject, complaint.status
        );
        if let Some(response) = &complaint.admin_response {
            println!("    response: {response}");
        }
    }
}

pub fn handoff(handoff: &CallHandoff) {
    println!("room:        {}", handoff.room_id);
    println!("participant: {} ({})", handoff.participant_name, handoff.participant_id);
    if let Some(app_id) = &handoff.app_id {
        println!("app id:      {app_id}");
    }
}

pub fn provider_dashboard(dashboard: &ProviderDashboard) {
    println!("bookings:  {}", dashboard.total_bookings);
    println!("completed: {}", dashboard.completed_bookings);
    println!("upcoming:  {}", dashboard.upcoming_bookings);
    println!("earnings:  {}", dashboard.total_earnings);
    match dashboard.average_rating {
        Some(rating) => println!("rating:    {rating:.1}"),
        None => println!("rating:    -"),
    }
}

pub fn admin_dashboard(dashboard: &AdminDashboard) {
    println!("users:     {}", dashboard.total_users);
    println!("providers: {}", dashboard.total_providers);
    println!("bookings:  {}", dashboard.total_bookings);
    println!("revenue:   {}", dashboard.total_revenue);
    for count in &dashboard.bookings_by_status {
        println!("  {}: {}", count.status, count.count);
    }
}
