//! # Locations
//!
//! The shop's location cards, shared by the "Visit us" section and the home
//! page map. Dates are relative to the `today` the caller passes in.

use chrono::{Datelike, Days, NaiveDate};

use crate::schedule::{ScheduleDay, ScheduleEntry};

/// Downtown Cafe (main) today, Riverside Stand tomorrow, the Park Pop-up the
/// day after, and the weekend-hours card.
pub fn house_locations(today: NaiveDate) -> Vec<ScheduleEntry> {
    let tomorrow = today.checked_add_days(Days::new(1));
    let day_after = today.checked_add_days(Days::new(2));

    vec![
        ScheduleEntry {
            day: ScheduleDay::Today,
            date: Some(today),
            location: "Downtown Cafe".to_string(),
            time: "6:00 AM - 8:00 PM".to_string(),
            address: "123 Court St, Pekin, IL 61554".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            email: Some("downtown@coffeeshop.com".to_string()),
            is_main_location: true,
            location_url: Some(
                "https://www.google.com/maps?q=123+Court+St,+Pekin,+IL+61554&output=embed"
                    .to_string(),
            ),
            is_weekend_card: false,
        },
        ScheduleEntry {
            day: ScheduleDay::Tomorrow,
            date: tomorrow,
            location: "Riverside Stand".to_string(),
            time: "8:00 AM - 5:00 PM".to_string(),
            address: "456 River Rd, Pekin, IL 61554".to_string(),
            phone: Some("(555) 123-4568".to_string()),
            email: Some("riverside@coffeeshop.com".to_string()),
            is_main_location: false,
            location_url: Some(
                "https://www.google.com/maps?q=456+River+Rd,+Pekin,+IL+61554&output=embed"
                    .to_string(),
            ),
            is_weekend_card: false,
        },
        ScheduleEntry {
            day: ScheduleDay::On(today.weekday().succ().succ()),
            date: day_after,
            location: "Park Pop-up".to_string(),
            time: "9:00 AM - 4:00 PM".to_string(),
            address: "789 Park Ave, Pekin, IL 61554".to_string(),
            phone: Some("(555) 123-4569".to_string()),
            email: Some("park@coffeeshop.com".to_string()),
            is_main_location: false,
            location_url: Some(
                "https://www.google.com/maps?q=789+Park+Ave,+Pekin,+IL+61554&output=embed"
                    .to_string(),
            ),
            is_weekend_card: false,
        },
        ScheduleEntry {
            day: ScheduleDay::Label("Weekend Hours".to_string()),
            date: None,
            location: "All Locations".to_string(),
            time: "7:00 AM - 6:00 PM".to_string(),
            address: "Saturday & Sunday".to_string(),
            phone: None,
            email: None,
            is_main_location: false,
            location_url: None,
            is_weekend_card: true,
        },
    ]
}
