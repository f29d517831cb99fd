//! # Schedule Module
//!
//! Where the shop is today, how to embed it on a map, and whether it is open.
//!
//! ## Lookups
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Schedule Lookups                                    │
//! │                                                                         │
//! │  "Visit us" card                                                       │
//! │    todays_schedule(entries, today) ──► ScheduleEntry                   │
//! │         │   1. entry for "Today" or today's weekday                    │
//! │         │   2. else the main location                                  │
//! │         │   3. else the built-in Downtown Cafe (Closed)                │
//! │         ▼                                                               │
//! │    map_embed_url(address, location_url) ──► iframe src                 │
//! │                                                                         │
//! │  Sticky "Order Pickup" bar                                             │
//! │    WeeklyHours::ordering_status(now) ──► open? / "Opens Monday 8:00"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller always supplies the date or time; nothing here reads the clock.

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::error::{CoreError, CoreResult, ValidationError};

/// Embed URL used when a location has no usable Google Maps link.
const MAP_EMBED_BASE: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2795.905075274152!2d-122.68288292338772!3d45.52014797107235!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zNDXCsDMxJzEyLjUiTiAxMjLCsDQwJzUyLjgiVw!5e0!3m2!1sen!2sus!4v1620000000000!5m2!1sen!2s";

const FALLBACK_LOCATION_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2795.905075274152!2d-122.68288292338772!3d45.52014797107235!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x54950a0e7f0b5e5b%3A0x4b6a1e1b9d0a0b0b!2s123%20Coffee%20St%2C%20Portland%2C%20OR%2097201!5e0!3m2!1sen!2sus!4v1620000000000!5m2!1sen!2sus";

const GOOGLE_MAPS_HOST: &str = "maps.google.com";

// =============================================================================
// Schedule Entries
// =============================================================================

/// Which day a schedule card applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleDay {
    Today,
    Tomorrow,
    On(Weekday),
    /// Free-form card heading such as "Weekend Hours".
    Label(String),
}

impl ScheduleDay {
    fn is_today(&self, today: Weekday) -> bool {
        match self {
            ScheduleDay::Today => true,
            ScheduleDay::On(day) => *day == today,
            ScheduleDay::Tomorrow | ScheduleDay::Label(_) => false,
        }
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleDay::Today => f.write_str("Today"),
            ScheduleDay::Tomorrow => f.write_str("Tomorrow"),
            ScheduleDay::On(day) => f.write_str(weekday_name(*day)),
            ScheduleDay::Label(label) => f.write_str(label),
        }
    }
}

/// One card on the "Visit us" section: where the shop is and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day: ScheduleDay,
    pub date: Option<NaiveDate>,
    pub location: String,
    /// Human-readable hours, e.g. "6:00 AM - 8:00 PM" or "Closed".
    pub time: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_main_location: bool,
    pub location_url: Option<String>,
    #[serde(default)]
    pub is_weekend_card: bool,
}

impl ScheduleEntry {
    /// Shown when the schedule has neither today's entry nor a main location.
    pub fn fallback(today: NaiveDate) -> Self {
        ScheduleEntry {
            day: ScheduleDay::Today,
            date: Some(today),
            location: "Downtown Cafe".to_string(),
            time: "Closed".to_string(),
            address: "123 Coffee St, Portland, OR 97201".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            email: Some("downtown@coffeeshop.com".to_string()),
            is_main_location: true,
            location_url: Some(FALLBACK_LOCATION_URL.to_string()),
            is_weekend_card: false,
        }
    }

    /// Map embed URL for this entry's address.
    pub fn map_embed_url(&self) -> String {
        map_embed_url(&self.address, self.location_url.as_deref())
    }
}

/// Picks the entry to feature for `today`.
///
/// ## Lookup Order
/// 1. First entry whose day is `Today` or `today`'s weekday
/// 2. First entry flagged as the main location
/// 3. [`ScheduleEntry::fallback`]
pub fn todays_schedule(entries: &[ScheduleEntry], today: NaiveDate) -> ScheduleEntry {
    let weekday = today.weekday();

    entries
        .iter()
        .find(|entry| entry.day.is_today(weekday))
        .or_else(|| entries.iter().find(|entry| entry.is_main_location))
        .cloned()
        .unwrap_or_else(|| ScheduleEntry::fallback(today))
}

/// Builds an iframe-ready Google Maps URL.
///
/// A `maps.google.com` link is kept and gets `output=embed` if it lacks it.
/// Anything else (no link, unparseable, another host) falls back to the
/// generic embed URL searching for `address`.
///
/// ## Example
/// ```rust
/// use crema_core::schedule::map_embed_url;
///
/// let url = map_embed_url("1 Main St", Some("https://maps.google.com/?q=1+Main+St"));
/// assert_eq!(url, "https://maps.google.com/?q=1+Main+St&output=embed");
///
/// let url = map_embed_url("1 Main St", None);
/// assert!(url.ends_with("&q=1+Main+St"));
/// ```
pub fn map_embed_url(address: &str, location_url: Option<&str>) -> String {
    let google_maps = location_url
        .and_then(|raw| Url::parse(raw).ok())
        .filter(|url| url.host_str() == Some(GOOGLE_MAPS_HOST));

    if let Some(mut url) = google_maps {
        let embedded = url
            .query_pairs()
            .any(|(key, value)| key == "output" && value == "embed");
        if !embedded {
            url.query_pairs_mut().append_pair("output", "embed");
        }
        return url.into();
    }

    let query: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
    format!("{}&q={}", MAP_EMBED_BASE, query)
}

// =============================================================================
// Weekly Opening Hours
// =============================================================================

/// Open from `open` (inclusive) until `close` (exclusive) on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OpeningHours {
    pub fn new(day: Weekday, open: NaiveTime, close: NaiveTime) -> CoreResult<Self> {
        if close <= open {
            return Err(CoreError::InvalidHours {
                day: weekday_name(day).to_string(),
                open: time_label(open),
                close: time_label(close),
            });
        }
        Ok(OpeningHours { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.open <= time && time < self.close
    }
}

/// A weekday and its hours; `None` means closed all day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub day: Weekday,
    pub hours: Option<OpeningHours>,
}

impl DayHours {
    /// Parses `"8:00"`-style times; `"Closed"` for either side closes the day.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Weekday;
    /// use crema_core::schedule::DayHours;
    ///
    /// let monday = DayHours::parse(Weekday::Mon, "8:00", "16:00").unwrap();
    /// assert!(monday.hours.is_some());
    ///
    /// let sunday = DayHours::parse(Weekday::Sun, "Closed", "Closed").unwrap();
    /// assert!(sunday.hours.is_none());
    /// ```
    pub fn parse(day: Weekday, open: &str, close: &str) -> CoreResult<Self> {
        if is_closed(open) || is_closed(close) {
            return Ok(DayHours { day, hours: None });
        }

        let hours = OpeningHours::new(day, parse_time(open)?, parse_time(close)?)?;
        Ok(DayHours {
            day,
            hours: Some(hours),
        })
    }
}

/// Whether the order button is live, and the reason shown when it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingStatus {
    pub is_open: bool,
    pub disabled_reason: Option<String>,
}

/// Opening hours for the week. Days without an entry are closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    days: Vec<DayHours>,
}

impl WeeklyHours {
    /// Builds the week, rejecting a weekday listed twice.
    pub fn new(days: Vec<DayHours>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for entry in &days {
            if !seen.insert(entry.day) {
                return Err(ValidationError::Duplicate {
                    field: "weekday".to_string(),
                    value: weekday_name(entry.day).to_string(),
                }
                .into());
            }
        }
        Ok(WeeklyHours { days })
    }

    /// The shop's regular hours: 6:00-20:00 on weekdays, 7:00-18:00 on weekends.
    pub fn house() -> CoreResult<Self> {
        let weekday = |day| DayHours::parse(day, "6:00", "20:00");
        let weekend = |day| DayHours::parse(day, "7:00", "18:00");

        WeeklyHours::new(vec![
            weekend(Weekday::Sun)?,
            weekday(Weekday::Mon)?,
            weekday(Weekday::Tue)?,
            weekday(Weekday::Wed)?,
            weekday(Weekday::Thu)?,
            weekday(Weekday::Fri)?,
            weekend(Weekday::Sat)?,
        ])
    }

    /// Hours for a weekday, if it is open at all.
    pub fn hours_on(&self, day: Weekday) -> Option<OpeningHours> {
        self.days
            .iter()
            .find(|entry| entry.day == day)
            .and_then(|entry| entry.hours)
    }

    /// Open iff `now` falls inside today's `[open, close)` window.
    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        self.hours_on(now.weekday())
            .is_some_and(|hours| hours.contains(now.time()))
    }

    /// Label for the next opening within a week, starting today.
    ///
    /// Today only reports the opening time ("Opens 8:00"), even when today's
    /// window has already passed; later days include the weekday name.
    pub fn next_open_label(&self, now: NaiveDateTime) -> String {
        let mut day = now.weekday();
        for offset in 0..7 {
            if let Some(hours) = self.hours_on(day) {
                return if offset == 0 {
                    format!("Opens {}", time_label(hours.open))
                } else {
                    format!("Opens {} {}", weekday_name(day), time_label(hours.open))
                };
            }
            day = day.succ();
        }
        "Closed".to_string()
    }

    /// Combines [`Self::is_open_at`] and [`Self::next_open_label`].
    pub fn ordering_status(&self, now: NaiveDateTime) -> OrderingStatus {
        let is_open = self.is_open_at(now);
        OrderingStatus {
            is_open,
            disabled_reason: (!is_open).then(|| self.next_open_label(now)),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Full English weekday name ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn is_closed(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("closed")
}

fn parse_time(raw: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| {
        ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: format!("expected H:MM, got '{}'", raw),
        }
        .into()
    })
}

/// "8:00" rather than "08:00".
fn time_label(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

// =============================================================================
// Unit Tests
// =============================================================================
