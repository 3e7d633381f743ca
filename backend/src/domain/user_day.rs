//! User-day boundary calculations for the hydration tracker.
//!
//! A "user day" is a 24-hour accounting period anchored to the user's
//! wake-up time rather than midnight, so water drunk at 1 AM (before
//! waking) counts toward the previous day's total instead of starting
//! a new day. All functions here are pure and stateless; the only
//! ambient input is the local wall clock.
//!
//! ## Leniency policy
//!
//! Malformed wake-up-time strings never produce an error. They fall
//! back to the documented default of 07:00, since a corrupted stored
//! preference must not break day accounting.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use log::warn;

/// Default wake-up time substituted for unparseable input
pub const DEFAULT_WAKE_UP_TIME: &str = "07:00";

/// Format used for user-day date strings
pub const USER_DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse an HH:mm wake-up time, falling back to 07:00 on any failure
pub fn parse_wake_up_time(wake_up_time: &str) -> NaiveTime {
    match NaiveTime::parse_from_str(wake_up_time.trim(), "%H:%M") {
        Ok(time) => time,
        Err(_) => {
            warn!(
                "Unparseable wake-up time '{}', falling back to {}",
                wake_up_time, DEFAULT_WAKE_UP_TIME
            );
            NaiveTime::from_hms_opt(7, 0, 0).expect("default wake-up time is valid")
        }
    }
}

/// Get the user day containing the current instant
pub fn current_user_day(wake_up_time: &str) -> String {
    let wake_up = parse_wake_up_time(wake_up_time);
    format_user_day(user_day_for(Local::now(), wake_up))
}

/// Get the user day containing an arbitrary epoch-millisecond instant
pub fn user_day_for_timestamp(timestamp_millis: i64, wake_up_time: &str) -> String {
    let wake_up = parse_wake_up_time(wake_up_time);
    let instant = datetime_from_millis(timestamp_millis);
    format_user_day(user_day_for(instant, wake_up))
}

/// Check whether a new user day has started since the last check.
///
/// Used by the persistence layer to decide whether daily aggregates
/// need to roll over.
pub fn has_new_user_day_started(last_check_millis: i64, wake_up_time: &str) -> bool {
    user_day_for_timestamp(last_check_millis, wake_up_time) != current_user_day(wake_up_time)
}

/// Core day-boundary rule: an instant whose time-of-day is strictly
/// before the wake-up time still belongs to the previous calendar day.
fn user_day_for(instant: DateTime<Local>, wake_up: NaiveTime) -> NaiveDate {
    let date = instant.date_naive();
    if instant.time() < wake_up {
        // chrono handles month/year rollover when stepping back a day
        date - Duration::days(1)
    } else {
        date
    }
}

fn format_user_day(date: NaiveDate) -> String {
    date.format(USER_DAY_FORMAT).to_string()
}

/// Convert an epoch-millisecond instant to local time, substituting
/// the current time for out-of-range values.
pub(crate) fn datetime_from_millis(timestamp_millis: i64) -> DateTime<Local> {
    match Utc.timestamp_millis_opt(timestamp_millis) {
        LocalResult::Single(instant) => instant.with_timezone(&Local),
        _ => {
            warn!(
                "Out-of-range timestamp {} ms, using current time",
                timestamp_millis
            );
            Local::now()
        }
    }
}
