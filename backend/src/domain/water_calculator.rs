//! Daily water-goal, reminder-interval and progress calculations.
//!
//! All functions are pure and stateless. The goal formula blends a
//! gender baseline, an age adjustment, an activity multiplier and an
//! optional weight-based estimate, then clamps to safety bounds. The
//! weight formula (kg x 30) and the "use whichever is higher" rule are
//! fixed business logic, preserved exactly.
//!
//! ## Leniency policy
//!
//! Unparseable HH:mm inputs never produce an error. Awake-duration
//! math falls back to a 16-hour assumption; the on-track check falls
//! back to a half-goal predicate.

use chrono::{Local, NaiveTime, Timelike};
use log::warn;

use crate::domain::models::profile::{ActivityLevel, AgeGroup, Gender};

/// Lower safety bound for the daily goal, in milliliters
pub const MIN_DAILY_GOAL_ML: f64 = 1500.0;

/// Upper safety bound for the daily goal, in milliliters
pub const MAX_DAILY_GOAL_ML: f64 = 5000.0;

/// Milliliters per kilogram of body weight for the weight estimate
pub const ML_PER_KG: f64 = 30.0;

/// Awake hours assumed when wake or sleep time cannot be parsed
pub const FALLBACK_AWAKE_HOURS: f64 = 16.0;

/// Tolerance band for the on-track check: being within 90% of the
/// expected pace still counts as on track
const ON_TRACK_TOLERANCE: f64 = 0.9;

/// Compute the daily water goal in milliliters.
///
/// Baseline by gender, adjusted for age and activity; when a weight is
/// supplied the higher of the activity-adjusted and weight-based
/// estimates wins. The result is always clamped to
/// [`MIN_DAILY_GOAL_ML`, `MAX_DAILY_GOAL_ML`].
pub fn daily_goal(
    gender: Gender,
    age_group: AgeGroup,
    activity_level: ActivityLevel,
    weight_kg: Option<f64>,
) -> f64 {
    let adjusted = gender.base_intake_ml() * age_group.factor() * activity_level.multiplier();

    let estimate = match weight_kg {
        // Safety-biased: take the higher of the two estimates
        Some(weight) => adjusted.max(weight * ML_PER_KG),
        None => adjusted,
    };

    estimate.clamp(MIN_DAILY_GOAL_ML, MAX_DAILY_GOAL_ML)
}

/// Compute the spacing between reminders in minutes.
///
/// Higher goals get more reminders per day; the interval spreads them
/// evenly across waking hours.
pub fn reminder_interval(wake_up_time: &str, sleep_time: &str, daily_goal_ml: f64) -> i64 {
    let awake = awake_hours(wake_up_time, sleep_time);
    let target = target_reminder_count(daily_goal_ml);
    (awake * 60.0 / target as f64).floor() as i64
}

/// Check whether cumulative intake matches the expected pace given
/// elapsed awake time, with a 10% tolerance band.
pub fn is_on_track(consumed_ml: f64, goal_ml: f64, wake_up_time: &str, sleep_time: &str) -> bool {
    is_on_track_at(Local::now().time(), consumed_ml, goal_ml, wake_up_time, sleep_time)
}

/// Clock-injected variant of [`is_on_track`] for deterministic checks.
fn is_on_track_at(
    now: NaiveTime,
    consumed_ml: f64,
    goal_ml: f64,
    wake_up_time: &str,
    sleep_time: &str,
) -> bool {
    let (wake, sleep) = match (parse_time(wake_up_time), parse_time(sleep_time)) {
        (Some(wake), Some(sleep)) => (wake, sleep),
        _ => {
            warn!(
                "Unparseable wake/sleep times '{}'/'{}', using half-goal fallback",
                wake_up_time, sleep_time
            );
            return consumed_ml >= 0.5 * goal_ml;
        }
    };

    let awake = awake_hours_between(wake, sleep);

    // When "now" is before the wake time-of-day, waking happened
    // yesterday relative to the clock; wrap the elapsed time by 24h.
    let mut hours_awake = hours_of(now) - hours_of(wake);
    if hours_awake < 0.0 {
        hours_awake += 24.0;
    }

    let expected_fraction = (hours_awake / awake).clamp(0.0, 1.0);
    let expected_ml = goal_ml * expected_fraction;

    consumed_ml >= ON_TRACK_TOLERANCE * expected_ml
}

/// Elapsed hours between wake and sleep, falling back to
/// [`FALLBACK_AWAKE_HOURS`] when either time cannot be parsed.
pub fn awake_hours(wake_up_time: &str, sleep_time: &str) -> f64 {
    match (parse_time(wake_up_time), parse_time(sleep_time)) {
        (Some(wake), Some(sleep)) => awake_hours_between(wake, sleep),
        _ => {
            warn!(
                "Unparseable wake/sleep times '{}'/'{}', assuming {} awake hours",
                wake_up_time, sleep_time, FALLBACK_AWAKE_HOURS
            );
            FALLBACK_AWAKE_HOURS
        }
    }
}

fn awake_hours_between(wake: NaiveTime, sleep: NaiveTime) -> f64 {
    let wake_hours = hours_of(wake);
    let sleep_hours = hours_of(sleep);
    if sleep_hours < wake_hours {
        // Sleep time past midnight, i.e. on the next calendar day
        sleep_hours + 24.0 - wake_hours
    } else {
        sleep_hours - wake_hours
    }
}

/// Target number of reminders per day by goal tier
fn target_reminder_count(daily_goal_ml: f64) -> i64 {
    if daily_goal_ml < 2000.0 {
        8
    } else if daily_goal_ml < 3000.0 {
        10
    } else {
        12
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

fn hours_of(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_goal_male_baseline() {
        let goal = daily_goal(Gender::Male, AgeGroup::From18To30, ActivityLevel::Sedentary, None);
        assert_eq!(goal, 3700.0);
    }

    #[test]
    fn test_daily_goal_other_over_60() {
        // (3700 + 2700) / 2 * 0.90 = 2880
        let goal = daily_goal(Gender::Other, AgeGroup::Over60, ActivityLevel::Sedentary, None);
        assert_eq!(goal, 2880.0);
    }

    #[test]
    fn test_daily_goal_weight_estimate_wins_when_higher() {
        // Female sedentary 18-30 baseline is 2700; 100 kg x 30 = 3000
        let goal = daily_goal(
            Gender::Female,
            AgeGroup::From18To30,
            ActivityLevel::Sedentary,
            Some(100.0),
        );
        assert_eq!(goal, 3000.0);
    }

    #[test]
    fn test_daily_goal_activity_estimate_wins_when_higher() {
        // 50 kg x 30 = 1500 is well below the female baseline
        let goal = daily_goal(
            Gender::Female,
            AgeGroup::From18To30,
            ActivityLevel::Sedentary,
            Some(50.0),
        );
        assert_eq!(goal, 2700.0);
    }

    #[test]
    fn test_daily_goal_clamped_to_upper_bound() {
        let goal = daily_goal(
            Gender::Male,
            AgeGroup::From18To30,
            ActivityLevel::VeryActive,
            Some(200.0),
        );
        assert_eq!(goal, MAX_DAILY_GOAL_ML);
    }

    #[test]
    fn test_daily_goal_within_bounds_for_all_inputs() {
        let genders = [Gender::Male, Gender::Female, Gender::Other];
        let age_groups = [
            AgeGroup::From18To30,
            AgeGroup::From31To50,
            AgeGroup::From51To60,
            AgeGroup::Over60,
        ];
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        let weights = [None, Some(0.0), Some(40.0), Some(90.0), Some(250.0)];

        for gender in genders {
            for age_group in age_groups {
                for level in levels {
                    for weight in weights {
                        let goal = daily_goal(gender, age_group, level, weight);
                        assert!(
                            (MIN_DAILY_GOAL_ML..=MAX_DAILY_GOAL_ML).contains(&goal),
                            "goal {} out of bounds for {:?}/{:?}/{:?}/{:?}",
                            goal,
                            gender,
                            age_group,
                            level,
                            weight
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_reminder_interval_standard_day() {
        // 16 awake hours, goal tier 10 reminders: floor(960 / 10) = 96
        assert_eq!(reminder_interval("07:00", "23:00", 2700.0), 96);
    }

    #[test]
    fn test_reminder_interval_sleep_past_midnight() {
        // 18 awake hours, goal tier 10 reminders: floor(1080 / 10) = 108
        assert_eq!(reminder_interval("07:00", "01:00", 2000.0), 108);
    }

    #[test]
    fn test_reminder_interval_goal_tiers() {
        // 16 awake hours; 8, 10 and 12 reminders per tier
        assert_eq!(reminder_interval("07:00", "23:00", 1900.0), 120);
        assert_eq!(reminder_interval("07:00", "23:00", 2999.0), 96);
        assert_eq!(reminder_interval("07:00", "23:00", 3000.0), 80);
    }

    #[test]
    fn test_reminder_interval_parse_failure_uses_fallback_hours() {
        // 16-hour fallback, goal tier 8: floor(960 / 8) = 120
        assert_eq!(reminder_interval("garbage", "23:00", 1800.0), 120);
        assert_eq!(reminder_interval("07:00", "bedtime", 1800.0), 120);
    }

    #[test]
    fn test_awake_hours_fractional() {
        assert!((awake_hours("06:30", "22:45") - 16.25).abs() < 1e-9);
    }

    #[test]
    fn test_is_on_track_early_in_day() {
        // 4 of 16 awake hours elapsed, expected 675 ml of 2700;
        // 90% tolerance puts the threshold at 607.5
        let now = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
        assert!(is_on_track_at(now, 620.0, 2700.0, "07:00", "23:00"));
        assert!(!is_on_track_at(now, 600.0, 2700.0, "07:00", "23:00"));
    }

    #[test]
    fn test_is_on_track_fraction_clamped_after_sleep_time() {
        // Past the full awake window the expectation caps at the goal
        let now = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        assert!(is_on_track_at(now, 2430.0, 2700.0, "07:00", "23:00"));
        assert!(!is_on_track_at(now, 2000.0, 2700.0, "07:00", "23:00"));
    }

    #[test]
    fn test_is_on_track_wraps_when_now_before_wake() {
        // 00:30 with a 07:00 wake means 17.5 hours awake, capped at
        // the 16-hour window, so the full goal is expected
        let now = NaiveTime::from_hms_opt(0, 30, 0).unwrap();
        assert!(is_on_track_at(now, 2430.0, 2700.0, "07:00", "23:00"));
        assert!(!is_on_track_at(now, 1000.0, 2700.0, "07:00", "23:00"));
    }

    #[test]
    fn test_is_on_track_parse_failure_half_goal_fallback() {
        let now = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert!(is_on_track_at(now, 1350.0, 2700.0, "garbage", "23:00"));
        assert!(!is_on_track_at(now, 1349.0, 2700.0, "garbage", "23:00"));
    }

    #[test]
    fn test_is_on_track_at_wake_up_expects_nothing() {
        let now = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert!(is_on_track_at(now, 0.0, 2700.0, "07:00", "23:00"));
    }
}
