//! Meal voucher eligibility: weekday-dependent exit-time thresholds.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

/// Leaving at or after 15:30 earns lunch (Friday to Sunday only).
const LUNCH_THRESHOLD_MIN: u32 = 15 * 60 + 30;
/// Leaving at or after 20:30 earns dinner (every day).
const DINNER_THRESHOLD_MIN: u32 = 20 * 60 + 30;

/// Which meal subsidy a day earns. Days earning none are omitted from the
/// report entirely, so there is no variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealDecision {
    Lunch,
    Dinner,
    LunchAndDinner,
}

impl MealDecision {
    pub fn as_label(&self) -> &'static str {
        match self {
            MealDecision::Lunch => "Lunch",
            MealDecision::Dinner => "Dinner",
            MealDecision::LunchAndDinner => "Lunch and Dinner",
        }
    }
}

/// Decides the meal subsidy for a day, `None` when the exit time earns
/// nothing. The thresholds are fixed business rules, not read from the
/// document.
pub fn decide(date: NaiveDate, exit: NaiveTime) -> Option<MealDecision> {
    let minutes = exit.hour() * 60 + exit.minute();
    let lunch_day = matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun);

    let lunch = lunch_day && minutes >= LUNCH_THRESHOLD_MIN;
    let dinner = minutes >= DINNER_THRESHOLD_MIN;

    match (lunch, dinner) {
        (true, true) => Some(MealDecision::LunchAndDinner),
        (false, true) => Some(MealDecision::Dinner),
        (true, false) => Some(MealDecision::Lunch),
        (false, false) => None,
    }
}
