use crate::utils::date;
use chrono::{NaiveDate, NaiveTime};

/// One parsed day line of the timesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub entry: NaiveTime,
    pub exit: NaiveTime,
    pub reason: String,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, entry: NaiveTime, exit: NaiveTime, reason: String) -> Self {
        Self {
            date,
            entry,
            exit,
            reason,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn entry_str(&self) -> String {
        self.entry.format("%H:%M").to_string()
    }

    pub fn exit_str(&self) -> String {
        self.exit.format("%H:%M").to_string()
    }

    /// Date plus Italian weekday, e.g. "01/03/2024 (venerdì)".
    pub fn date_label(&self) -> String {
        format!("{} ({})", self.date_str(), date::weekday_name(self.date))
    }
}
