use crate::core::meal::MealDecision;
use crate::models::AttendanceRecord;
use chrono::Timelike;

/// Reason that marks a compensatory-leave day; combined with a 07:30 entry
/// the displayed entry time gets an asterisk.
const COMPENSATORY_REASON: &str = "RECUPERO COMPENSATIVO";

/// One row of the final report, presentation strings only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: String,
    pub entry: String,
    pub exit: String,
    pub meal: String,
    pub note: String,
}

impl ReportRow {
    pub fn new(record: &AttendanceRecord, meal: MealDecision) -> Self {
        let mut entry = record.entry_str();
        if record.reason == COMPENSATORY_REASON
            && record.entry.hour() == 7
            && record.entry.minute() == 30
        {
            entry = format!("*{entry}");
        }

        Self {
            date: record.date_label(),
            entry,
            exit: record.exit_str(),
            meal: meal.as_label().to_string(),
            note: record.reason.clone(),
        }
    }

    pub fn into_cells(self) -> Vec<String> {
        vec![self.date, self.entry, self.exit, self.meal, self.note]
    }
}
