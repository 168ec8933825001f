pub mod record;
pub mod row;
pub mod validation;

pub use record::AttendanceRecord;
pub use row::ReportRow;
pub use validation::{LabelPresence, ValidationReport};
