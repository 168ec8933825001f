pub mod meal;
pub mod parse;
pub mod report;
pub mod validate;
