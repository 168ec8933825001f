//! Report pipeline: input checks, validation gate, row collection, output.

use crate::config::Config;
use crate::core::{meal, parse, validate};
use crate::errors::{AppError, AppResult};
use crate::models::ReportRow;
use crate::pdf;
use crate::utils::table::{Table, TableMode};
use std::fs;
use std::path::{Path, PathBuf};

/// Hard cap on the input size; real timesheets are a few pages, anything
/// bigger is suspect.
pub const MAX_PDF_BYTES: u64 = 100 * 1024;

const REPORT_HEADERS: [&str; 5] = ["Date", "Entry", "Exit", "Meal", "Note"];
/// Spaces after each column but the last.
const REPORT_GAPS: [usize; 4] = [2, 1, 1, 2];

/// Runs the whole pipeline for one timesheet file.
pub fn handle(file: &str, cfg: &Config) -> AppResult<()> {
    let path = check_input(file)?;

    let report = validate::validate_pdf(&path, cfg.min_day_lines);
    if !report.is_valid() {
        return Err(AppError::InvalidFormat(report));
    }

    let rows = collect_rows(&path)?;

    println!();
    if rows.is_empty() {
        println!("No meal vouchers.");
    } else {
        print!("{}", build_table(rows, cfg).render());
    }
    println!();

    Ok(())
}

/// Enforces the input preconditions, in order: extension, existence, size.
fn check_input(file: &str) -> AppResult<PathBuf> {
    if !file.to_lowercase().ends_with(".pdf") {
        return Err(AppError::NotPdf(file.to_string()));
    }

    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(AppError::MissingFile(file.to_string()));
    }

    let size = fs::metadata(&path)?.len();
    if size > MAX_PDF_BYTES {
        return Err(AppError::Oversize(size));
    }

    Ok(path)
}

/// Second pass over the document: parse every line and keep the days that
/// earn a voucher. Non-matching lines are expected (headers, totals) and
/// skipped silently.
fn collect_rows(path: &Path) -> AppResult<Vec<ReportRow>> {
    let pages = pdf::extract_pages(path)?;

    let mut rows = Vec::new();
    for line in pdf::page_lines(&pages) {
        if let Some(record) = parse::parse_line(&line)
            && let Some(decision) = meal::decide(record.date, record.exit)
        {
            rows.push(ReportRow::new(&record, decision));
        }
    }
    Ok(rows)
}

fn build_table(rows: Vec<ReportRow>, cfg: &Config) -> Table {
    let mode = if cfg.tab_report {
        TableMode::TabSeparated
    } else {
        TableMode::Aligned
    };

    let mut table = Table::new(
        REPORT_HEADERS.iter().map(|h| h.to_string()).collect(),
        REPORT_GAPS.to_vec(),
        mode,
    );
    for row in rows {
        table.add_row(row.into_cells());
    }
    table
}
