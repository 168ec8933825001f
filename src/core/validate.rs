//! Layout validation: heuristics deciding whether the extracted text looks
//! like the expected timesheet table. The goal is to refuse an unfamiliar
//! layout rather than silently mis-parse it.

use crate::models::{LabelPresence, ValidationReport};
use crate::pdf;
use crate::utils::{date, time};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Entry/exit column label variants, searched case-insensitively.
const INGRESSO_LABELS: [&str; 3] = ["ora ing", "ora ing.", "ingresso"];
const USCITA_LABELS: [&str; 3] = ["ora usc", "ora usc.", "uscita"];

/// Lines examined by the column-order check.
const ORDER_CHECK_LINES: usize = 200;
/// Candidate day lines kept as evidence in the report.
const MAX_EXAMPLES: usize = 3;

static CAUSALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)causale").expect("valid regex"));

/// Extracts the document and runs the layout heuristics over it. Extraction
/// failures fold into the report as a failure reason instead of propagating.
pub fn validate_pdf(path: &Path, min_day_lines: usize) -> ValidationReport {
    match pdf::extract_pages(path) {
        Ok(pages) => {
            let lines = pdf::page_lines(&pages);
            validate_lines(&lines, pages.len(), min_day_lines)
        }
        Err(e) => ValidationReport {
            failures: vec![e.to_string()],
            ..Default::default()
        },
    }
}

/// Pure layout check over the extracted lines. Failure reasons accumulate
/// across checks; only the two fail-fast conditions return early.
pub fn validate_lines(
    lines: &[String],
    page_count: usize,
    min_day_lines: usize,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if page_count == 0 {
        report.failures.push("PDF has no pages.".to_string());
        return report;
    }
    if lines.iter().all(|l| l.trim().is_empty()) {
        report
            .failures
            .push("No extractable text (the PDF may be a scanned image).".to_string());
        return report;
    }

    report.labels = detect_labels(lines);
    if !((report.labels.ingresso && report.labels.uscita) || report.labels.causale) {
        report.failures.push(
            "Key labels not found: expected variants of 'Ingresso', 'Uscita', \
             or a label starting with 'Tipo' or 'Lavoro straordinario'."
                .to_string(),
        );
    }

    let (day_lines, examples) = count_day_lines(lines);
    report.day_lines = day_lines;
    report.examples = examples;

    if day_lines == 0 {
        report
            .failures
            .push("No line with 'date + two times' found (layout not recognized).".to_string());
    }
    if day_lines < min_day_lines {
        report.failures.push(format!(
            "Only {} valid day lines found (< {}).",
            day_lines, min_day_lines
        ));
    }

    if has_suspicious_order(lines) {
        report
            .failures
            .push("Suspicious column order: 'Causale' appears before the times.".to_string());
    }

    if !report.failures.is_empty() {
        return report;
    }

    report
        .passes
        .push(format!("Text extracted from {} pages.", page_count));
    report.passes.push(format!(
        "Day lines with 'date + two times' found: {}.",
        day_lines
    ));
    if report.labels.any() {
        report.passes.push("Key labels detected.".to_string());
    }
    report
}

fn detect_labels(lines: &[String]) -> LabelPresence {
    let joined = lines.join("\n").to_lowercase();

    let ingresso = INGRESSO_LABELS.iter().any(|&l| joined.contains(l));
    let uscita = USCITA_LABELS.iter().any(|&l| joined.contains(l));

    // The causale column has no fixed header, it announces itself with a
    // line starting with "Tipo ..." or "Lavoro straordinario ...".
    let causale = lines.iter().any(|line| {
        let lr = line.trim().to_lowercase();
        lr.starts_with("tipo") || lr.starts_with("lavoro straordinario")
    });

    LabelPresence {
        ingresso,
        uscita,
        causale,
    }
}

/// Counts lines shaped like an attendance row (a date plus at least two
/// clock times), keeping the first few as examples.
fn count_day_lines(lines: &[String]) -> (usize, Vec<String>) {
    let mut count = 0;
    let mut examples = Vec::new();

    for line in lines {
        if date::find_date(line).is_none() {
            continue;
        }
        if time::find_times(line).len() >= 2 {
            count += 1;
            if examples.len() < MAX_EXAMPLES {
                examples.push(line.clone());
            }
        }
    }

    (count, examples)
}

/// The 'Causale' header must come after the time columns; the offset is
/// found case-insensitively on the original line so it stays comparable
/// with the token spans. The gate on the capitalized literal is kept as-is,
/// it matches the known header casing.
fn has_suspicious_order(lines: &[String]) -> bool {
    for line in lines.iter().take(ORDER_CHECK_LINES) {
        if !line.contains("Causale") {
            continue;
        }
        let times = time::find_times(line);
        if times.len() < 2 {
            continue;
        }
        if let Some(m) = CAUSALE_RE.find(line)
            && m.start() < times[1].end
        {
            return true;
        }
    }
    false
}
