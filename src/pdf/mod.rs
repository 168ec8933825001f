//! PDF text extraction, one text blob per page.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Extracts the text of every page, in page order. A page with no
/// extractable text yields an empty string, which is not an error.
pub fn extract_pages(path: &Path) -> AppResult<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| AppError::Extraction(e.to_string()))?;
    pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| AppError::Extraction(e.to_string()))
}

/// Flattens per-page text into the ordered sequence of trimmed lines.
pub fn page_lines(pages: &[String]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|page| page.lines())
        .map(|line| line.trim().to_string())
        .collect()
}
