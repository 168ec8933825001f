use std::fmt;

/// Which of the expected column labels were seen in the extracted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelPresence {
    pub ingresso: bool,
    pub uscita: bool,
    pub causale: bool,
}

impl LabelPresence {
    pub fn any(&self) -> bool {
        self.ingresso || self.uscita || self.causale
    }
}

/// Outcome of the layout check: counters, example lines and the reasons
/// behind the verdict. Failure reasons accumulate so the caller sees every
/// problem at once, not just the first.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Lines matching the "date + two times" shape.
    pub day_lines: usize,
    /// Up to three of those lines, kept as evidence.
    pub examples: Vec<String>,
    pub labels: LabelPresence,
    pub passes: Vec<String>,
    pub failures: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons = if self.is_valid() {
            &self.passes
        } else {
            &self.failures
        };

        let mut lines: Vec<String> = reasons.iter().map(|r| format!(" - {r}")).collect();
        if !self.is_valid() && !self.examples.is_empty() {
            lines.push("Examples found (first recognized lines):".to_string());
            lines.extend(self.examples.iter().map(|e| format!("   > {e}")));
        }

        write!(f, "{}", lines.join("\n"))
    }
}
