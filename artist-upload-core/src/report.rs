use std::fmt;

/// A row that could not be uploaded, labelled by author name or `Row N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUpload {
    pub name: String,
    pub error: String,
}

impl FailedUpload {
    pub fn new(name: impl Into<String>, error: impl ToString) -> Self {
        Self {
            name: name.into(),
            error: error.to_string(),
        }
    }
}

/// Outcome of one upload run, bucketed per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub failed: Vec<FailedUpload>,
    pub skipped: Vec<String>,
}

impl UploadResult {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

const RULE: &str = "==================================================";

/// The plain-text summary printed at the end of a run.
impl fmt::Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "UPLOAD SUMMARY")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Created: {}", self.created.len())?;
        writeln!(f, "Updated: {}", self.updated.len())?;
        writeln!(f, "Failed: {}", self.failed.len())?;
        writeln!(f, "Skipped: {}", self.skipped.len())?;

        if self.has_failures() {
            writeln!(f)?;
            writeln!(f, "FAILED UPLOADS:")?;
            for failure in &self.failed {
                writeln!(f, "  - {}: {}", failure.name, failure.error)?;
            }
        }
        Ok(())
    }
}
