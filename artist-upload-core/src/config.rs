use tracing::{debug, info};

/// Column consulted for the author name when "Author" is empty but the row
/// still carries an "Author ID".
pub const DEFAULT_AUTHOR_FALLBACK_COLUMN: &str = "布林後攤位";

/// Pipeline options for a single upload run.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    /// Map and validate every row without touching the network.
    pub dry_run: bool,
    /// Fallback column for rows without an author; `None` disables the fallback.
    pub author_fallback_column: Option<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            author_fallback_column: Some(DEFAULT_AUTHOR_FALLBACK_COLUMN.to_string()),
        }
    }
}

impl UploadConfig {
    pub fn trace_loaded(&self) {
        info!(
            dry_run = self.dry_run,
            author_fallback_column = self.author_fallback_column.as_deref().unwrap_or("<none>"),
            "Loaded UploadConfig"
        );
        debug!(?self, "UploadConfig loaded (full debug)");
    }
}
