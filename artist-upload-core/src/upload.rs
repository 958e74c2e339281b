//! High-level pipeline: rows → artist records → catalog API.
//!
//! [`upload_artists`] drives one run:
//!   - reads every row from a [`RowSource`]
//!   - fetches the existing artists once, for an informational count only
//!   - maps each row and creates the artist through an [`ArtistApi`]
//!   - buckets every row into created / updated / failed / skipped
//!
//! # Error Handling
//! Only a failure to read the sheet aborts the run. Mapping and request
//! failures are recorded against the row and the loop moves on to the next one.
//!
//! # Dry run
//! With `dry_run` set no request is made at all, including the existing-artist
//! lookup; every valid row lands in `skipped`.

use std::collections::HashMap;
use tracing::{debug, error, info, warn};

use crate::config::UploadConfig;
use crate::contract::{ArtistApi, RowSource};
use crate::error::ReaderError;
use crate::mapping::map_row;
use crate::record::ArtistRecord;
use crate::report::{FailedUpload, UploadResult};

pub async fn upload_artists<S, A>(
    config: &UploadConfig,
    source: &S,
    api: &A,
) -> Result<UploadResult, ReaderError>
where
    S: RowSource + ?Sized,
    A: ArtistApi + ?Sized,
{
    info!(
        dry_run = config.dry_run,
        "Starting artist upload{}",
        if config.dry_run { " (DRY RUN)" } else { "" }
    );

    let rows = source.read_rows()?;
    let total = rows.len();

    if !config.dry_run {
        let existing = fetch_existing(api).await;
        info!(count = existing.len(), "Found {} existing artists", existing.len());
    }

    let mut created = Vec::new();
    let mut failed = Vec::new();
    let mut skipped = Vec::new();

    for row in &rows {
        let record = match map_row(row, config.author_fallback_column.as_deref()) {
            Ok(record) => record,
            Err(e) => {
                error!(row = row.number(), error = %e, "Failed to process row {}", row.number());
                failed.push(FailedUpload::new(row.label(), e));
                continue;
            }
        };
        let name = record.author.clone();

        info!("Processing artist {}/{}: {}", row.number(), total, name);

        if config.dry_run {
            info!(record = ?record, "DRY RUN: Would process artist: {}", name);
            skipped.push(name);
            continue;
        }

        match serde_json::to_string_pretty(&record) {
            Ok(json) => debug!(json = %json, artist = %name, "Artist payload"),
            Err(e) => debug!(error = ?e, artist = %name, "Failed to serialise artist payload"),
        }

        match api.create_artist(&record).await {
            Ok(_) => {
                info!("Created artist: {}", name);
                created.push(name);
            }
            Err(e) => {
                error!(error = %e, "Failed to create artist {}", name);
                failed.push(FailedUpload::new(name, e));
            }
        }
    }

    let result = UploadResult {
        created,
        updated: Vec::new(),
        failed,
        skipped,
    };
    info!(
        created = result.created.len(),
        failed = result.failed.len(),
        skipped = result.skipped.len(),
        "Artist upload finished"
    );
    Ok(result)
}

/// Existing artists keyed by lowercased author name.
///
/// Best-effort: a failed lookup is logged and yields an empty map.
pub async fn fetch_existing<A>(api: &A) -> HashMap<String, ArtistRecord>
where
    A: ArtistApi + ?Sized,
{
    match api.list_artists(None).await {
        Ok(records) => records
            .into_iter()
            .map(|record| (record.author.to_lowercase(), record))
            .collect(),
        Err(e) => {
            warn!(error = %e, "Could not fetch existing artists");
            HashMap::new()
        }
    }
}
