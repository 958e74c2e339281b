//! # contract: seams between the pipeline and the outside world
//!
//! Two traits decouple the orchestrator from its collaborators:
//!
//! - [`RowSource`] produces spreadsheet rows (the Excel reader in production).
//! - [`ArtistApi`] talks to the catalog service (the reqwest client in the CLI crate).
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall`, so tests can script rows and API
//!   responses without a workbook or a server. The mocks are exported under the
//!   `test-export-mocks` feature so downstream crates can use them as well.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::error::{ReaderError, RequestError};
use crate::reader::Row;
use crate::record::ArtistRecord;

/// Anything that can hand over the rows of the source sheet, in sheet order.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait RowSource {
    /// Load every row. Called once per run.
    fn read_rows(&self) -> Result<Vec<Row>, ReaderError>;
}

/// Client for the artist endpoints of the catalog API.
///
/// Every call either returns the decoded response or a [`RequestError`]; the
/// caller decides whether to continue.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ArtistApi: Send + Sync {
    /// `POST /artist`
    async fn create_artist(&self, record: &ArtistRecord) -> Result<ArtistRecord, RequestError>;

    /// `PUT /artist/{id}`
    async fn update_artist(
        &self,
        artist_id: &str,
        record: &ArtistRecord,
    ) -> Result<ArtistRecord, RequestError>;

    /// `GET /artist`, optionally filtered with `?search=`.
    async fn list_artists(&self, search: Option<String>)
        -> Result<Vec<ArtistRecord>, RequestError>;
}
