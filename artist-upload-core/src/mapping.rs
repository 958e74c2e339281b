//! Row → [`ArtistRecord`] mapping.

use tracing::{debug, warn};

use crate::error::MappingError;
use crate::reader::{Cell, Row};
use crate::record::{ArtistField, ArtistRecord};

/// Spreadsheet column holding the numeric artist id, sent as `uuid`.
pub const AUTHOR_ID_COLUMN: &str = "Author ID";

/// Spreadsheet column → API field.
pub const COLUMN_MAPPING: [(&str, ArtistField); 15] = [
    ("Author", ArtistField::Author),
    ("Introduction", ArtistField::Introduction),
    ("Twitter_link", ArtistField::TwitterLink),
    ("Facebook_link", ArtistField::FacebookLink),
    ("Instagram_link", ArtistField::InstagramLink),
    ("Plurk_link", ArtistField::PlurkLink),
    ("Baha_link", ArtistField::BahaLink),
    ("Youtube_link", ArtistField::YoutubeLink),
    ("Twitch_link", ArtistField::TwitchLink),
    ("Official_link", ArtistField::OfficialLink),
    ("Store_link", ArtistField::StoreLink),
    ("Myacg_link", ArtistField::MyacgLink),
    ("Pixiv_link", ArtistField::PixivLink),
    ("Tags", ArtistField::Tags),
    ("Photo", ArtistField::Photo),
];

/// Map one row onto an artist record.
///
/// Empty, blank and "nan" cells are left out. When the row has no author but
/// does have an author id, `fallback_column` is tried before giving up with
/// [`MappingError::MissingAuthor`].
pub fn map_row(row: &Row, fallback_column: Option<&str>) -> Result<ArtistRecord, MappingError> {
    let mut record = ArtistRecord::default();

    for (column, field) in COLUMN_MAPPING {
        if let Some(value) = row.get(column).and_then(Cell::normalized_text) {
            debug!(row = row.number(), column, field = field.api_name(), "Mapped column");
            record.set(field, value);
        }
    }

    let author_id = row.get(AUTHOR_ID_COLUMN).filter(|cell| !cell.is_empty());
    if let Some(cell) = author_id {
        record.uuid = Some(parse_author_id(cell)?);
    }

    if !record.has_author() {
        let fallback = author_id
            .and(fallback_column)
            .and_then(|column| row.get(column))
            .and_then(Cell::normalized_text);
        match fallback {
            Some(author) => {
                warn!(
                    row = row.number(),
                    column = fallback_column.unwrap_or_default(),
                    "Author missing, using fallback column"
                );
                record.set(ArtistField::Author, author);
            }
            None => {
                return Err(MappingError::MissingAuthor {
                    columns: row.columns(),
                })
            }
        }
    }

    Ok(record)
}

fn parse_author_id(cell: &Cell) -> Result<i64, MappingError> {
    let invalid = || MappingError::InvalidAuthorId {
        value: cell.normalized_text().unwrap_or_default(),
    };
    match cell {
        Cell::Int(i) => Ok(*i),
        Cell::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(*f as i64),
        Cell::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
