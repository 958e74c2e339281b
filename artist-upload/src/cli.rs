///
/// This module implements the CLI interface for artist-upload: argument
/// parsing and the `run` entrypoint that wires the Excel reader, the HTTP
/// client and the core pipeline together.
///
/// All row mapping and upload logic lives in the [`artist-upload-core`] crate.
/// This module is strictly CLI glue.
///
/// ## How To Use
/// - For command-line users: run the `artist-upload` binary with `--help`.
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// [`artist-upload-core`]: ../../artist-upload-core/
/// [`Cli`]: struct.Cli.html
/// [`run`]: fn.run.html
use crate::load_config::load_config;
use crate::upload::ArtistClient;
use anyhow::{Context, Result};
use artist_upload_core::config::DEFAULT_AUTHOR_FALLBACK_COLUMN;
use artist_upload_core::reader::{ExcelArtistReader, DEFAULT_SHEET};
use artist_upload_core::report::UploadResult;
use artist_upload_core::upload::upload_artists;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_EXCEL_FILE: &str = "scripts/Author_table.xlsx";
pub const DEFAULT_BASE_URL: &str = "http://localhost:2000";
pub const DEFAULT_LOG_FILE: &str = "upload-artists.log";

/// CLI for artist-upload: import artist rows from an Excel sheet into the catalog API.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "artist-upload",
    version,
    about = "Upload artist data from Excel to the artist API"
)]
pub struct Cli {
    /// Path to the Excel file
    #[clap(default_value = DEFAULT_EXCEL_FILE)]
    pub excel_file: PathBuf,

    /// Excel sheet name
    #[clap(long, default_value = DEFAULT_SHEET)]
    pub sheet: String,

    /// API base URL
    #[clap(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token sent with every request
    #[clap(long, env = "API_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Map and validate rows without making any API calls
    #[clap(long)]
    pub dry_run: bool,

    /// File the run log is appended to
    #[clap(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Column used as the author name when "Author" is empty but "Author ID" is set
    /// (empty string disables the fallback)
    #[clap(long, default_value = DEFAULT_AUTHOR_FALLBACK_COLUMN)]
    pub author_fallback_column: String,
}

/// Extracted async CLI logic entrypoint for integration tests and main().
///
/// Prints the summary block to stdout and returns the result; turning
/// failures into an exit code is left to the caller.
pub async fn run(cli: Cli) -> Result<UploadResult> {
    let config = load_config(&cli)?;
    config.upload.trace_loaded();

    let reader = ExcelArtistReader::new(&config.excel_file, config.sheet.clone())?;
    let client = ArtistClient::new(&config.base_url, config.auth_token.as_deref())
        .context("failed to construct artist API client")?;

    let result = upload_artists(&config.upload, &reader, &client).await?;

    println!("\n{result}");
    Ok(result)
}
