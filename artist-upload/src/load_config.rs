/// `load_config` module: resolves command-line flags, environment variables and
/// the `.env` file into one validated [`CliConfig`].
///
/// Precedence is flag → environment (`API_BASE_URL`, `API_AUTH_TOKEN`, which
/// the binary seeds from `.env` before parsing) → built-in default. clap does
/// the layering; this module validates the result and derives the core
/// [`UploadConfig`].
///
/// # Errors
/// All errors use `anyhow::Error` and are surfaced at the CLI boundary as a
/// fatal failure (exit code 1).
use anyhow::{bail, Result};
use artist_upload_core::config::UploadConfig;
use reqwest::Url;
use std::path::PathBuf;
use tracing::{error, info};

use crate::cli::Cli;

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub excel_file: PathBuf,
    pub sheet: String,
    pub base_url: String,
    pub auth_token: Option<String>,
    pub log_file: PathBuf,
    pub upload: UploadConfig,
}

pub fn load_config(cli: &Cli) -> Result<CliConfig> {
    let base_url = cli.base_url.trim().trim_end_matches('/').to_string();
    if base_url.is_empty() {
        error!("Base URL is empty");
        bail!("API base URL must not be empty (use --base-url or API_BASE_URL)");
    }
    if let Err(e) = Url::parse(&base_url) {
        error!(error = %e, base_url = %base_url, "Base URL is not a valid URL");
        bail!("invalid API base URL {base_url:?}: {e}");
    }

    let sheet = cli.sheet.trim().to_string();
    if sheet.is_empty() {
        error!("Sheet name is empty");
        bail!("sheet name must not be empty");
    }

    let auth_token = cli
        .auth_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    let author_fallback_column = Some(cli.author_fallback_column.trim())
        .filter(|column| !column.is_empty())
        .map(str::to_string);

    let config = CliConfig {
        excel_file: cli.excel_file.clone(),
        sheet,
        base_url,
        auth_token,
        log_file: cli.log_file.clone(),
        upload: UploadConfig {
            dry_run: cli.dry_run,
            author_fallback_column,
        },
    };

    info!(
        excel_file = %config.excel_file.display(),
        sheet = %config.sheet,
        base_url = %config.base_url,
        auth_token_set = config.auth_token.is_some(),
        "Config loaded and resolved successfully"
    );
    Ok(config)
}
