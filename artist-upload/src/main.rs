use artist_upload::cli::{run, Cli};
use artist_upload::logging::build_dispatch;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let dispatch = match build_dispatch(&cli.log_file) {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = tracing::dispatcher::set_default(&dispatch);
    tracing::info!("CLI arguments parsed, logging initialised, invoking run");

    match run(cli).await {
        Ok(result) if result.has_failures() => {
            tracing::warn!(failed = result.failed.len(), "CLI completed with failures");
            ExitCode::FAILURE
        }
        Ok(_) => {
            tracing::info!("CLI completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Upload failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
