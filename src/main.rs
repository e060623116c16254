//! Mastodon Backup - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mastodon_backup::{
    api::MastodonApi,
    backup::{Orchestrator, RunConfig},
    cli::Args,
    error::{exit_codes, Result},
    output::{
        print_backup_summary, print_banner, print_config_summary, print_error, print_info,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::FATAL)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load, merge CLI overrides and validate before touching the network
    let config = args.load_config()?;

    print_config_summary(
        &config.mastodon.api_base_url,
        config.options.status_limit,
        &config.output_directory().display().to_string(),
    );

    print_info("Connecting to Mastodon...");
    let api = MastodonApi::new(
        &config.mastodon.api_base_url,
        config.mastodon.access_token.clone(),
    )?;

    let backup = Orchestrator::new(&api, RunConfig::from_config(&config))
        .run()
        .await?;

    print_backup_summary(&backup);

    let failed = backup.failed_count();
    if failed > 0 {
        print_warning(&format!(
            "{} categor{} failed; see the log above",
            failed,
            if failed == 1 { "y" } else { "ies" }
        ));
    } else {
        print_success("Backup complete");
    }

    Ok(())
}
