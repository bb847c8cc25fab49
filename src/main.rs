//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `safe_browse` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! Exit codes: 0 when every URL is "ok", 2 when at least one URL is flagged,
//! 1 on any error.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use safe_browse::config::Opt;
use safe_browse::initialization::init_logger_with;
use safe_browse::{HttpTransport, LookupClient, LookupResult};

const EXIT_FLAGGED: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // Lets SAFE_BROWSE_API_KEY live in a .env file instead of the shell
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&opt).await {
        Ok(result) => {
            print_result(&result, opt.json)?;
            if !result.all_ok() {
                process::exit(EXIT_FLAGGED);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("safe_browse error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(opt: &Opt) -> Result<LookupResult> {
    let transport = HttpTransport::new(opt.timeout_seconds, &opt.user_agent)
        .context("Failed to initialize HTTP transport")?;
    let client = LookupClient::new(opt.client_config(), transport)
        .context("Invalid client configuration")?;
    let result = client
        .lookup(opt.target())
        .await
        .context("Lookup failed")?;
    Ok(result)
}

fn print_result(result: &LookupResult, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{}", rendered);
    } else {
        for (url, verdict) in &result.verdicts {
            println!("{}\t{}", verdict, url);
        }
    }
    Ok(())
}
