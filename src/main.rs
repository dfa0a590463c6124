//! Post a message to Slack from the command line.
//!
//! ```text
//! SLACK_WEBHOOK_URL=https://hooks.slack.com/... slackem -color=green deploys Shipped it!
//! ```
//!
//! All configuration is via environment variables, see [config]. Exactly one
//! delivery attempt is made; a failed delivery is logged but doesn't change
//! the exit status, only bad usage does.

use dotenvy::dotenv;
use slack::api::{HttpTransport, WebhookClient};
use std::{env, io, process::ExitCode};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod slack;

/// Application entrypoint. Initialises tracing, loads any `.env`, then
/// validates and posts.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    if dotenv().is_err() {
        debug!("No .env found");
    }

    let argv: Vec<_> = env::args_os().collect();
    let program = cli::program_name(&argv);
    let config = config::Config::from_env();

    let invocation = match cli::prepare(&argv, &config) {
        Ok(x) => x,
        Err(cli::Fatal::Args(e)) if cli::is_informational(&e) => e.exit(),
        Err(fatal) => {
            // Nothing useful left to do if stderr itself is broken.
            let _ = cli::report_fatal(&program, &fatal, &mut io::stderr().lock());
            return ExitCode::FAILURE;
        }
    };

    let client = WebhookClient::new(HttpTransport::new(), &config);
    if let Err(e) = client
        .post_message(&invocation.channel, &invocation.message, &invocation.color)
        .await
    {
        error!("[slack] error! {}", e);
    }

    ExitCode::SUCCESS
}
