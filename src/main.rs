//! Interactive header echo client.
//!
//! Build a set of `name value` pairs on the console, then send them to an
//! echo endpoint as a GET query string or a POST form and print the reply.
//!
//! # Architecture Overview
//!
//! ```text
//!     stdin ──▶ repl::command ──▶ repl::session ──▶ stdout
//!                                   │       ▲
//!                         HeaderStore       │ EchoResponse
//!                                   ▼       │
//!                          headers::encode  │
//!                                   │       │
//!                                   ▼       │
//!                      http::PreparedRequest ──▶ http::EchoClient ──▶ echo server
//!
//!     config (defaults → TOML file → flags)   observability (tracing → stderr)
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;

use header_echo::config::{resolve_config, ConfigOverrides};
use header_echo::observability::init_logging;
use header_echo::{ClientConfig, EchoClient, Session};

#[derive(Parser)]
#[command(name = "header-echo")]
#[command(
    about = "Build header pairs interactively and echo them through GET or POST",
    long_about = None
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the GET endpoint.
    #[arg(long)]
    get_url: Option<String>,

    /// Override the POST endpoint.
    #[arg(long)]
    post_url: Option<String>,

    /// Overall request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Ignore HTTP_PROXY / HTTPS_PROXY from the environment.
    #[arg(long)]
    no_proxy: bool,

    /// Pretty-print replies that are JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    match start(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn error_message(err: &dyn Error) -> String {
    format!("Error: {}", err)
}

fn start(cli: Cli) -> Result<(), Box<dyn Error>> {
    let overrides = ConfigOverrides {
        get_url: cli.get_url,
        post_url: cli.post_url,
        request_secs: cli.timeout,
        no_proxy: cli.no_proxy,
        pretty_json: cli.pretty,
    };
    let config = resolve_config(cli.config.as_deref(), overrides)?;

    init_logging(&config.observability);

    tracing::info!(
        get_url = %config.endpoints.get_url,
        post_url = %config.endpoints.post_url,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(config));

    // An unfinished stdin read after Ctrl-C would otherwise hold the runtime open.
    runtime.shutdown_timeout(Duration::from_millis(100));

    tracing::info!("Session ended");
    result
}

async fn run(config: ClientConfig) -> Result<(), Box<dyn Error>> {
    let client = EchoClient::new(&config)?;
    let mut session = Session::new(client, &config, std::io::stdout());

    session
        .run_until(BufReader::new(tokio::io::stdin()), tokio::signal::ctrl_c())
        .await?;

    Ok(())
}
