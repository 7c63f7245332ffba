//! `client <HOSTNAME:PORT/PATH> [-h]`: fetch a URL with a single GET and
//! print the response body, optionally preceded by the header block.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::debug;
use rawget_core::{write_response, Client, ClientConfig};

#[derive(Debug, Parser)]
#[command(
    name = "client",
    about = "Fetch a URL over plain HTTP/1.1 and print the response body",
    override_usage = "client HOSTNAME:PORT/PATH [-h]",
    disable_help_flag = true
)]
struct Cli {
    /// URL to fetch; the http:// or https:// prefix is optional.
    url: String,

    /// Print the response header block before the body.
    #[arg(short = 'h')]
    headers: bool,

    /// Give up connecting after this many seconds.
    #[arg(
        long,
        value_name = "SECS",
        env = "RAWGET_CONNECT_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    connect_timeout: Option<u64>,

    /// Give up waiting for response data after this many seconds.
    #[arg(
        long,
        value_name = "SECS",
        env = "RAWGET_READ_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    read_timeout: Option<u64>,

    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            connect_timeout: self.connect_timeout.map(Duration::from_secs),
            read_timeout: self.read_timeout.map(Duration::from_secs),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    debug!("fetching {} with {config:?}", cli.url);

    let response = Client::new(&config)
        .get(&cli.url)
        .with_context(|| format!("failed to fetch {}", cli.url))?;

    write_response(&mut io::stdout().lock(), &response, cli.headers)
        .context("failed to write response")?;
    Ok(())
}
