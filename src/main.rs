/*!
# esampo - Browse esa posts by day

esampo is a command-line tool that opens the esa.io posts published on a given
day (or range of days) in your default browser, skipping your own posts.

This file contains the main application flow, coordinating the various components
to implement the functionality.

## Usage

```
esampo [OPTIONS]

Options:
  -c, --config <FILE>              Load configuration from FILE
  -b, --before-day-number <N>      Open posts from N days before today [default: 1]
  -s, --start <START>              First day of a range, used with --end (YYYY-MM-DD or YYYYMMDD)
  -e, --end <END>                  Last day of a range, inclusive
  -m, --month <MONTH>              Open posts from every day of a month (YYYY-MM)
  -u, --user <USER>                Only open posts written by USER
      --dry-run                    Print the URLs instead of opening them
      --log-format <LOG_FORMAT>    Log output format [default: text] [possible values: text, json]
  -v, --verbose                    Print verbose output
  -h, --help                       Print help
  -V, --version                    Print version
```

## Configuration

A TOML file at `~/.esamporc` (or `$ESAMPO_CONFIG`, or `--config`):

```toml
access_token = "..."
team_name = "myteam"
my_screen_name = "alice"
path = "日報/%Y/%m/%d"
```
*/

use chrono::Local;
use clap::Parser;
use esampo::browser::{Browser, DryRunBrowser, SystemBrowser};
use esampo::cli::CliArgs;
use esampo::config::Config;
use esampo::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use esampo::dates::DateSpec;
use esampo::errors::AppResult;
use esampo::esa::EsaClient;
use esampo::filter::FilterSpec;
use esampo::ops;
use std::io;
use std::process::ExitCode;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
/// Logs go to stderr so that `--dry-run` output on stdout stays clean.
fn init_tracing(log_format: &str, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if log_format == LOG_FORMAT_JSON {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
}

/// Runs one invocation: load config, resolve dates, open posts.
fn run(args: &CliArgs) -> AppResult<()> {
    // Obtain the current date once at the beginning
    let today = Local::now().date_naive();

    info!("Loading configuration");
    let config = Config::load(args.config.as_deref())?;
    debug!("Configuration: {:?}", config);

    let date_spec = DateSpec::from_cli_args(
        args.before_day_number,
        args.start.as_deref(),
        args.end.as_deref(),
        args.month.as_deref(),
    )?;
    let filter = FilterSpec::from_cli_args(args.user.as_deref(), &config.my_screen_name);
    debug!("Date spec: {:?}, filter: {:?}", date_spec, filter);

    let client = EsaClient::new(config.api_url(), config.access_token.clone());
    let browser: Box<dyn Browser> = if args.dry_run {
        Box::new(DryRunBrowser::new(io::stdout()))
    } else {
        Box::new(SystemBrowser)
    };

    let report = ops::run(
        &date_spec,
        &filter,
        &config,
        today,
        &client,
        browser.as_ref(),
    )?;

    info!(
        dates = report.dates_queried,
        fetched = report.posts_fetched,
        skipped = report.posts_skipped,
        opened = report.urls_opened,
        "Finished"
    );
    Ok(())
}

/// The main entry point for the esampo application.
///
/// Parses arguments, sets up logging under a root span carrying a per-run
/// correlation id, and maps any error to exit status 1. Tabs opened before a
/// failure stay open.
fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args.log_format, args.verbose);

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
