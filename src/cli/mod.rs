use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_BEFORE_DAY_NUMBER, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
};
use clap::Parser;

/// Open esa posts published on a given day in your browser
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Load configuration from FILE (default: $ESAMPO_CONFIG or ~/.esamporc)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Open posts from N days before today
    #[arg(short = 'b', long, value_name = "N", default_value_t = DEFAULT_BEFORE_DAY_NUMBER)]
    pub before_day_number: u32,

    /// First day of a range, used together with --end (format: YYYY-MM-DD or YYYYMMDD)
    #[arg(short = 's', long)]
    pub start: Option<String>,

    /// Last day of a range, inclusive (format: YYYY-MM-DD or YYYYMMDD)
    #[arg(short = 'e', long)]
    pub end: Option<String>,

    /// Open posts from every day of a month (format: YYYY-MM or YYYYMM)
    #[arg(short = 'm', long)]
    pub month: Option<String>,

    /// Only open posts written by USER instead of everyone but yourself
    #[arg(short = 'u', long, value_name = "USER")]
    pub user: Option<String>,

    /// Print the URLs instead of opening them
    #[arg(long)]
    pub dry_run: bool,

    /// Log output format
    #[arg(long, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Print verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
