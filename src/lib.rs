/*!
# esampo

esampo opens the esa.io posts published on a given day, or on every day of a
range or month, in your default browser. By default it skips your own posts;
with `--user` it opens only one author's posts.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: TOML configuration loading and validation
- `dates`: Turning date flags into the ordered list of days to query
- `filter`: Author filtering of fetched posts
- `esa`: esa API client, response models, and per-day search queries
- `browser`: Opening URLs (or printing them for `--dry-run`)
- `ops`: The sequential, fail-fast loop tying the above together
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use esampo::browser::SystemBrowser;
use esampo::esa::EsaClient;
use esampo::{Config, DateSpec, FilterSpec};

fn main() -> esampo::AppResult<()> {
    let config = Config::load(None)?;
    let client = EsaClient::new(config.api_url(), config.access_token.clone());
    let filter = FilterSpec::from_cli_args(None, &config.my_screen_name);
    let today = chrono::Local::now().date_naive();

    esampo::ops::run(
        &DateSpec::Month { year: 2024, month: 6 },
        &filter,
        &config,
        today,
        &client,
        &SystemBrowser,
    )?;
    Ok(())
}
```
*/

/// Opening URLs in a browser
pub mod browser;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Date range resolution
pub mod dates;
/// Error types and utilities for error handling
pub mod errors;
/// esa API access
pub mod esa;
/// Author filtering
pub mod filter;
/// High-level operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use dates::DateSpec;
pub use errors::{AppError, AppResult};
pub use filter::FilterSpec;
