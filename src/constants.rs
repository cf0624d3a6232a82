//! Constants used throughout the application.
//!
//! This module contains all constants used in esampo, organized into logical
//! groups. Having constants centralized makes them easier to find, modify, and
//! reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "esampo";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Open esa posts published on a given day in your browser";

// CLI Arguments & Defaults
/// Default number of days before today when no range or month is given (yesterday).
pub const DEFAULT_BEFORE_DAY_NUMBER: u32 = 1;
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for overriding the config file location.
pub const ENV_VAR_ESAMPO_CONFIG: &str = "ESAMPO_CONFIG";
/// Default config file, relative to the user's home directory.
pub const DEFAULT_CONFIG_PATH: &str = "~/.esamporc";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// esa API
/// Base URL of the esa API.
pub const DEFAULT_API_URL: &str = "https://api.esa.io";
/// Page size requested from the posts endpoint. Only the first page is read.
pub const POSTS_PER_PAGE: u32 = 100;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Human-readable description of accepted date formats, used in error messages.
pub const DATE_FORMAT_HINT: &str = "YYYY-MM-DD or YYYYMMDD";
/// Human-readable description of accepted month formats, used in error messages.
pub const MONTH_FORMAT_HINT: &str = "YYYY-MM or YYYYMM";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "esampo";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
