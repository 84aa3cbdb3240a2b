//! Spotify Catalog Analyser Library
//!
//! This library fetches track metadata, artist information and audio features
//! from the Spotify Web API for a playlist or an artist, normalizes them into
//! flat records and serializes the result to JSON.
//!
//! # Modules
//!
//! - `cli` - Command-line orchestration (scan, flatten, write, report)
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all layers
//! - `flatten` - Recursive record-to-mapping conversion
//! - `management` - Access token lifecycle and result file output
//! - `models` - Normalized track, audio feature and reduced records
//! - `scan` - Record builders for artist and playlist scans
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Upstream data structures
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotalyzer::{config, scan, spotify::SpotifyClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> spotalyzer::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::connect(config::credentials()?).await?;
//!     let records = scan::scan_playlist(&client, "37i9dQZF1DXcBWIGoYBM5M", true, &()).await?;
//!     println!("{}", records.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flatten;
pub mod management;
pub mod models;
pub mod scan;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::ScanError;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports a [`ScanError`], so callers
/// can tell upstream failures apart from validation problems.
///
/// # Example
///
/// ```
/// use spotalyzer::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, ScanError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Scanning playlist {}...", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} records", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 right after printing, so it is only
/// used at the outermost boundary of the binary.
///
/// # Example
///
/// ```
/// error!("Scan aborted: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("--reduced has no effect in artist mode");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
