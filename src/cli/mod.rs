//! # CLI Module
//!
//! Command-line layer of the binary. It ties configuration, the Spotify
//! client, the record builders and the result writer together and gives the
//! user feedback while a scan runs.
//!
//! ## Data Flow
//!
//! ```text
//! Arguments + environment
//!     ↓
//! SpotifyClient (client-credentials token)
//!     ↓
//! scan_playlist / scan_artist
//!     ↓
//! flatten → results/<mode>/<output>
//! ```
//!
//! Errors are returned to `main`, which prints them with their causes and
//! exits non-zero. Nothing is written when a scan fails.
//!
//! ## Usage
//!
//! ```bash
//! spotalyzer --id spotify:playlist:37i9dQZF1DXcBWIGoYBM5M --reduced
//! spotalyzer --mode artist --id 4NHQUGzhtTLFvgF5SZesLK --output tove-lo.json
//! spotalyzer -i https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M --table
//! ```

mod scan;

pub use scan::ScanOptions;
pub use scan::scan;
pub use scan::table_rows;
