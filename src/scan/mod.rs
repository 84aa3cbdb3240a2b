//! Record builders.
//!
//! [`scan_artist`] and [`scan_playlist`] turn catalog lookups into normalized
//! records. They only talk to the injected [`CatalogClient`] and report what
//! they are doing through a [`ScanProgress`] observer; they never touch the
//! console or the file system.
//!
//! Items are built strictly one after another. The first error aborts the
//! scan and nothing built so far is returned.

mod artist;
mod playlist;

use std::fmt;

use clap::ValueEnum;

use crate::types::AlbumSummary;

pub use artist::scan_artist;
pub use playlist::scan_playlist;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScanMode {
    #[default]
    Playlist,
    Artist,
}

impl ScanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Playlist => "playlist",
            ScanMode::Artist => "artist",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observer notified while a scan advances.
pub trait ScanProgress {
    fn album(&self, _album: &AlbumSummary) {}

    fn track(&self, _position: Option<u32>, _name: &str) {}
}

impl ScanProgress for () {}
