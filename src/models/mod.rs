//! Normalized records produced by a scan.
//!
//! - [`SongData`] is the full track record, built through [`SongDataBuilder`].
//! - [`SongFeatures`] holds the audio analysis of a track and may be embedded
//!   in a [`SongData`], together with the derived [`SongDuration`].
//! - [`ReducedSongData`] is the compact projection written with `--reduced`.
//! - [`ScanRecord`] is either of the two output forms.
//!
//! All of them implement [`crate::flatten::Record`] with their fields listed in
//! output order.

mod features;
mod reduced;
mod song;

pub use features::SongDuration;
pub use features::SongFeatures;
pub use reduced::ReducedSongData;
pub use reduced::ScanRecord;
pub use song::SongData;
pub use song::SongDataBuilder;
