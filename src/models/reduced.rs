use crate::flatten::{FieldValue, Record};

use super::SongData;

/// Compact, display-oriented projection of a [`SongData`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedSongData {
    pub position: Option<u32>,
    pub name: String,
    pub artist_name: String,
    pub album: String,
    pub tempo: f64,
    pub duration: String,
}

impl Record for ReducedSongData {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        vec![
            ("position", FieldValue::scalar(self.position)),
            ("name", FieldValue::scalar(self.name.as_str())),
            ("artist_name", FieldValue::scalar(self.artist_name.as_str())),
            ("album", FieldValue::scalar(self.album.as_str())),
            ("tempo", FieldValue::scalar(self.tempo)),
            ("duration", FieldValue::scalar(self.duration.as_str())),
        ]
    }
}

/// One entry of a scan's output collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanRecord {
    Full(SongData),
    Reduced(ReducedSongData),
}

impl ScanRecord {
    pub fn position(&self) -> Option<u32> {
        match self {
            ScanRecord::Full(song) => song.position,
            ScanRecord::Reduced(song) => song.position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ScanRecord::Full(song) => &song.name,
            ScanRecord::Reduced(song) => &song.name,
        }
    }

    pub fn artist_name(&self) -> &str {
        match self {
            ScanRecord::Full(song) => &song.artist_name,
            ScanRecord::Reduced(song) => &song.artist_name,
        }
    }

    pub fn album(&self) -> &str {
        match self {
            ScanRecord::Full(song) => &song.album,
            ScanRecord::Reduced(song) => &song.album,
        }
    }

    pub fn tempo(&self) -> Option<f64> {
        match self {
            ScanRecord::Full(song) => song.features.as_ref().map(|f| f.tempo),
            ScanRecord::Reduced(song) => Some(song.tempo),
        }
    }

    pub fn duration(&self) -> Option<String> {
        match self {
            ScanRecord::Full(song) => song.duration.map(|d| d.formatted()),
            ScanRecord::Reduced(song) => Some(song.duration.clone()),
        }
    }
}

impl From<SongData> for ScanRecord {
    fn from(song: SongData) -> Self {
        ScanRecord::Full(song)
    }
}

impl From<ReducedSongData> for ScanRecord {
    fn from(song: ReducedSongData) -> Self {
        ScanRecord::Reduced(song)
    }
}

impl Record for ScanRecord {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        match self {
            ScanRecord::Full(song) => song.fields(),
            ScanRecord::Reduced(song) => song.fields(),
        }
    }
}
