use serde::Deserialize;

use crate::{
    flatten::{FieldValue, Record},
    utils,
};

/// Acoustic descriptors of a track as returned by `/audio-features`.
///
/// Built once from the API response and never modified afterwards; tempo
/// normalization produces a new value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SongFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub uri: String,
    pub track_href: String,
    pub analysis_url: String,
    pub duration_ms: u64,
    pub time_signature: i32,
}

impl SongFeatures {
    /// Returns a copy whose tempo is halved when it looks like double time.
    pub fn with_normalized_tempo(self) -> Self {
        Self {
            tempo: utils::normalize_tempo(self.tempo),
            ..self
        }
    }
}

impl Record for SongFeatures {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        vec![
            ("danceability", FieldValue::scalar(self.danceability)),
            ("energy", FieldValue::scalar(self.energy)),
            ("key", FieldValue::scalar(self.key)),
            ("loudness", FieldValue::scalar(self.loudness)),
            ("mode", FieldValue::scalar(self.mode)),
            ("speechiness", FieldValue::scalar(self.speechiness)),
            ("acousticness", FieldValue::scalar(self.acousticness)),
            ("instrumentalness", FieldValue::scalar(self.instrumentalness)),
            ("liveness", FieldValue::scalar(self.liveness)),
            ("valence", FieldValue::scalar(self.valence)),
            ("tempo", FieldValue::scalar(self.tempo)),
            ("type", FieldValue::scalar(self.kind.as_str())),
            ("id", FieldValue::scalar(self.id.as_str())),
            ("uri", FieldValue::scalar(self.uri.as_str())),
            ("track_href", FieldValue::scalar(self.track_href.as_str())),
            ("analysis_url", FieldValue::scalar(self.analysis_url.as_str())),
            ("duration_ms", FieldValue::scalar(self.duration_ms)),
            ("time_signature", FieldValue::scalar(self.time_signature)),
        ]
    }
}

/// Track length split into whole minutes and remaining seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SongDuration {
    pub minutes: u64,
    pub seconds: f64,
}

impl SongDuration {
    pub fn from_millis(duration_ms: u64) -> Self {
        Self {
            minutes: duration_ms / 60_000,
            seconds: (duration_ms % 60_000) as f64 / 1000.0,
        }
    }

    /// `MM:S.mmm`: minutes zero-padded to two digits, seconds with three decimals.
    pub fn formatted(&self) -> String {
        format!("{:02}:{:.3}", self.minutes, self.seconds)
    }
}

impl Record for SongDuration {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        vec![
            ("minutes", FieldValue::scalar(self.minutes)),
            ("seconds", FieldValue::scalar(self.seconds)),
        ]
    }
}
