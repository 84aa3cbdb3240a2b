use crate::{
    Res, ScanError,
    flatten::{FieldValue, Record},
    types::ArtistInfo,
};

use super::{ReducedSongData, SongDuration, SongFeatures};

/// Normalized description of one track.
///
/// `position` is only set for tracks coming from a playlist scan. Instances
/// are produced by [`SongDataBuilder`] and not changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SongData {
    pub position: Option<u32>,
    pub uri: String,
    pub name: String,
    pub artist_uri: String,
    pub artist_name: String,
    pub artist_pop: u32,
    pub artist_genres: Vec<String>,
    pub album: String,
    pub track_pop: u32,
    pub features: Option<SongFeatures>,
    pub duration: Option<SongDuration>,
}

impl SongData {
    pub fn builder() -> SongDataBuilder {
        SongDataBuilder::default()
    }

    /// Projects the record down to its compact display form.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Validation`] if the record carries no audio features.
    pub fn reduced(&self) -> Res<ReducedSongData> {
        let features = self.features.as_ref().ok_or_else(|| {
            ScanError::validation(format!(
                "cannot reduce '{}' ({}): no audio features",
                self.name, self.uri
            ))
        })?;
        let duration = self
            .duration
            .unwrap_or_else(|| SongDuration::from_millis(features.duration_ms));

        Ok(ReducedSongData {
            position: self.position,
            name: self.name.clone(),
            artist_name: self.artist_name.clone(),
            album: self.album.clone(),
            tempo: features.tempo,
            duration: duration.formatted(),
        })
    }
}

impl Record for SongData {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        vec![
            ("position", FieldValue::scalar(self.position)),
            ("uri", FieldValue::scalar(self.uri.as_str())),
            ("name", FieldValue::scalar(self.name.as_str())),
            ("artist_uri", FieldValue::scalar(self.artist_uri.as_str())),
            ("artist_name", FieldValue::scalar(self.artist_name.as_str())),
            ("artist_pop", FieldValue::scalar(self.artist_pop)),
            ("artist_genres", FieldValue::scalar(self.artist_genres.clone())),
            ("album", FieldValue::scalar(self.album.as_str())),
            ("track_pop", FieldValue::scalar(self.track_pop)),
            ("features", FieldValue::optional(self.features.as_ref())),
            ("duration", FieldValue::optional(self.duration.as_ref())),
        ]
    }
}

/// Accumulates the pieces of a [`SongData`] gathered from several API calls.
#[derive(Debug, Default, Clone)]
pub struct SongDataBuilder {
    position: Option<u32>,
    uri: Option<String>,
    name: Option<String>,
    artist_uri: Option<String>,
    artist_name: Option<String>,
    artist_pop: u32,
    artist_genres: Vec<String>,
    album: Option<String>,
    track_pop: u32,
    features: Option<SongFeatures>,
    duration: Option<SongDuration>,
}

impl SongDataBuilder {
    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn track(mut self, uri: impl Into<String>, name: impl Into<String>, popularity: u32) -> Self {
        self.uri = Some(uri.into());
        self.name = Some(name.into());
        self.track_pop = popularity;
        self
    }

    /// Copies identity, popularity and genres from a full artist lookup.
    pub fn artist(mut self, artist: &ArtistInfo) -> Self {
        self.artist_uri = Some(artist.uri.clone());
        self.artist_name = Some(artist.name.clone());
        self.artist_pop = artist.popularity;
        self.artist_genres = artist.genres.clone();
        self
    }

    pub fn artist_identity(mut self, uri: impl Into<String>, name: impl Into<String>) -> Self {
        self.artist_uri = Some(uri.into());
        self.artist_name = Some(name.into());
        self
    }

    pub fn artist_stats(mut self, popularity: u32, genres: Vec<String>) -> Self {
        self.artist_pop = popularity;
        self.artist_genres = genres;
        self
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn features(mut self, features: SongFeatures) -> Self {
        self.features = Some(features);
        self
    }

    pub fn duration(mut self, duration: SongDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// # Errors
    ///
    /// Returns [`ScanError::Validation`] naming the first required field
    /// (track uri, track name, artist uri, artist name, album) that was never set.
    pub fn build(self) -> Res<SongData> {
        Ok(SongData {
            position: self.position,
            uri: required(self.uri, "uri")?,
            name: required(self.name, "name")?,
            artist_uri: required(self.artist_uri, "artist_uri")?,
            artist_name: required(self.artist_name, "artist_name")?,
            artist_pop: self.artist_pop,
            artist_genres: self.artist_genres,
            album: required(self.album, "album")?,
            track_pop: self.track_pop,
            features: self.features,
            duration: self.duration,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Res<String> {
    value.ok_or_else(|| ScanError::validation(format!("track record is missing '{}'", field)))
}
