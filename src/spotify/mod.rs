//! # Spotify Integration Module
//!
//! This module is the client adapter between the record builders and the
//! Spotify Web API. It authenticates with the client-credentials flow (no end
//! user involved) and exposes the handful of catalog lookups a scan needs
//! through the [`CatalogClient`] trait.
//!
//! ## Architecture
//!
//! ```text
//! Record Builders (scan)
//!          ↓
//! CatalogClient trait
//!          ↓
//! SpotifyClient
//!     ├── Artists (info, album lists)
//!     ├── Albums (track listings)
//!     ├── Tracks (details, audio features)
//!     └── Playlists (ordered track listing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /artists/{id}` - Artist name, popularity and genres
//! - `GET /artists/{id}/albums` - Albums of one `include_groups` group
//! - `GET /albums/{id}/tracks` - Album track listing
//! - `GET /tracks/{id}` - Full track object
//! - `GET /audio-features?ids={id}` - Audio analysis summary
//! - `GET /playlists/{id}/tracks` - Playlist items in playlist order
//! - `POST /api/token` - Client-credentials token exchange
//!
//! Paged endpoints are followed through their `next` links until exhausted.
//!
//! ## Error Handling
//!
//! Every failure, whether transport, non-success status or undecodable body,
//! is reported as [`ScanError::RemoteApi`]. Nothing is retried; requests are
//! issued one at a time and each is awaited before the next one starts.

pub mod albums;
pub mod artists;
pub mod playlist;
pub mod tracks;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    Res, ScanError, config,
    config::Credentials,
    management::TokenManager,
    models::SongFeatures,
    types::{AlbumGroup, AlbumSummary, ArtistInfo, Paging, TrackDetail, TrackSummary},
};

/// Catalog lookups used by the record builders.
///
/// Implemented by [`SpotifyClient`] for real scans and by fixtures in tests.
#[allow(async_fn_in_trait)]
pub trait CatalogClient {
    async fn get_artist(&self, artist_id: &str) -> Res<ArtistInfo>;

    async fn get_artist_albums(&self, artist_id: &str, group: AlbumGroup)
    -> Res<Vec<AlbumSummary>>;

    async fn get_album_tracks(&self, album_id: &str) -> Res<Vec<TrackSummary>>;

    async fn get_track(&self, track_id: &str) -> Res<TrackDetail>;

    /// `Ok(None)` when the API has no analysis for the track.
    async fn get_audio_features(&self, track_id: &str) -> Res<Option<SongFeatures>>;

    /// Tracks in stored playlist order.
    async fn get_playlist_tracks(&self, playlist_id: &str) -> Res<Vec<TrackDetail>>;
}

pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_mgr: Mutex<TokenManager>,
}

impl SpotifyClient {
    /// Authenticates against the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RemoteApi`] if the token exchange fails.
    pub async fn connect(credentials: Credentials) -> Res<Self> {
        Self::connect_to(
            credentials,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        )
        .await
    }

    pub async fn connect_to(
        credentials: Credentials,
        api_url: String,
        token_url: String,
    ) -> Res<Self> {
        let http = Client::new();
        let token_mgr = TokenManager::authorize(&http, credentials, token_url).await?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token_mgr: Mutex::new(token_mgr),
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let token = self.token_mgr.lock().await.get_valid_token(&self.http).await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScanError::remote(format!(
                "GET {} failed with {}: {}",
                url, status, body
            )));
        }

        Ok(response.json::<T>().await?)
    }

    /// Collects the items of every page, starting at `url`.
    pub(crate) async fn get_paged<T: DeserializeOwned>(&self, url: String) -> Res<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(url);

        while let Some(url) = next {
            let page = self.get_json::<Paging<T>>(&url).await?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }
}

impl CatalogClient for SpotifyClient {
    async fn get_artist(&self, artist_id: &str) -> Res<ArtistInfo> {
        artists::get_artist(self, artist_id).await
    }

    async fn get_artist_albums(
        &self,
        artist_id: &str,
        group: AlbumGroup,
    ) -> Res<Vec<AlbumSummary>> {
        artists::get_artist_albums(self, artist_id, group).await
    }

    async fn get_album_tracks(&self, album_id: &str) -> Res<Vec<TrackSummary>> {
        albums::get_album_tracks(self, album_id).await
    }

    async fn get_track(&self, track_id: &str) -> Res<TrackDetail> {
        tracks::get_track(self, track_id).await
    }

    async fn get_audio_features(&self, track_id: &str) -> Res<Option<SongFeatures>> {
        tracks::get_audio_features(self, track_id).await
    }

    async fn get_playlist_tracks(&self, playlist_id: &str) -> Res<Vec<TrackDetail>> {
        playlist::get_playlist_tracks(self, playlist_id).await
    }
}
