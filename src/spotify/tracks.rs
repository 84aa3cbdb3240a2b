use crate::{
    Res,
    models::SongFeatures,
    types::{AudioFeaturesResponse, TrackDetail},
};

use super::SpotifyClient;

pub async fn get_track(client: &SpotifyClient, track_id: &str) -> Res<TrackDetail> {
    let api_url = client.endpoint(&format!("/tracks/{id}", id = track_id));
    client.get_json::<TrackDetail>(&api_url).await
}

/// Retrieves the audio features of a single track.
///
/// The batch endpoint is queried with one id; it answers `null` for tracks
/// without an analysis, which is returned as `Ok(None)`.
pub async fn get_audio_features(
    client: &SpotifyClient,
    track_id: &str,
) -> Res<Option<SongFeatures>> {
    let api_url = client.endpoint(&format!("/audio-features?ids={id}", id = track_id));
    let response = client.get_json::<AudioFeaturesResponse>(&api_url).await?;
    Ok(response.audio_features.into_iter().next().flatten())
}
