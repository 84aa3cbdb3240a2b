use crate::{Res, types::TrackSummary};

use super::SpotifyClient;

const TRACKS_PAGE_LIMIT: u32 = 50;

/// Retrieves the full track listing of an album.
pub async fn get_album_tracks(client: &SpotifyClient, album_id: &str) -> Res<Vec<TrackSummary>> {
    let api_url = client.endpoint(&format!(
        "/albums/{id}/tracks?limit={limit}",
        id = album_id,
        limit = TRACKS_PAGE_LIMIT
    ));
    client.get_paged::<TrackSummary>(api_url).await
}
