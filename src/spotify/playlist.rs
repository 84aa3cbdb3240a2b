use crate::{
    Res, ScanError,
    types::{PlaylistItem, TrackDetail},
};

use super::SpotifyClient;

const ITEMS_PAGE_LIMIT: u32 = 100;

/// Retrieves the tracks of a playlist in their stored order.
///
/// # Errors
///
/// Besides remote failures, returns `ScanError::Validation` if an entry has
/// no track object (removed or unavailable tracks), reporting its 1-based
/// position.
pub async fn get_playlist_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
) -> Res<Vec<TrackDetail>> {
    let api_url = client.endpoint(&format!(
        "/playlists/{id}/tracks?limit={limit}",
        id = playlist_id,
        limit = ITEMS_PAGE_LIMIT
    ));
    let items = client.get_paged::<PlaylistItem>(api_url).await?;

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            item.track.ok_or_else(|| {
                ScanError::validation(format!(
                    "playlist {} entry {} has no track",
                    playlist_id,
                    idx + 1
                ))
            })
        })
        .collect()
}
