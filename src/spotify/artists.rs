use crate::{
    Res,
    types::{AlbumGroup, AlbumSummary, ArtistInfo},
};

use super::SpotifyClient;

const ALBUMS_PAGE_LIMIT: u32 = 50;

/// Retrieves name, popularity and genres of an artist.
///
/// # Errors
///
/// Returns `ScanError::RemoteApi` for unknown ids, network failures or
/// unexpected payloads.
pub async fn get_artist(client: &SpotifyClient, artist_id: &str) -> Res<ArtistInfo> {
    let api_url = client.endpoint(&format!("/artists/{id}", id = artist_id));
    client.get_json::<ArtistInfo>(&api_url).await
}

/// Retrieves every album of one release group for an artist, in API order.
///
/// Uses `/artists/{id}/albums` with `include_groups` set to the single
/// `group`, following `next` links until all pages are read.
pub async fn get_artist_albums(
    client: &SpotifyClient,
    artist_id: &str,
    group: AlbumGroup,
) -> Res<Vec<AlbumSummary>> {
    let api_url = client.endpoint(&format!(
        "/artists/{id}/albums?include_groups={include_groups}&limit={limit}",
        id = artist_id,
        include_groups = group,
        limit = ALBUMS_PAGE_LIMIT
    ));
    client.get_paged::<AlbumSummary>(api_url).await
}
