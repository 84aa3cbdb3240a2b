use crate::{
    Res, ScanError,
    models::SongData,
    spotify::CatalogClient,
    types::{AlbumGroup, AlbumSummary},
};

use super::ScanProgress;

/// Builds a record for every track the artist has released or appears on.
///
/// The artist is looked up once and its name, uri, popularity and genres are
/// shared by all records. Albums are visited group by group (album, single,
/// appears_on), each group in API order; every track is then fetched in full
/// together with its audio features, whose tempo is halved above 135 BPM.
/// Records carry no position.
///
/// # Errors
///
/// Any failed lookup aborts the scan. A track without audio features is
/// reported as [`ScanError::RemoteApi`].
pub async fn scan_artist<C, P>(client: &C, artist_id: &str, progress: &P) -> Res<Vec<SongData>>
where
    C: CatalogClient,
    P: ScanProgress + ?Sized,
{
    let artist = client.get_artist(artist_id).await?;

    let mut albums: Vec<AlbumSummary> = Vec::new();
    for group in AlbumGroup::ALL {
        albums.extend(client.get_artist_albums(artist_id, group).await?);
    }

    let mut songs = Vec::new();
    for album in &albums {
        progress.album(album);

        for summary in client.get_album_tracks(&album.id).await? {
            let track = client.get_track(&summary.id).await?;
            progress.track(None, &track.name);

            let features = client
                .get_audio_features(&summary.id)
                .await?
                .ok_or_else(|| {
                    ScanError::remote(format!("no audio features for track {}", track.uri))
                })?
                .with_normalized_tempo();

            let song = SongData::builder()
                .track(track.uri, track.name, track.popularity)
                .artist(&artist)
                .album(album.name.as_str())
                .features(features)
                .build()?;
            songs.push(song);
        }
    }

    Ok(songs)
}
