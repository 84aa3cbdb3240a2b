use crate::{
    Res, ScanError,
    models::{ScanRecord, SongData, SongDuration},
    spotify::CatalogClient,
    types::TrackDetail,
    utils::{self, CatalogKind},
};

use super::ScanProgress;

/// Builds one record per playlist entry, numbered from 1 in playlist order.
///
/// Track, album and first-artist identity come from the playlist item; the
/// artist is looked up again for popularity and genres. That lookup is repeated
/// for every entry, even when an artist recurs. Audio features are fetched per
/// track, their tempo halved above 135 BPM, and the duration split into minutes
/// and seconds. With `reduced` set, the compact projection is emitted instead
/// of the full record.
///
/// # Errors
///
/// The first failed lookup aborts the whole scan. Entries without an artist
/// or album are [`ScanError::Validation`]; missing audio features are
/// [`ScanError::RemoteApi`].
pub async fn scan_playlist<C, P>(
    client: &C,
    playlist_id: &str,
    reduced: bool,
    progress: &P,
) -> Res<Vec<ScanRecord>>
where
    C: CatalogClient,
    P: ScanProgress + ?Sized,
{
    let tracks = client.get_playlist_tracks(playlist_id).await?;

    let mut records = Vec::with_capacity(tracks.len());
    for (position, track) in (1u32..).zip(tracks) {
        progress.track(Some(position), &track.name);

        let song = build_entry(client, position, track).await?;
        let record = if reduced {
            ScanRecord::Reduced(song.reduced()?)
        } else {
            ScanRecord::Full(song)
        };
        records.push(record);
    }

    Ok(records)
}

async fn build_entry<C: CatalogClient>(
    client: &C,
    position: u32,
    track: TrackDetail,
) -> Res<SongData> {
    let main_artist = track.artists.first().ok_or_else(|| {
        ScanError::validation(format!("track {} has no artist", track.uri))
    })?;
    let artist_id = match (&main_artist.id, &main_artist.uri) {
        (Some(id), _) => id.clone(),
        (None, Some(uri)) => utils::parse_catalog_id(CatalogKind::Artist, uri)?,
        (None, None) => {
            return Err(ScanError::validation(format!(
                "artist '{}' of track {} has no id",
                main_artist.name, track.uri
            )));
        }
    };
    let artist_uri = main_artist
        .uri
        .clone()
        .unwrap_or_else(|| utils::catalog_uri(CatalogKind::Artist, &artist_id));
    let album = track
        .album
        .as_ref()
        .map(|a| a.name.clone())
        .ok_or_else(|| ScanError::validation(format!("track {} has no album", track.uri)))?;

    let artist_info = client.get_artist(&artist_id).await?;

    let features_id = match &track.id {
        Some(id) => id.clone(),
        None => utils::parse_catalog_id(CatalogKind::Track, &track.uri)?,
    };
    let features = client
        .get_audio_features(&features_id)
        .await?
        .ok_or_else(|| ScanError::remote(format!("no audio features for track {}", track.uri)))?
        .with_normalized_tempo();
    let duration = SongDuration::from_millis(features.duration_ms);

    SongData::builder()
        .position(position)
        .track(track.uri, track.name, track.popularity)
        .artist_identity(artist_uri, main_artist.name.clone())
        .artist_stats(artist_info.popularity, artist_info.genres)
        .album(album)
        .features(features)
        .duration(duration)
        .build()
}
