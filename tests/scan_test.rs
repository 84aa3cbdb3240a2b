use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use spotalyzer::models::{ScanRecord, SongFeatures};
use spotalyzer::scan::{ScanProgress, scan_artist, scan_playlist};
use spotalyzer::spotify::CatalogClient;
use spotalyzer::types::{
    AlbumGroup, AlbumRef, AlbumSummary, ArtistInfo, ArtistRef, TrackDetail, TrackSummary,
};
use spotalyzer::{Res, ScanError};

/// In-memory catalog that records every lookup it serves.
#[derive(Default)]
struct FixtureClient {
    artists: HashMap<String, ArtistInfo>,
    albums: HashMap<(String, AlbumGroup), Vec<AlbumSummary>>,
    album_tracks: HashMap<String, Vec<TrackSummary>>,
    tracks: HashMap<String, TrackDetail>,
    features: HashMap<String, SongFeatures>,
    failing_features: HashSet<String>,
    playlist: Vec<TrackDetail>,
    calls: RefCell<Vec<String>>,
}

impl FixtureClient {
    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CatalogClient for FixtureClient {
    async fn get_artist(&self, artist_id: &str) -> Res<ArtistInfo> {
        self.log(format!("artist:{}", artist_id));
        self.artists
            .get(artist_id)
            .cloned()
            .ok_or_else(|| ScanError::remote(format!("404 artist {}", artist_id)))
    }

    async fn get_artist_albums(
        &self,
        artist_id: &str,
        group: AlbumGroup,
    ) -> Res<Vec<AlbumSummary>> {
        self.log(format!("albums:{}:{}", artist_id, group));
        Ok(self
            .albums
            .get(&(artist_id.to_string(), group))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_album_tracks(&self, album_id: &str) -> Res<Vec<TrackSummary>> {
        self.log(format!("album_tracks:{}", album_id));
        Ok(self.album_tracks.get(album_id).cloned().unwrap_or_default())
    }

    async fn get_track(&self, track_id: &str) -> Res<TrackDetail> {
        self.log(format!("track:{}", track_id));
        self.tracks
            .get(track_id)
            .cloned()
            .ok_or_else(|| ScanError::remote(format!("404 track {}", track_id)))
    }

    async fn get_audio_features(&self, track_id: &str) -> Res<Option<SongFeatures>> {
        self.log(format!("features:{}", track_id));
        if self.failing_features.contains(track_id) {
            return Err(ScanError::remote("429 Too Many Requests"));
        }
        Ok(self.features.get(track_id).cloned())
    }

    async fn get_playlist_tracks(&self, playlist_id: &str) -> Res<Vec<TrackDetail>> {
        self.log(format!("playlist:{}", playlist_id));
        Ok(self.playlist.clone())
    }
}

#[derive(Default)]
struct RecordingProgress {
    tracks: RefCell<Vec<(Option<u32>, String)>>,
    albums: RefCell<Vec<String>>,
}

impl ScanProgress for RecordingProgress {
    fn album(&self, album: &AlbumSummary) {
        self.albums.borrow_mut().push(album.name.clone());
    }

    fn track(&self, position: Option<u32>, name: &str) {
        self.tracks.borrow_mut().push((position, name.to_string()));
    }
}

fn artist(id: &str, popularity: u32, genre: &str) -> ArtistInfo {
    ArtistInfo {
        id: id.to_string(),
        uri: format!("spotify:artist:{}", id),
        name: format!("Artist {}", id),
        popularity,
        genres: vec![genre.to_string()],
    }
}

fn album(id: &str, group: AlbumGroup) -> AlbumSummary {
    AlbumSummary {
        id: id.to_string(),
        name: format!("Album {}", id),
        album_type: "album".to_string(),
        album_group: Some(group.to_string()),
        uri: Some(format!("spotify:album:{}", id)),
    }
}

fn track(id: &str, artist_id: &str, album_name: &str, popularity: u32) -> TrackDetail {
    TrackDetail {
        id: Some(id.to_string()),
        name: format!("Song {}", id),
        uri: format!("spotify:track:{}", id),
        popularity,
        artists: vec![ArtistRef {
            id: Some(artist_id.to_string()),
            uri: Some(format!("spotify:artist:{}", artist_id)),
            name: format!("Artist {}", artist_id),
        }],
        album: Some(AlbumRef {
            id: None,
            name: album_name.to_string(),
        }),
    }
}

fn features(id: &str, tempo: f64, duration_ms: u64) -> SongFeatures {
    SongFeatures {
        danceability: 0.5,
        energy: 0.5,
        key: 1,
        loudness: -6.0,
        mode: 1,
        speechiness: 0.05,
        acousticness: 0.2,
        instrumentalness: 0.0,
        liveness: 0.1,
        valence: 0.4,
        tempo,
        kind: "audio_features".to_string(),
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        track_href: format!("https://api.spotify.com/v1/tracks/{}", id),
        analysis_url: format!("https://api.spotify.com/v1/audio-analysis/{}", id),
        duration_ms,
        time_signature: 4,
    }
}

fn summary(id: &str) -> TrackSummary {
    TrackSummary {
        id: id.to_string(),
        name: format!("Song {}", id),
        uri: format!("spotify:track:{}", id),
    }
}

/// Three tracks by three different artists.
fn playlist_fixture() -> FixtureClient {
    let mut client = FixtureClient::default();
    for (idx, (t, a, tempo)) in [("t1", "a1", 150.0), ("t2", "a2", 120.0), ("t3", "a3", 135.0)]
        .into_iter()
        .enumerate()
    {
        client
            .artists
            .insert(a.to_string(), artist(a, 10 * (idx as u32 + 1), &format!("genre-{}", a)));
        client
            .playlist
            .push(track(t, a, &format!("Album of {}", t), 40 + idx as u32));
        client
            .features
            .insert(t.to_string(), features(t, tempo, 185000 + idx as u64));
    }
    client
}

/// One artist with an album, a single and an appears_on release.
fn artist_fixture() -> FixtureClient {
    let mut client = FixtureClient::default();
    client.artists.insert("a1".to_string(), artist("a1", 80, "synthpop"));
    client.albums.insert(
        ("a1".to_string(), AlbumGroup::Album),
        vec![album("al1", AlbumGroup::Album)],
    );
    client.albums.insert(
        ("a1".to_string(), AlbumGroup::Single),
        vec![album("si1", AlbumGroup::Single)],
    );
    client.albums.insert(
        ("a1".to_string(), AlbumGroup::AppearsOn),
        vec![album("ap1", AlbumGroup::AppearsOn)],
    );
    client
        .album_tracks
        .insert("al1".to_string(), vec![summary("t1"), summary("t2")]);
    client.album_tracks.insert("si1".to_string(), vec![summary("t3")]);
    client.album_tracks.insert("ap1".to_string(), vec![summary("t4")]);
    for (idx, t) in ["t1", "t2", "t3", "t4"].into_iter().enumerate() {
        // album tracks only carry the id; the detail has the real popularity
        client
            .tracks
            .insert(t.to_string(), track(t, "other", "ignored", 60 + idx as u32));
        client
            .features
            .insert(t.to_string(), features(t, 140.0, 200000));
    }
    client
}

#[tokio::test]
async fn test_playlist_scan_numbers_entries_in_order() {
    let client = playlist_fixture();

    let records = scan_playlist(&client, "pl1", false, &()).await.unwrap();
    assert_eq!(records.len(), 3);

    for (idx, record) in records.iter().enumerate() {
        let song = match record {
            ScanRecord::Full(song) => song,
            ScanRecord::Reduced(_) => panic!("expected full records"),
        };
        let n = idx + 1;
        assert_eq!(song.position, Some(n as u32));
        assert_eq!(song.name, format!("Song t{}", n));
        assert_eq!(song.uri, format!("spotify:track:t{}", n));
        // artist fields belong to the entry's own artist
        assert_eq!(song.artist_uri, format!("spotify:artist:a{}", n));
        assert_eq!(song.artist_name, format!("Artist a{}", n));
        assert_eq!(song.artist_pop, 10 * n as u32);
        assert_eq!(song.artist_genres, vec![format!("genre-a{}", n)]);
        assert_eq!(song.album, format!("Album of t{}", n));
        assert_eq!(song.track_pop, 40 + idx as u32);
    }
}

#[tokio::test]
async fn test_playlist_scan_normalizes_tempo_and_duration() {
    let client = playlist_fixture();

    let records = scan_playlist(&client, "pl1", false, &()).await.unwrap();
    let tempos: Vec<f64> = records.iter().map(|r| r.tempo().unwrap()).collect();
    // 150 is halved, 120 and the 135 threshold are kept
    assert_eq!(tempos, vec![75.0, 120.0, 135.0]);

    match &records[0] {
        ScanRecord::Full(song) => {
            let duration = song.duration.unwrap();
            assert_eq!(duration.minutes, 3);
            assert_eq!(duration.seconds, 5.0);
        }
        ScanRecord::Reduced(_) => panic!("expected full records"),
    }
}

#[tokio::test]
async fn test_playlist_scan_reduced_output() {
    let client = playlist_fixture();

    let records = scan_playlist(&client, "pl1", true, &()).await.unwrap();
    assert_eq!(records.len(), 3);

    match &records[0] {
        ScanRecord::Reduced(song) => {
            assert_eq!(song.position, Some(1));
            assert_eq!(song.name, "Song t1");
            assert_eq!(song.artist_name, "Artist a1");
            assert_eq!(song.album, "Album of t1");
            assert_eq!(song.tempo, 75.0);
            assert_eq!(song.duration, "03:5.000");
        }
        ScanRecord::Full(_) => panic!("expected reduced records"),
    }
    assert_eq!(records[1].duration().unwrap(), "03:5.001");
}

#[tokio::test]
async fn test_playlist_scan_refetches_repeated_artists() {
    let mut client = playlist_fixture();
    client.playlist.push(track("t1", "a1", "Album of t1", 40));

    let records = scan_playlist(&client, "pl1", false, &()).await.unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[3].position(), Some(4));

    let artist_calls = client
        .calls()
        .into_iter()
        .filter(|c| c == "artist:a1")
        .count();
    assert_eq!(artist_calls, 2);
}

#[tokio::test]
async fn test_playlist_scan_fetches_sequentially() {
    let client = playlist_fixture();

    scan_playlist(&client, "pl1", false, &()).await.unwrap();
    assert_eq!(
        client.calls(),
        vec![
            "playlist:pl1",
            "artist:a1",
            "features:t1",
            "artist:a2",
            "features:t2",
            "artist:a3",
            "features:t3",
        ]
    );
}

#[tokio::test]
async fn test_playlist_scan_aborts_on_feature_failure() {
    let mut client = playlist_fixture();
    client.failing_features.insert("t2".to_string());

    let result = scan_playlist(&client, "pl1", true, &()).await;
    let err = result.unwrap_err();
    assert!(err.is_remote());

    // nothing after the failing item is fetched
    assert!(!client.calls().contains(&"artist:a3".to_string()));
}

#[tokio::test]
async fn test_playlist_scan_aborts_on_missing_features() {
    let mut client = playlist_fixture();
    client.features.remove("t3");

    let err = scan_playlist(&client, "pl1", false, &()).await.unwrap_err();
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_playlist_scan_rejects_track_without_artist() {
    let mut client = playlist_fixture();
    client.playlist[0].artists.clear();

    let err = scan_playlist(&client, "pl1", false, &()).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_playlist_scan_reports_progress() {
    let client = playlist_fixture();
    let progress = RecordingProgress::default();

    scan_playlist(&client, "pl1", false, &progress).await.unwrap();
    assert_eq!(
        progress.tracks.borrow().clone(),
        vec![
            (Some(1), "Song t1".to_string()),
            (Some(2), "Song t2".to_string()),
            (Some(3), "Song t3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_artist_scan_visits_groups_in_order() {
    let client = artist_fixture();
    let progress = RecordingProgress::default();

    let songs = scan_artist(&client, "a1", &progress).await.unwrap();
    let names: Vec<&str> = songs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Song t1", "Song t2", "Song t3", "Song t4"]);

    let albums: Vec<&str> = songs.iter().map(|s| s.album.as_str()).collect();
    assert_eq!(albums, vec!["Album al1", "Album al1", "Album si1", "Album ap1"]);
    assert_eq!(
        progress.albums.borrow().clone(),
        vec!["Album al1", "Album si1", "Album ap1"]
    );

    let calls = client.calls();
    assert_eq!(
        &calls[..4],
        &["artist:a1", "albums:a1:album", "albums:a1:single", "albums:a1:appears_on"]
    );
    // the artist itself is looked up only once
    assert_eq!(calls.iter().filter(|c| c.starts_with("artist:")).count(), 1);
}

#[tokio::test]
async fn test_artist_scan_shares_artist_fields_and_sets_no_position() {
    let client = artist_fixture();

    let songs = scan_artist(&client, "a1", &()).await.unwrap();
    assert_eq!(songs.len(), 4);

    for (idx, song) in songs.iter().enumerate() {
        assert_eq!(song.position, None);
        assert_eq!(song.artist_uri, "spotify:artist:a1");
        assert_eq!(song.artist_name, "Artist a1");
        assert_eq!(song.artist_pop, 80);
        assert_eq!(song.artist_genres, vec!["synthpop".to_string()]);
        assert_eq!(song.track_pop, 60 + idx as u32);
        // double-time tempo is halved like in playlist scans
        assert_eq!(song.features.as_ref().unwrap().tempo, 70.0);
        assert!(song.duration.is_none());
    }
}

#[tokio::test]
async fn test_artist_scan_halves_double_time_tempo() {
    let mut client = artist_fixture();
    client
        .features
        .insert("t1".to_string(), features("t1", 120.0, 200000));

    let songs = scan_artist(&client, "a1", &()).await.unwrap();
    let tempos: Vec<f64> = songs
        .iter()
        .map(|s| s.features.as_ref().unwrap().tempo)
        .collect();
    assert_eq!(tempos, vec![120.0, 70.0, 70.0, 70.0]);
}

#[tokio::test]
async fn test_artist_scan_aborts_on_feature_failure() {
    let mut client = artist_fixture();
    client.failing_features.insert("t3".to_string());

    let err = scan_artist(&client, "a1", &()).await.unwrap_err();
    assert!(err.is_remote());
    assert!(!client.calls().contains(&"album_tracks:ap1".to_string()));
}

#[tokio::test]
async fn test_artist_scan_aborts_on_missing_features() {
    let mut client = artist_fixture();
    client.features.remove("t1");

    let err = scan_artist(&client, "a1", &()).await.unwrap_err();
    assert!(err.is_remote());
    assert!(err.to_string().contains("spotify:track:t1"));
}

#[tokio::test]
async fn test_artist_scan_unknown_artist() {
    let client = artist_fixture();

    let err = scan_artist(&client, "nobody", &()).await.unwrap_err();
    assert!(err.is_remote());
}
