use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res, config, info,
    management::ResultWriter,
    models::ScanRecord,
    scan::{self, ScanMode, ScanProgress},
    spotify::SpotifyClient,
    success,
    types::{AlbumSummary, TrackTableRow},
    utils::{self, CatalogKind},
    warning,
};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: ScanMode,
    pub id: String,
    pub output: String,
    pub reduced: bool,
    pub table: bool,
}

/// Spinner that follows the album and track currently being fetched.
struct SpinnerProgress {
    pb: ProgressBar,
}

impl SpinnerProgress {
    fn start(message: String) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        Self { pb }
    }
}

impl ScanProgress for SpinnerProgress {
    fn album(&self, album: &AlbumSummary) {
        self.pb.set_message(format!(
            "({}, {}) - {}",
            album.album_group.as_deref().unwrap_or("-"),
            album.album_type,
            album.name
        ));
    }

    fn track(&self, position: Option<u32>, name: &str) {
        match position {
            Some(p) => self.pb.set_message(format!("Track {}: {}", p, name)),
            None => self.pb.set_message(format!("    {}", name)),
        }
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}

/// Runs a complete scan: authenticate, build the records, write them to
/// `results/<mode>/<output>` and optionally print a summary table.
pub async fn scan(options: ScanOptions) -> Res<()> {
    let kind = match options.mode {
        ScanMode::Playlist => CatalogKind::Playlist,
        ScanMode::Artist => CatalogKind::Artist,
    };
    let id = utils::parse_catalog_id(kind, &options.id)?;

    if options.reduced && options.mode == ScanMode::Artist {
        warning!("--reduced only applies to playlist scans and is ignored");
    }

    let client = SpotifyClient::connect(config::credentials()?).await?;

    info!("Scanning {} {}...", options.mode, id);
    let records = {
        let progress = SpinnerProgress::start(format!("Scanning {} {}...", options.mode, id));
        match options.mode {
            ScanMode::Playlist => {
                scan::scan_playlist(&client, &id, options.reduced, &progress).await?
            }
            ScanMode::Artist => scan::scan_artist(&client, &id, &progress)
                .await?
                .into_iter()
                .map(ScanRecord::from)
                .collect(),
        }
    };
    success!("Scanned {} tracks", records.len());

    let path = ResultWriter::new(options.mode, options.output)
        .persist(&records)
        .await?;
    success!("Results written to {}", path.display());

    if options.table {
        println!("{}", Table::new(table_rows(&records)));
    }

    Ok(())
}

pub fn table_rows(records: &[ScanRecord]) -> Vec<TrackTableRow> {
    records
        .iter()
        .map(|r| TrackTableRow {
            position: r.position().map(|p| p.to_string()).unwrap_or_default(),
            name: r.name().to_string(),
            artist: r.artist_name().to_string(),
            album: r.album().to_string(),
            tempo: r.tempo().map(|t| format!("{:.1}", t)).unwrap_or_default(),
            duration: r.duration().unwrap_or_default(),
        })
        .collect()
}
