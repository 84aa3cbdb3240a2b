use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{Res, ScanError};

/// Tempos above this many BPM are treated as double time.
pub const TEMPO_HALVING_THRESHOLD: f64 = 135.0;

pub fn normalize_tempo(tempo: f64) -> f64 {
    if tempo > TEMPO_HALVING_THRESHOLD {
        tempo / 2.0
    } else {
        tempo
    }
}

/// `Basic` authorization value for the client-credentials token request.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Artist,
    Album,
    Track,
    Playlist,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Artist => "artist",
            CatalogKind::Album => "album",
            CatalogKind::Track => "track",
            CatalogKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts the bare catalog id from user input.
///
/// Accepts a bare id (`4NHQUGzhtTLFvgF5SZesLK`), a URI
/// (`spotify:artist:4NHQUGzhtTLFvgF5SZesLK`) or an open.spotify.com URL
/// (`https://open.spotify.com/artist/4NHQUGzhtTLFvgF5SZesLK?si=...`).
/// URIs and URLs must name the expected kind.
pub fn parse_catalog_id(kind: CatalogKind, input: &str) -> Res<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScanError::validation(format!("{} id cannot be empty", kind)));
    }

    let (found_kind, id) = if let Some(rest) = input.strip_prefix("spotify:") {
        // legacy playlist uris look like `spotify:user:<user>:playlist:<id>`
        let parts: Vec<&str> = rest.split(':').collect();
        match parts.as_slice() {
            [.., k, id] => (Some(*k), *id),
            _ => {
                return Err(ScanError::validation(format!(
                    "malformed catalog uri '{}'",
                    input
                )));
            }
        }
    } else if let Some(pos) = input.find("open.spotify.com/") {
        let path = &input[pos + "open.spotify.com/".len()..];
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        // locale prefixes like `intl-de/` precede the kind
        let segments: Vec<&str> = segments
            .into_iter()
            .skip_while(|s| s.starts_with("intl-"))
            .collect();
        match segments.as_slice() {
            [k, id, ..] => (Some(*k), *id),
            _ => {
                return Err(ScanError::validation(format!(
                    "malformed catalog url '{}'",
                    input
                )));
            }
        }
    } else {
        (None, input)
    };

    if let Some(found) = found_kind {
        if found != kind.as_str() {
            return Err(ScanError::validation(format!(
                "expected a {} id but got a {} reference '{}'",
                kind, found, input
            )));
        }
    }

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ScanError::validation(format!(
            "invalid {} id '{}'",
            kind, id
        )));
    }

    Ok(id.to_string())
}

/// Catalog URI for a bare id, e.g. `spotify:artist:<id>`.
pub fn catalog_uri(kind: CatalogKind, id: &str) -> String {
    format!("spotify:{}:{}", kind, id)
}
