//! Build script for the Spotify catalog analyser CLI.
//!
//! Copies the `.env.example` credentials template into the local data
//! directory, next to where `config::load_env` looks for `.env`:
//! - Linux: `~/.local/share/spotalyzer/.env.example`
//! - macOS: `~/Library/Application Support/spotalyzer/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotalyzer/.env.example`

use std::{env, fs, path::PathBuf};

/// A missing template only produces a cargo warning; directory or write
/// failures fail the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotalyzer");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
