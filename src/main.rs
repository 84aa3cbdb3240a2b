use std::error::Error as _;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use spotalyzer::{cli, config, error, scan::ScanMode};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Scan mode
    #[clap(short, long, value_enum, default_value_t = ScanMode::Playlist)]
    mode: ScanMode,

    /// Playlist or artist id, URI or open.spotify.com URL
    #[clap(short, long)]
    id: String,

    /// Name of the output file inside results/<mode>/
    #[clap(short, long, default_value = "output.json")]
    output: String,

    /// Reduced output (playlist mode only)
    #[clap(long)]
    reduced: bool,

    /// Print a summary table of the scanned tracks
    #[clap(long)]
    table: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let args = Cli::parse();

    let options = cli::ScanOptions {
        mode: args.mode,
        id: args.id,
        output: args.output,
        reduced: args.reduced,
        table: args.table,
    };

    if let Err(e) = cli::scan(options).await {
        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        error!("{}", message);
    }
}
