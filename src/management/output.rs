use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    Res,
    flatten::{self, Record},
    scan::ScanMode,
};

pub const RESULTS_DIR: &str = "results";

/// Writes flattened scan results to `<root>/<mode>/<file_name>`.
pub struct ResultWriter {
    root: PathBuf,
    mode: ScanMode,
    file_name: String,
}

impl ResultWriter {
    pub fn new(mode: ScanMode, file_name: impl Into<String>) -> Self {
        Self::with_root(RESULTS_DIR, mode, file_name)
    }

    pub fn with_root(root: impl AsRef<Path>, mode: ScanMode, file_name: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            mode,
            file_name: file_name.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(self.mode.as_str()).join(&self.file_name)
    }

    /// Flattens `records` and writes them as a JSON array indented with four
    /// spaces. Missing directories are created; an existing file is replaced.
    pub async fn persist<R: Record>(&self, records: &[R]) -> Res<PathBuf> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = to_pretty_json(&flatten::flatten_all(records))?;
        async_fs::write(&path, json).await?;
        Ok(path)
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Res<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}
