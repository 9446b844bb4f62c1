//! JSON snapshot import/export for `StressData`.
//!
//! # Responsibility
//! - Convert between `StressData` and its JSON document shape
//!   (`{"YYYY-MM-DD": [stressor, ...]}`, camelCase fields).
//! - Read/write snapshot files for callers that feed `StressStore::load_data`.
//!
//! # Invariants
//! - Parsing applies no store-level checks; only the typed model constrains
//!   input (e.g. level range).

use crate::model::StressData;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "snapshot io failed for `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid snapshot json: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses a snapshot document.
pub fn parse_stress_data(json: &str) -> SnapshotResult<StressData> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes `data` as pretty-printed JSON with dates in ascending order.
pub fn to_json_string(data: &StressData) -> SnapshotResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Reads a snapshot file. A missing file yields an empty mapping.
pub fn read_snapshot(path: impl AsRef<Path>) -> SnapshotResult<StressData> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("event=snapshot_read module=snapshot status=ok reason=missing_file");
            return Ok(StressData::new());
        }
        Err(source) => {
            return Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let data = parse_stress_data(&raw)?;
    info!(
        "event=snapshot_read module=snapshot status=ok dates={}",
        data.len()
    );
    Ok(data)
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_snapshot(path: impl AsRef<Path>, data: &StressData) -> SnapshotResult<()> {
    let path = path.as_ref();
    let json = to_json_string(data)?;
    fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "event=snapshot_write module=snapshot status=ok dates={}",
        data.len()
    );
    Ok(())
}
