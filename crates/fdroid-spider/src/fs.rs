use crate::error::Result;
use crate::http::{get_json, HttpClient};
use crate::origin::Origin;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace};

/// Suffix of a file still being written; renamed into place once complete.
pub const TEMP_SUFFIX: &str = ".part";

/// Result of a single [`download_file`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Fetched and written to disk.
    Downloaded,

    /// Already on disk; nothing was requested.
    Skipped,

    /// Fetching or writing failed; the error has been logged.
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed)
    }
}

/// GET `filename` from `origin` and write it, pretty-printed, to
/// `origin.target(filename)`.
///
/// If the target already exists the call is a no-op. Errors are logged and
/// reported as [`Outcome::Failed`], so one bad file never stops a run.
pub async fn download_file(http_client: &HttpClient, origin: &Origin, filename: &str) -> Outcome {
    let path = origin.target(filename);

    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        debug!("{}/{filename} already exists, skipping", origin.name);
        return Outcome::Skipped;
    }

    info!("downloading {}/{filename} ...", origin.name);
    match fetch_to(http_client, &origin.file_url(filename), &path).await {
        Ok(()) => {
            info!("✓ {}/{filename} downloaded successfully", origin.name);
            Outcome::Downloaded
        }
        Err(err) => {
            error!("✗ failed to download {}/{filename}, error({err})", origin.name);
            Outcome::Failed
        }
    }
}

async fn fetch_to(http_client: &HttpClient, url: &str, path: &Path) -> Result<()> {
    let body: serde_json::Value = get_json(http_client, url).await?;
    write_json(path, &body).await
}

/// Write `data` as pretty-printed JSON to `path`, creating parent directories.
///
/// The bytes land in `<path>.part` first and are renamed into place, so an
/// interrupted write never leaves a file that would later be skipped as
/// already downloaded.
pub async fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        trace!("checking directory path: {:?}", dir);
        tokio::fs::create_dir_all(dir).await?;
    }

    let bytes = serde_json::to_vec_pretty(data)?;
    let temp = temp_path(path);
    tokio::fs::write(&temp, bytes).await?;
    if let Err(err) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(err.into());
    }

    Ok(())
}

/// `file.json` → `file.json.part`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}
