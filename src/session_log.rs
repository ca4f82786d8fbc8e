//! Append-only text record of a study session.
//!
//! Layout of one session:
//!
//! ```text
//! --- Session at 2024-05-01 14:03:22 ---
//! Topic: Photosynthesis
//! Explain:
//! <text>
//!
//! ```

use crate::preprocessing::Mode;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum SessionLogError {
    #[error("Failed to write session log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct SessionLog {
    path: PathBuf,
    file: File,
}

impl SessionLog {
    /// Opens (or creates) `path` in append mode and writes the session header.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SessionLogError> {
        Self::open_at(path, Local::now().naive_local()).await
    }

    pub async fn open_at(path: impl AsRef<Path>, started: NaiveDateTime) -> Result<Self, SessionLogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| SessionLogError::Io {
                path: path.clone(),
                source,
            })?;

        let mut log = Self { path, file };
        log.write(&format!("--- Session at {} ---\n", started.format(TIMESTAMP_FORMAT)))
            .await?;
        info!(path = %log.path.display(), "Session log opened");
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn record_topic(&mut self, topic: &str) -> Result<(), SessionLogError> {
        self.write(&format!("Topic: {}\n", topic)).await
    }

    pub async fn record_result(&mut self, mode: Mode, text: &str) -> Result<(), SessionLogError> {
        self.write(&format!("{}:\n{}\n\n", mode, text)).await
    }

    /// Closes the session block and flushes to disk.
    pub async fn finish(mut self) -> Result<PathBuf, SessionLogError> {
        self.write("\n\n").await?;
        self.file.flush().await.map_err(|source| SessionLogError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "Session log closed");
        Ok(self.path)
    }

    async fn write(&mut self, chunk: &str) -> Result<(), SessionLogError> {
        self.file
            .write_all(chunk.as_bytes())
            .await
            .map_err(|source| SessionLogError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
