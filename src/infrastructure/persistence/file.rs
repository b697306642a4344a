//! File-backed partition storage
//!
//! One `<partition>.json` per partition inside a single data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use super::{Partition, PartitionDocument, PartitionStore};
use crate::shared::InfraResult;

#[derive(Debug, Clone)]
pub struct FilePartitionStore {
    dir: PathBuf,
}

impl FilePartitionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, partition: Partition) -> PathBuf {
        self.dir.join(partition.file_name())
    }

    fn graveyard(&self) -> PathBuf {
        let name = self
            .dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        self.dir
            .with_file_name(format!(".{}-purged-{}", name, uuid::Uuid::new_v4()))
    }
}

#[async_trait]
impl PartitionStore for FilePartitionStore {
    async fn load(&self, partition: Partition) -> InfraResult<Option<PartitionDocument>> {
        let raw = match fs::read_to_string(self.path(partition)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn save(&self, partition: Partition, document: &PartitionDocument) -> InfraResult<()> {
        fs::create_dir_all(&self.dir).await?;

        let target = self.path(partition);
        let tmp = target.with_extension("json.tmp");
        let raw = serde_json::to_vec_pretty(document)?;

        // Readers only ever see the old or the new file
        fs::write(&tmp, raw).await?;
        fs::rename(&tmp, &target).await?;

        debug!(partition = %partition, path = %target.display(), "Partition saved");
        Ok(())
    }

    async fn purge_all(&self) -> InfraResult<()> {
        let graveyard = self.graveyard();
        match fs::rename(&self.dir, &graveyard).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        // The partitions are already unreachable at this point
        if let Err(e) = fs::remove_dir_all(&graveyard).await {
            warn!(path = %graveyard.display(), error = %e, "Failed to remove purged data directory");
        }
        Ok(())
    }
}
