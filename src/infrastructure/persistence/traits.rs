//! Partition storage trait definitions

use async_trait::async_trait;

use super::{Partition, PartitionDocument};
use crate::shared::InfraResult;

/// Local key/value storage holding one document per partition.
#[async_trait]
pub trait PartitionStore: Send + Sync {
    /// `Ok(None)` when nothing was ever written for this partition.
    async fn load(&self, partition: Partition) -> InfraResult<Option<PartitionDocument>>;

    async fn save(&self, partition: Partition, document: &PartitionDocument) -> InfraResult<()>;

    /// Remove all four partitions together. Either every partition is gone
    /// afterwards or none was touched.
    async fn purge_all(&self) -> InfraResult<()>;
}
