//! Mapping between the stores and their persisted partition documents

use tracing::{info, warn};

use super::stores::StoreSet;
use crate::infrastructure::{Partition, PartitionDocument, PartitionStore};
use crate::shared::{InfraError, InfraResult};

/// Outcome of a launch-time restore
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rehydration {
    /// Partitions taken from storage
    pub restored: Vec<Partition>,
    /// Partitions that started from seed (missing, unreadable or outdated)
    pub seeded: Vec<Partition>,
}

pub(crate) fn encode(stores: &StoreSet, partition: Partition) -> InfraResult<PartitionDocument> {
    let state = match partition {
        Partition::Auth => serde_json::to_value(&stores.auth)?,
        Partition::Olt => serde_json::to_value(&stores.olt)?,
        Partition::Onu => serde_json::to_value(&stores.onu)?,
        Partition::Settings => serde_json::to_value(&stores.settings)?,
    };
    Ok(PartitionDocument::new(state))
}

fn decode_into(
    stores: &mut StoreSet,
    partition: Partition,
    document: PartitionDocument,
) -> InfraResult<()> {
    let state = document.state;
    match partition {
        Partition::Auth => stores.auth = serde_json::from_value(state)?,
        Partition::Olt => stores.olt = serde_json::from_value(state)?,
        Partition::Onu => stores.onu = serde_json::from_value(state)?,
        Partition::Settings => stores.settings = serde_json::from_value(state)?,
    }
    Ok(())
}

async fn restore_one(
    storage: &dyn PartitionStore,
    stores: &mut StoreSet,
    partition: Partition,
) -> InfraResult<bool> {
    let Some(document) = storage.load(partition).await? else {
        return Ok(false);
    };
    if !document.is_current() {
        return Err(InfraError::Config(format!(
            "partition '{}' has layout version {}",
            partition, document.version
        )));
    }
    decode_into(stores, partition, document)?;
    Ok(true)
}

/// Build a store set from storage. Any partition that cannot be used keeps
/// its seed contents; one bad partition never affects the others.
pub(crate) async fn restore(storage: &dyn PartitionStore) -> (StoreSet, Rehydration) {
    let mut stores = StoreSet::seeded();
    let mut report = Rehydration::default();

    for partition in Partition::ALL {
        match restore_one(storage, &mut stores, partition).await {
            Ok(true) => report.restored.push(partition),
            Ok(false) => report.seeded.push(partition),
            Err(e) => {
                warn!(partition = %partition, error = %e, "Discarding persisted partition, using seed");
                report.seeded.push(partition);
            }
        }
    }

    info!(
        restored = report.restored.len(),
        seeded = report.seeded.len(),
        "Rehydration complete"
    );
    (stores, report)
}
