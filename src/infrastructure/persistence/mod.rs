//! Local persistence of the four store partitions

mod file;
mod gate;
mod memory;
mod partition;
mod traits;

pub use file::FilePartitionStore;
pub use gate::BootGate;
pub use memory::InMemoryPartitionStore;
pub use partition::{Partition, PartitionDocument, SCHEMA_VERSION};
pub use traits::PartitionStore;
