//! Infrastructure layer - external concerns

pub mod persistence;

pub use persistence::{
    BootGate, FilePartitionStore, InMemoryPartitionStore, Partition, PartitionDocument,
    PartitionStore,
};
