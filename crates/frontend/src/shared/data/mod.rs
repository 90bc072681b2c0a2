pub mod document_store;

#[cfg(test)]
pub mod memory_store;

pub use document_store::{
    pump_subscription, DocumentStore, NewDocument, OfflineStore, RawDocument, SnapshotEvent,
    StoreError, Subscription,
};
