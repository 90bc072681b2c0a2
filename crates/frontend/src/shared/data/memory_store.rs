//! In-memory [`DocumentStore`] for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::system::site_config::CollectionPath;
use futures::channel::mpsc::UnboundedSender;
use serde_json::{json, Value};

use super::document_store::{
    DocumentStore, NewDocument, RawDocument, SnapshotEvent, StoreError, Subscription,
};

#[derive(Default)]
struct Inner {
    docs: RefCell<Vec<RawDocument>>,
    listeners: RefCell<HashMap<u64, UnboundedSender<SnapshotEvent>>>,
    next_id: Cell<u64>,
    clock: Cell<i64>,
    released: Cell<u32>,
    fail_writes: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn docs(&self) -> Vec<RawDocument> {
        self.inner.docs.borrow().clone()
    }

    pub fn active_listeners(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn released(&self) -> u32 {
        self.inner.released.get()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    pub fn push_error(&self, message: &str) {
        for tx in self.inner.listeners.borrow().values() {
            let _ = tx.unbounded_send(SnapshotEvent::Error(message.to_string()));
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.inner.next_id.get() + 1;
        self.inner.next_id.set(id);
        id
    }

    fn broadcast(&self) {
        let snapshot = self.docs();
        for tx in self.inner.listeners.borrow().values() {
            let _ = tx.unbounded_send(SnapshotEvent::Snapshot(snapshot.clone()));
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    fn subscribe(&self, _collection: &CollectionPath) -> Result<Subscription, StoreError> {
        let key = self.next_id();
        let inner = self.inner.clone();
        let (tx, subscription) = Subscription::channel(move || {
            inner.listeners.borrow_mut().remove(&key);
            inner.released.set(inner.released.get() + 1);
        });
        let _ = tx.unbounded_send(SnapshotEvent::Snapshot(self.docs()));
        self.inner.listeners.borrow_mut().insert(key, tx);
        Ok(subscription)
    }

    async fn add(&self, _collection: &CollectionPath, doc: NewDocument) -> Result<String, StoreError> {
        if self.inner.fail_writes.get() {
            return Err(StoreError::Write("permission-denied".into()));
        }
        let mut fields = doc.fields;
        for name in doc.server_timestamp_fields {
            let now = self.inner.clock.get() + 100;
            self.inner.clock.set(now);
            fields.insert(name, json!({ "seconds": now, "nanoseconds": 0 }));
        }
        let id = format!("doc-{}", self.next_id());
        self.inner.docs.borrow_mut().push(RawDocument {
            id: id.clone(),
            fields: Value::Object(fields),
        });
        self.broadcast();
        Ok(id)
    }

    async fn delete(&self, _collection: &CollectionPath, id: &str) -> Result<(), StoreError> {
        if self.inner.fail_writes.get() {
            return Err(StoreError::Write("permission-denied".into()));
        }
        self.inner.docs.borrow_mut().retain(|d| d.id != id);
        self.broadcast();
        Ok(())
    }
}
