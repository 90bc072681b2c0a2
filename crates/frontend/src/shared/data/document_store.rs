//! Абстракция над хостинговой документной БД.
//!
//! The store itself stays external: this module only describes what the UI
//! needs from it (a live collection feed, add, delete) so the portfolio hook
//! can be driven by the real SDK binding or by an in-memory double in tests.

use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use contracts::domain::a001_portfolio_item::aggregate::PortfolioValidationError;
use contracts::system::site_config::CollectionPath;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("{0}")]
    Invalid(#[from] PortfolioValidationError),
    #[error("subscription failed: {0}")]
    Subscription(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("cannot decode document: {0}")]
    Decode(String),
    #[error("document store unavailable: {0}")]
    Bridge(String),
}

/// Document as delivered by a snapshot: id plus its field map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub fields: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotEvent {
    /// Full content of the collection, in store order
    Snapshot(Vec<RawDocument>),
    Error(String),
}

/// Fields of a document to create. Names listed in `server_timestamp_fields`
/// are filled by the store with its own clock.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewDocument {
    pub fields: Map<String, Value>,
    pub server_timestamp_fields: Vec<String>,
}

impl NewDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            server_timestamp_fields: Vec::new(),
        }
    }

    pub fn with_server_timestamp(mut self, field: &str) -> Self {
        self.server_timestamp_fields.push(field.to_string());
        self
    }
}

#[async_trait(?Send)]
pub trait DocumentStore {
    /// Open a live feed on a collection. The first event is the current content.
    fn subscribe(&self, collection: &CollectionPath) -> Result<Subscription, StoreError>;

    /// Returns the id assigned by the store
    async fn add(&self, collection: &CollectionPath, doc: NewDocument) -> Result<String, StoreError>;

    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<(), StoreError>;
}

/// Live feed of snapshot events.
///
/// The remote listener is released exactly once: on [`Subscription::unsubscribe`]
/// or when the value is dropped, whichever comes first.
pub struct Subscription {
    events: UnboundedReceiver<SnapshotEvent>,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(events: UnboundedReceiver<SnapshotEvent>, release: impl FnOnce() + 'static) -> Self {
        Self {
            events,
            release: Some(Box::new(release)),
        }
    }

    /// Sender for the producer side plus the subscription owning `release`
    pub fn channel(release: impl FnOnce() + 'static) -> (UnboundedSender<SnapshotEvent>, Self) {
        let (tx, rx) = mpsc::unbounded();
        (tx, Self::new(rx, release))
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
        self.events.close();
    }
}

impl Stream for Subscription {
    type Item = SnapshotEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.events).poll_next(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Feed every event to `apply` in delivery order until the feed ends.
/// The subscription is released when this future completes or is dropped.
pub async fn pump_subscription<F>(mut subscription: Subscription, mut apply: F)
where
    F: FnMut(SnapshotEvent),
{
    while let Some(event) = subscription.next().await {
        apply(event);
    }
}

/// Store used when the SDK could not be initialised: every call fails with
/// the initialisation error so the UI shows it instead of spinning forever.
pub struct OfflineStore {
    reason: String,
}

impl OfflineStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for OfflineStore {
    fn subscribe(&self, _collection: &CollectionPath) -> Result<Subscription, StoreError> {
        Err(StoreError::Bridge(self.reason.clone()))
    }

    async fn add(&self, _collection: &CollectionPath, _doc: NewDocument) -> Result<String, StoreError> {
        Err(StoreError::Bridge(self.reason.clone()))
    }

    async fn delete(&self, _collection: &CollectionPath, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Bridge(self.reason.clone()))
    }
}
