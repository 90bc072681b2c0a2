use async_trait::async_trait;
use futures::channel::mpsc;
use contracts::system::site_config::CollectionPath;
use wasm_bindgen::prelude::*;

use super::bindings::{self, js_error_message, string_array};
use super::context::FirebaseContext;
use crate::shared::data::{
    DocumentStore, NewDocument, RawDocument, SnapshotEvent, StoreError, Subscription,
};

/// [`DocumentStore`] over the Firestore web SDK
pub struct FirestoreStore {
    ctx: FirebaseContext,
}

impl FirestoreStore {
    pub fn new(ctx: FirebaseContext) -> Self {
        Self { ctx }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreStore {
    fn subscribe(&self, collection: &CollectionPath) -> Result<Subscription, StoreError> {
        let (tx, events) = mpsc::unbounded();
        let next_tx = tx.clone();
        let on_next = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
            let event = match serde_wasm_bindgen::from_value::<Vec<RawDocument>>(docs) {
                Ok(docs) => SnapshotEvent::Snapshot(docs),
                Err(e) => SnapshotEvent::Error(StoreError::Decode(e.to_string()).to_string()),
            };
            let _ = next_tx.unbounded_send(event);
        });
        let error_tx = tx;
        let on_error = Closure::<dyn FnMut(String)>::new(move |message: String| {
            let _ = error_tx.unbounded_send(SnapshotEvent::Error(message));
        });

        let unsubscribe = bindings::subscribe_collection(
            self.ctx.handle(),
            &string_array(collection.segments()),
            &on_next,
            &on_error,
        )
        .map_err(|e| StoreError::Subscription(js_error_message(&e)))?;

        Ok(Subscription::new(events, move || {
            if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                log::warn!("unsubscribe failed: {}", js_error_message(&e));
            }
            // Closures must outlive the JS listener
            drop(on_next);
            drop(on_error);
        }))
    }

    async fn add(&self, collection: &CollectionPath, doc: NewDocument) -> Result<String, StoreError> {
        let fields = bindings::to_js(&doc.fields).map_err(|e| StoreError::Write(e.to_string()))?;
        let id = bindings::add_document(
            self.ctx.handle(),
            &string_array(collection.segments()),
            fields,
            string_array(doc.server_timestamp_fields.as_slice()),
        )
        .await
        .map_err(|e| StoreError::Write(js_error_message(&e)))?;
        id.as_string()
            .ok_or_else(|| StoreError::Decode("document id is not a string".into()))
    }

    async fn delete(&self, collection: &CollectionPath, id: &str) -> Result<(), StoreError> {
        let segments = string_array(collection.document(id).as_slice());
        bindings::delete_document(self.ctx.handle(), &segments)
            .await
            .map_err(|e| StoreError::Write(js_error_message(&e)))?;
        Ok(())
    }
}
