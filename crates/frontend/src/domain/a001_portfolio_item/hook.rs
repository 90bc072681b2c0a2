//! Живое зеркало коллекции портфолио.
//!
//! While a session exists the collection feed is open and every push replaces
//! the mirror. The feed is aborted (and its listener released) when the session
//! goes away or the owning component is disposed.

use std::rc::Rc;

use contracts::domain::a001_portfolio_item::aggregate::{
    NewPortfolioItem, PortfolioItem, FIELD_CREATED_AT,
};
use contracts::domain::a001_portfolio_item::mirror::PortfolioMirror;
use contracts::domain::a001_portfolio_item::query;
use contracts::system::site_config::CollectionPath;
use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::data::{
    pump_subscription, DocumentStore, NewDocument, SnapshotEvent, StoreError,
};
use crate::shared::firebase::SessionUser;

/// Apply one feed event to the mirror. Documents that cannot be decoded are
/// skipped, the rest of the snapshot still applies.
pub fn apply_event(mirror: &mut PortfolioMirror, event: SnapshotEvent) {
    match event {
        SnapshotEvent::Snapshot(docs) => {
            let items = docs
                .into_iter()
                .filter_map(|doc| match PortfolioItem::from_document(&doc.id, doc.fields) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        log::warn!("Skipping portfolio document {}: {}", doc.id, e);
                        None
                    }
                })
                .collect();
            mirror.apply_snapshot(items);
        }
        SnapshotEvent::Error(message) => {
            log::error!("Portfolio subscription error: {}", message);
            mirror.apply_error(message);
        }
    }
}

/// Create an item stamped with the server time and the session's uid
pub async fn add_item(
    store: &dyn DocumentStore,
    collection: &CollectionPath,
    session: Option<&SessionUser>,
    item: NewPortfolioItem,
) -> Result<String, StoreError> {
    let user = session.ok_or(StoreError::NotAuthenticated)?;
    item.validate()?;
    let doc = NewDocument::new(item.into_document(&user.uid)).with_server_timestamp(FIELD_CREATED_AT);
    store.add(collection, doc).await
}

pub async fn delete_item(
    store: &dyn DocumentStore,
    collection: &CollectionPath,
    session: Option<&SessionUser>,
    id: &str,
) -> Result<(), StoreError> {
    session.ok_or(StoreError::NotAuthenticated)?;
    store.delete(collection, id).await
}

#[derive(Clone, Copy)]
pub struct PortfolioHook {
    pub mirror: RwSignal<PortfolioMirror>,
    store: StoredValue<Rc<dyn DocumentStore>, LocalStorage>,
    collection: StoredValue<CollectionPath>,
    session: Signal<Option<SessionUser>>,
}

/// Open (and keep re-opening on session change) the live portfolio feed
pub fn use_portfolio(
    store: Rc<dyn DocumentStore>,
    collection: CollectionPath,
    session: Signal<Option<SessionUser>>,
) -> PortfolioHook {
    let mirror = RwSignal::new(PortfolioMirror::new());
    let store = StoredValue::new_local(store);
    let collection = StoredValue::new(collection);
    let listener = StoredValue::new(None::<AbortHandle>);

    let stop_listener = move || {
        if let Some(handle) = listener.try_update_value(|slot| slot.take()).flatten() {
            handle.abort();
        }
    };

    Effect::new(move |_| {
        let user = session.get();
        stop_listener();
        mirror.update(|m| m.on_session(user.is_some()));

        if user.is_none() {
            return;
        }

        let subscription = store.with_value(|s| collection.with_value(|c| s.subscribe(c)));
        match subscription {
            Ok(subscription) => {
                let (handle, registration) = AbortHandle::new_pair();
                listener.set_value(Some(handle));
                spawn_local(async move {
                    let pump = pump_subscription(subscription, move |event| {
                        mirror.try_update(|m| apply_event(m, event));
                    });
                    // Aborted on session change or unmount
                    let _ = Abortable::new(pump, registration).await;
                });
            }
            Err(e) => {
                log::error!("Cannot subscribe to portfolio: {}", e);
                mirror.update(|m| m.apply_error(e.to_string()));
            }
        }
    });

    on_cleanup(stop_listener);

    PortfolioHook {
        mirror,
        store,
        collection,
        session,
    }
}

impl PortfolioHook {
    pub async fn add(&self, item: NewPortfolioItem) -> Result<String, StoreError> {
        let store = self.store.get_value();
        let collection = self.collection.get_value();
        let session = self.session.get_untracked();
        add_item(store.as_ref(), &collection, session.as_ref(), item).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let store = self.store.get_value();
        let collection = self.collection.get_value();
        let session = self.session.get_untracked();
        delete_item(store.as_ref(), &collection, session.as_ref(), id).await
    }

    /// Category filter, then search, over the current mirror
    pub fn displayed(&self, category: &str, term: &str) -> Vec<PortfolioItem> {
        self.mirror
            .with(|m| query::displayed(&m.items, category, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::memory_store::MemoryStore;
    use crate::shared::data::RawDocument;
    use any_spawner::Executor;
    use futures::executor::block_on;
    use futures::StreamExt;
    use leptos::reactive::owner::Owner;
    use serde_json::json;

    fn collection() -> CollectionPath {
        CollectionPath::portfolio("default-app-id", "portfolio_arus_digital_v2")
    }

    fn user() -> SessionUser {
        SessionUser {
            uid: "anon-42".into(),
            is_anonymous: true,
        }
    }

    fn new_item(title: &str) -> NewPortfolioItem {
        NewPortfolioItem {
            title: title.into(),
            category: "Esports".into(),
            thumbnail: "https://img.example/t.jpg".into(),
            video_url: None,
            views: None,
        }
    }

    /// Run spawned effects and feeds until nothing more can progress
    fn settle() {
        Executor::poll_local();
    }

    #[test]
    fn test_live_feed_follows_session_and_unmount() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        let store = MemoryStore::new();

        owner.with(|| {
            let session = RwSignal::new(None::<SessionUser>);
            let backend: Rc<dyn DocumentStore> = Rc::new(store.clone());
            let hook = use_portfolio(backend, collection(), Signal::from(session));
            settle();

            // Без сессии подписки нет
            assert_eq!(store.active_listeners(), 0);
            assert!(!hook.mirror.with_untracked(|m| m.loading));

            session.set(Some(user()));
            settle();
            assert_eq!(store.active_listeners(), 1);
            assert!(!hook.mirror.with_untracked(|m| m.loading));

            block_on(hook.add(new_item("Grand Final"))).unwrap();
            settle();
            assert_eq!(hook.mirror.with_untracked(|m| m.items.len()), 1);

            // Another account: the old listener goes, a new one opens
            session.set(Some(SessionUser {
                uid: "anon-77".into(),
                is_anonymous: true,
            }));
            settle();
            assert_eq!(store.active_listeners(), 1);
            assert_eq!(store.released(), 1);

            session.set(None);
            settle();
            assert_eq!(store.active_listeners(), 0);
            assert_eq!(store.released(), 2);
            hook.mirror.with_untracked(|m| {
                assert!(m.items.is_empty());
                assert!(!m.loading);
            });

            session.set(Some(user()));
            settle();
            assert_eq!(store.active_listeners(), 1);
        });

        // Unmount
        owner.cleanup();
        settle();
        assert_eq!(store.active_listeners(), 0);
        assert_eq!(store.released(), 3);
    }

    #[test]
    fn test_add_requires_session() {
        let store = MemoryStore::new();
        let result = block_on(add_item(&store, &collection(), None, new_item("Final")));
        assert_eq!(result, Err(StoreError::NotAuthenticated));
        assert!(store.docs().is_empty());
    }

    #[test]
    fn test_delete_requires_session() {
        let store = MemoryStore::new();
        let result = block_on(delete_item(&store, &collection(), None, "doc-1"));
        assert_eq!(result, Err(StoreError::NotAuthenticated));
    }

    #[test]
    fn test_add_stamps_author_views_and_server_time() {
        let store = MemoryStore::new();
        let session = user();
        block_on(add_item(&store, &collection(), Some(&session), new_item("MPL Malang"))).unwrap();

        let docs = store.docs();
        assert_eq!(docs.len(), 1);
        let fields = &docs[0].fields;
        assert_eq!(fields["authorId"], json!("anon-42"));
        assert_eq!(fields["views"], json!("0"));
        assert!(fields["createdAt"]["seconds"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_invalid_item_never_reaches_store() {
        let store = MemoryStore::new();
        let session = user();
        let result = block_on(add_item(&store, &collection(), Some(&session), new_item("  ")));
        assert!(matches!(result, Err(StoreError::Invalid(_))));
        assert!(store.docs().is_empty());
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let session = user();
        let result = block_on(add_item(&store, &collection(), Some(&session), new_item("X")));
        assert!(matches!(result, Err(StoreError::Write(_))));
        let result = block_on(delete_item(&store, &collection(), Some(&session), "doc-1"));
        assert!(matches!(result, Err(StoreError::Write(_))));
    }

    #[test]
    fn test_feed_keeps_mirror_newest_first() {
        let store = MemoryStore::new();
        let session = user();
        let mut subscription = store.subscribe(&collection()).unwrap();
        let mut mirror = PortfolioMirror::new();
        mirror.on_session(true);

        // Initial (empty) snapshot
        apply_event(&mut mirror, block_on(subscription.next()).unwrap());
        assert!(mirror.items.is_empty());
        assert!(!mirror.loading);

        block_on(add_item(&store, &collection(), Some(&session), new_item("Older"))).unwrap();
        block_on(add_item(&store, &collection(), Some(&session), new_item("Newer"))).unwrap();
        apply_event(&mut mirror, block_on(subscription.next()).unwrap());
        apply_event(&mut mirror, block_on(subscription.next()).unwrap());

        let titles: Vec<_> = mirror.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);

        let newest_id = mirror.items[0].id.clone();
        block_on(delete_item(&store, &collection(), Some(&session), &newest_id)).unwrap();
        apply_event(&mut mirror, block_on(subscription.next()).unwrap());
        assert_eq!(mirror.items.len(), 1);
        assert_eq!(mirror.items[0].title, "Older");
    }

    #[test]
    fn test_error_event_keeps_items_and_stops_loading() {
        let mut mirror = PortfolioMirror::new();
        mirror.on_session(true);
        apply_event(
            &mut mirror,
            SnapshotEvent::Snapshot(vec![RawDocument {
                id: "a".into(),
                fields: json!({ "title": "Wedding Batu", "category": "Wedding" }),
            }]),
        );
        apply_event(&mut mirror, SnapshotEvent::Error("permission-denied".into()));
        assert_eq!(mirror.error.as_deref(), Some("permission-denied"));
        assert!(!mirror.loading);
        assert_eq!(mirror.items.len(), 1);
    }

    #[test]
    fn test_undecodable_document_is_skipped() {
        let mut mirror = PortfolioMirror::new();
        apply_event(
            &mut mirror,
            SnapshotEvent::Snapshot(vec![
                RawDocument {
                    id: "bad".into(),
                    fields: json!(["not", "a", "document"]),
                },
                RawDocument {
                    id: "good".into(),
                    fields: json!({ "title": "Seminar UB" }),
                },
            ]),
        );
        assert_eq!(mirror.items.len(), 1);
        assert_eq!(mirror.items[0].id, "good");
    }

    #[test]
    fn test_loosely_typed_document_still_renders() {
        let mut mirror = PortfolioMirror::new();
        apply_event(
            &mut mirror,
            SnapshotEvent::Snapshot(vec![RawDocument {
                id: "legacy".into(),
                fields: json!({ "title": null, "category": "Concert", "views": 1500 }),
            }]),
        );
        assert_eq!(mirror.items.len(), 1);
        assert_eq!(mirror.items[0].views.as_deref(), Some("1500"));
        assert_eq!(mirror.items[0].title, "");
    }

    #[test]
    fn test_dropping_feed_releases_listener_once() {
        let store = MemoryStore::new();
        let subscription = store.subscribe(&collection()).unwrap();
        assert_eq!(store.active_listeners(), 1);
        drop(subscription);
        assert_eq!(store.active_listeners(), 0);
        assert_eq!(store.released(), 1);
    }
}
