//! Local mirror of the remote portfolio collection.
//!
//! The mirror is driven by three inputs: session presence, snapshot pushes and
//! subscription errors. Every snapshot is a full replace, so pushes applied in
//! delivery order can never interleave into a mixed state.

use super::aggregate::PortfolioItem;

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioMirror {
    pub items: Vec<PortfolioItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PortfolioMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioMirror {
    /// Initial state before the session is known: loading.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Session presence changed.
    ///
    /// Without a session the mirror is empty and NOT loading: nothing will arrive
    /// until someone signs in. With a session a subscription is about to open.
    pub fn on_session(&mut self, present: bool) {
        if present {
            self.loading = true;
        } else {
            self.items.clear();
            self.loading = false;
            self.error = None;
        }
    }

    /// Replace the mirror with a full snapshot, newest first.
    pub fn apply_snapshot(&mut self, mut items: Vec<PortfolioItem>) {
        sort_newest_first(&mut items);
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Subscription failed: keep the last good items, record the message.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Stable sort, non-increasing by creation time; missing timestamps count as zero.
pub fn sort_newest_first(items: &mut [PortfolioItem]) {
    items.sort_by_key(|item| std::cmp::Reverse(item.created_at_seconds()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::DocTimestamp;

    fn item(id: &str, seconds: Option<i64>) -> PortfolioItem {
        PortfolioItem {
            id: id.to_string(),
            title: format!("Event {}", id),
            created_at: seconds.map(DocTimestamp::from_seconds),
            ..Default::default()
        }
    }

    fn ids(mirror: &PortfolioMirror) -> Vec<&str> {
        mirror.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_starts_loading() {
        let mirror = PortfolioMirror::new();
        assert!(mirror.loading);
        assert!(mirror.is_empty());
    }

    #[test]
    fn test_absent_session_is_terminal_not_loading() {
        let mut mirror = PortfolioMirror::new();
        mirror.apply_snapshot(vec![item("a", Some(1))]);
        mirror.on_session(false);
        assert!(!mirror.loading);
        assert!(mirror.is_empty());
        assert_eq!(mirror.error, None);
    }

    #[test]
    fn test_snapshot_sorted_newest_first_missing_as_oldest() {
        let mut mirror = PortfolioMirror::new();
        mirror.on_session(true);
        mirror.apply_snapshot(vec![
            item("old", Some(100)),
            item("pending", None),
            item("new", Some(300)),
            item("mid", Some(200)),
        ]);
        assert_eq!(ids(&mirror), vec!["new", "mid", "old", "pending"]);
        assert!(!mirror.loading);
    }

    #[test]
    fn test_snapshot_is_full_replace_and_clears_error() {
        let mut mirror = PortfolioMirror::new();
        mirror.apply_snapshot(vec![item("a", Some(1)), item("b", Some(2))]);
        mirror.apply_error("permission-denied");
        assert_eq!(mirror.error.as_deref(), Some("permission-denied"));
        assert_eq!(mirror.items.len(), 2);

        mirror.apply_snapshot(vec![item("c", Some(3))]);
        assert_eq!(ids(&mirror), vec!["c"]);
        assert_eq!(mirror.error, None);
    }

    #[test]
    fn test_error_stops_loading() {
        let mut mirror = PortfolioMirror::new();
        mirror.on_session(true);
        assert!(mirror.loading);
        mirror.apply_error("network");
        assert!(!mirror.loading);
    }

    #[test]
    fn test_equal_timestamps_keep_delivery_order() {
        let mut mirror = PortfolioMirror::new();
        mirror.apply_snapshot(vec![item("x", Some(5)), item("y", Some(5)), item("z", None)]);
        assert_eq!(ids(&mirror), vec!["x", "y", "z"]);
    }
}
