//! Property tests for the pure site logic.
//!
//! Uses proptest to verify:
//! 1. Free-zone precedence: any location containing a free-zone fragment is free
//! 2. Priced zones: flight keys get the production message, ground keys the ride estimate
//! 3. Mirror ordering: after any sequence of pushes the mirror is newest-first
//! 4. Filter/search identity laws and exact-match semantics
//! 5. Booking gate: a draft missing location/date/hours never produces a link
//!
//! Substring collisions between rate keys and unrelated words are a known
//! weakness of the rate table and are deliberately not asserted here.

use contracts::domain::a001_portfolio_item::{filter_by_category, search, PortfolioItem, PortfolioMirror};
use contracts::domain::a002_booking::{prepare_booking, BookingDraft};
use contracts::domain::a003_transport_rate::{calculate_transport_cost, FREE_ZONES, TRANSPORT_RATES};
use contracts::domain::common::DocTimestamp;
use contracts::enums::{PortfolioCategory, TransportZone};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

/// Filler text that cannot contain any table key or free-zone fragment.
fn arb_filler() -> impl Strategy<Value = String> {
    "[ 0-9xqz]{0,6}"
}

fn arb_free_zone() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FREE_ZONES.to_vec())
}

fn arb_rate_index() -> impl Strategy<Value = usize> {
    0..TRANSPORT_RATES.len()
}

fn arb_category() -> impl Strategy<Value = String> {
    prop::sample::select(PortfolioCategory::all())
        .prop_map(|c| c.display_name().to_string())
}

fn arb_item() -> impl Strategy<Value = PortfolioItem> {
    (
        "[a-z0-9]{4}",
        "[A-Za-z ]{0,12}",
        arb_category(),
        prop::option::of(0i64..2_000_000_000),
    )
        .prop_map(|(id, title, category, seconds)| PortfolioItem {
            id,
            title,
            category,
            created_at: seconds.map(DocTimestamp::from_seconds),
            ..Default::default()
        })
}

fn arb_items() -> impl Strategy<Value = Vec<PortfolioItem>> {
    prop::collection::vec(arb_item(), 0..20)
}

// ── 1. Free-zone precedence ──────────────────────────────────────────

proptest! {
    #[test]
    fn free_zone_always_wins(
        free in arb_free_zone(),
        idx in arb_rate_index(),
        prefix in arb_filler(),
        upper in any::<bool>(),
    ) {
        let city = TRANSPORT_RATES[idx].key;
        let mut location = format!("{}{} {}", prefix, city, free);
        if upper {
            location = location.to_uppercase();
        }
        let est = calculate_transport_cost(&location).unwrap();
        prop_assert!(est.is_free);
        prop_assert_eq!(est.cost.as_str(), "GRATIS (0 Rupiah)");
        prop_assert_eq!(est.zone, TransportZone::Free);
    }
}

// ── 2. Priced zones ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn priced_key_yields_its_zone_and_message(
        idx in arb_rate_index(),
        prefix in arb_filler(),
        suffix in arb_filler(),
    ) {
        let rate = TRANSPORT_RATES[idx];
        let location = format!("{}{}{}", prefix, rate.key, suffix);
        let est = calculate_transport_cost(&location).unwrap();

        // The key itself may contain an earlier key only by collision; none do today.
        prop_assert_eq!(est.city.as_deref(), Some(rate.key));
        prop_assert_eq!(est.cost.as_str(), rate.cost);
        prop_assert_eq!(est.zone, rate.zone);
        prop_assert!(!est.is_free);
        if rate.zone == TransportZone::Flight {
            prop_assert!(est.message.contains("Full Production"));
        } else {
            prop_assert!(est.message.starts_with("Estimasi Grab Car"));
        }
    }

    #[test]
    fn unmatched_location_is_unknown(location in "[0-9xqz]{1,10}") {
        let est = calculate_transport_cost(&location).unwrap();
        prop_assert_eq!(est.zone, TransportZone::Unknown);
        prop_assert_eq!(est.cost.as_str(), "Hubungi Admin");
    }

    #[test]
    fn blank_location_is_none(location in "[ \t]{0,5}") {
        prop_assert!(calculate_transport_cost(&location).is_none());
    }
}

// ── 3. Mirror ordering ───────────────────────────────────────────────

proptest! {
    #[test]
    fn mirror_is_newest_first_after_any_pushes(pushes in prop::collection::vec(arb_items(), 1..5)) {
        let mut mirror = PortfolioMirror::new();
        mirror.on_session(true);
        for push in pushes.iter().cloned() {
            mirror.apply_snapshot(push);
        }
        let last = pushes.last().unwrap();
        prop_assert_eq!(mirror.items.len(), last.len());
        for pair in mirror.items.windows(2) {
            prop_assert!(pair[0].created_at_seconds() >= pair[1].created_at_seconds());
        }
        prop_assert!(!mirror.loading);
    }
}

// ── 4. Filter / search laws ──────────────────────────────────────────

proptest! {
    #[test]
    fn filter_all_is_identity(items in arb_items()) {
        prop_assert_eq!(filter_by_category(&items, "All"), items);
    }

    #[test]
    fn filter_returns_exact_subset(items in arb_items(), category in arb_category()) {
        let out = filter_by_category(&items, &category);
        let expected: Vec<_> = items.iter().filter(|i| i.category == category).cloned().collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn search_empty_is_identity(items in arb_items()) {
        prop_assert_eq!(search(&items, ""), items);
    }

    #[test]
    fn search_is_case_insensitive(items in arb_items(), term in "[a-zA-Z]{1,3}") {
        let lower = search(&items, &term.to_lowercase());
        let upper = search(&items, &term.to_uppercase());
        prop_assert_eq!(&lower, &upper);
        let needle = term.to_lowercase();
        for item in &lower {
            prop_assert!(
                item.title.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            );
        }
    }
}

// ── 5. Booking gate ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn incomplete_booking_never_formats(
        location in prop::option::of("[a-z]{3,8}"),
        date in prop::option::of(Just("2026-12-01".to_string())),
        hours in prop::option::of("[1-9]"),
    ) {
        let complete = location.is_some() && date.is_some() && hours.is_some();
        let mut draft = BookingDraft::default();
        draft.set_location(location.unwrap_or_default());
        draft.date = date.unwrap_or_default();
        draft.hours = hours.unwrap_or_default();

        let result = prepare_booking(&draft, "6285731021469");
        prop_assert_eq!(result.is_ok(), complete);
    }
}
