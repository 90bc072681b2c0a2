//! Derived views over the mirror, computed on demand.

use super::aggregate::PortfolioItem;
use crate::enums::ALL_FILTER;

/// Exact category match; an empty category or "All" is the identity filter.
pub fn filter_by_category(items: &[PortfolioItem], category: &str) -> Vec<PortfolioItem> {
    if category.is_empty() || category == ALL_FILTER {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over title and category; empty term is identity.
pub fn search(items: &[PortfolioItem], term: &str) -> Vec<PortfolioItem> {
    if term.is_empty() {
        return items.to_vec();
    }
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// What the gallery shows: category filter first, then search within it.
pub fn displayed(items: &[PortfolioItem], category: &str, term: &str) -> Vec<PortfolioItem> {
    search(&filter_by_category(items, category), term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<PortfolioItem> {
        vec![
            item("1", "Grand Final MLBB", "Esports"),
            item("2", "Akad Nikah Rina", "Wedding"),
            item("3", "Esports Expo Booth", "Corporate"),
            item("4", "Tabligh Akbar", "Religious"),
        ]
    }

    #[test]
    fn test_filter_all_is_identity() {
        assert_eq!(filter_by_category(&sample(), "All"), sample());
        assert_eq!(filter_by_category(&sample(), ""), sample());
    }

    #[test]
    fn test_filter_exact_match_only() {
        let out = filter_by_category(&sample(), "Wedding");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
        assert!(filter_by_category(&sample(), "wedding").is_empty());
    }

    #[test]
    fn test_search_title_or_category_case_insensitive() {
        let ids: Vec<String> = search(&sample(), "ESPORTS").into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(search(&sample(), ""), sample());
        assert!(search(&sample(), "konser").is_empty());
    }

    #[test]
    fn test_displayed_composes_filter_then_search() {
        let out = displayed(&sample(), "Corporate", "esports");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");
        assert_eq!(displayed(&sample(), "All", ""), sample());
    }
}
