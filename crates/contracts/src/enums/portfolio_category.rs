use serde::{Deserialize, Serialize};

/// Pseudo-category used by the gallery filter to mean "no filtering".
pub const ALL_FILTER: &str = "All";

/// Фиксированный набор тегов для элементов портфолио.
///
/// В документе хранится `display_name()`, поэтому фильтр сравнивает строки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioCategory {
    Esports,
    Wedding,
    Corporate,
    Concert,
    Seminar,
    Religious,
}

impl PortfolioCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            PortfolioCategory::Esports => "Esports",
            PortfolioCategory::Wedding => "Wedding",
            PortfolioCategory::Corporate => "Corporate",
            PortfolioCategory::Concert => "Concert",
            PortfolioCategory::Seminar => "Seminar",
            PortfolioCategory::Religious => "Religious",
        }
    }

    pub fn all() -> Vec<PortfolioCategory> {
        vec![
            PortfolioCategory::Esports,
            PortfolioCategory::Wedding,
            PortfolioCategory::Corporate,
            PortfolioCategory::Concert,
            PortfolioCategory::Seminar,
            PortfolioCategory::Religious,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.display_name() == name)
    }

    /// Chips for the gallery filter: "All" first, then every tag.
    pub fn filter_options() -> Vec<&'static str> {
        std::iter::once(ALL_FILTER)
            .chain(Self::all().iter().map(|c| c.display_name()))
            .collect()
    }
}
