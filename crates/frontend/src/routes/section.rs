use serde::{Deserialize, Serialize};

/// Query parameter holding the current section
pub const PAGE_PARAM: &str = "page";

/// Разделы одностраничного сайта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Home,
    About,
    Portfolio,
    Services,
    Contact,
}

impl Section {
    pub fn code(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    /// Label in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Services => "Services",
            Section::Contact => "Booking",
        }
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Home,
            Section::About,
            Section::Portfolio,
            Section::Services,
            Section::Contact,
        ]
    }

    /// Unknown or missing codes land on `Home`
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or(Section::Home)
    }

    /// Section named by a location search string such as `?page=services`
    pub fn from_query(search: &str) -> Self {
        let params: std::collections::HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params
            .get(PAGE_PARAM)
            .map(|code| Self::from_code(code))
            .unwrap_or_default()
    }

    /// `?page=<code>`
    pub fn to_query(&self) -> String {
        let query = serde_qs::to_string(&std::collections::HashMap::from([(
            PAGE_PARAM.to_string(),
            self.code().to_string(),
        )]))
        .unwrap_or_default();
        format!("?{}", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_all_sections() {
        for section in Section::all() {
            assert_eq!(Section::from_code(section.code()), section);
        }
    }

    #[test]
    fn test_unknown_code_is_home() {
        assert_eq!(Section::from_code("pricing"), Section::Home);
        assert_eq!(Section::from_code(""), Section::Home);
    }

    #[test]
    fn test_query_parsing() {
        assert_eq!(Section::from_query("?page=services"), Section::Services);
        assert_eq!(Section::from_query("page=contact&x=1"), Section::Contact);
        assert_eq!(Section::from_query(""), Section::Home);
        assert_eq!(Section::from_query("?active=tab"), Section::Home);
        assert_eq!(Section::Portfolio.to_query(), "?page=portfolio");
    }
}
