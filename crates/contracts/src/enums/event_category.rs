use serde::{Deserialize, Serialize};

/// Категория мероприятия в форме бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventCategory {
    #[default]
    EsportsTournament,
    Wedding,
    SeminarWebinar,
    Concert,
    CorporateEvent,
    ReligiousEvent,
}

impl EventCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EventCategory::EsportsTournament => "Esports Tournament",
            EventCategory::Wedding => "Wedding",
            EventCategory::SeminarWebinar => "Seminar / Webinar",
            EventCategory::Concert => "Concert",
            EventCategory::CorporateEvent => "Corporate Event",
            EventCategory::ReligiousEvent => "Religious Event",
        }
    }

    pub fn all() -> Vec<EventCategory> {
        vec![
            EventCategory::EsportsTournament,
            EventCategory::Wedding,
            EventCategory::SeminarWebinar,
            EventCategory::Concert,
            EventCategory::CorporateEvent,
            EventCategory::ReligiousEvent,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.display_name() == name)
    }
}
