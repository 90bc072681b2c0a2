use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a003_transport_rate::{calculate_transport_cost, TransportEstimate};
use crate::enums::{EventCategory, ServicePackage};

/// Locations this short are still being typed; no estimate is computed for them.
const MIN_LOCATION_LEN_FOR_ESTIMATE: usize = 3;

/// Обязательные поля заявки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingField {
    Location,
    Date,
    Hours,
}

impl BookingField {
    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Location => "Lokasi",
            BookingField::Date => "Tanggal",
            BookingField::Hours => "Durasi",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    #[error("Mohon lengkapi data booking (Lokasi, Tanggal, Durasi)")]
    MissingFields(Vec<BookingField>),
}

/// Черновик бронирования. Живёт только в состоянии UI и никуда не сохраняется:
/// финальное действие превращает его в текст сообщения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub service: ServicePackage,
    pub category: EventCategory,
    pub location: String,
    pub transport: Option<TransportEstimate>,
    pub hours: String,
    /// ISO date from the date picker (`YYYY-MM-DD`)
    pub date: String,
    pub additional_notes: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            service: ServicePackage::StarterStream,
            category: EventCategory::EsportsTournament,
            location: String::new(),
            transport: None,
            hours: String::new(),
            date: String::new(),
            additional_notes: String::new(),
        }
    }
}

impl BookingDraft {
    /// Store the location and refresh the transport estimate from it.
    pub fn set_location(&mut self, value: String) {
        self.transport = if value.trim().chars().count() >= MIN_LOCATION_LEN_FOR_ESTIMATE {
            calculate_transport_cost(&value)
        } else {
            None
        };
        self.location = value;
    }

    /// Form dropdown: the duration the client typed (or left empty) stays as is.
    pub fn select_service(&mut self, service: ServicePackage) {
        self.service = service;
    }

    /// "Book" from a package card: also prefill hours from the package when still empty.
    pub fn book_package(&mut self, service: ServicePackage) {
        self.select_service(service);
        if self.hours.trim().is_empty() {
            self.hours = service.default_hours().to_string();
        }
    }

    pub fn transport_cost(&self) -> Option<&str> {
        self.transport.as_ref().map(|t| t.cost.as_str())
    }

    pub fn missing_fields(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if self.location.trim().is_empty() {
            missing.push(BookingField::Location);
        }
        if self.date.trim().is_empty() {
            missing.push(BookingField::Date);
        }
        if self.hours.trim().is_empty() {
            missing.push(BookingField::Hours);
        }
        missing
    }

    pub fn validate(&self) -> Result<(), BookingValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BookingValidationError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TransportZone;

    #[test]
    fn test_default_draft() {
        let draft = BookingDraft::default();
        assert_eq!(draft.service.display_name(), "Starter Stream");
        assert_eq!(draft.category.display_name(), "Esports Tournament");
        assert!(draft.transport.is_none());
    }

    #[test]
    fn test_set_location_computes_estimate() {
        let mut draft = BookingDraft::default();
        draft.set_location("Surabaya Barat".into());
        let t = draft.transport.as_ref().unwrap();
        assert_eq!(t.zone, TransportZone::Medium);
        assert_eq!(draft.transport_cost(), Some("Rp 450.000"));
    }

    #[test]
    fn test_short_location_clears_estimate() {
        let mut draft = BookingDraft::default();
        draft.set_location("Batu".into());
        assert!(draft.transport.is_some());
        draft.set_location("Ba".into());
        assert!(draft.transport.is_none());
        assert_eq!(draft.location, "Ba");
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let mut draft = BookingDraft::default();
        assert_eq!(
            draft.validate(),
            Err(BookingValidationError::MissingFields(vec![
                BookingField::Location,
                BookingField::Date,
                BookingField::Hours
            ]))
        );
        draft.set_location("Malang".into());
        draft.date = "2026-11-02".into();
        assert_eq!(
            draft.validate(),
            Err(BookingValidationError::MissingFields(vec![BookingField::Hours]))
        );
        draft.hours = "4".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_book_package_prefills_hours_once() {
        let mut draft = BookingDraft::default();
        draft.book_package(ServicePackage::ProMulticam);
        assert_eq!(draft.hours, "5");
        draft.book_package(ServicePackage::FullProduction);
        assert_eq!(draft.hours, "5");
        assert_eq!(draft.service, ServicePackage::FullProduction);
    }

    #[test]
    fn test_select_service_leaves_hours_empty() {
        let mut draft = BookingDraft::default();
        draft.set_location("Malang".into());
        draft.date = "2026-11-01".into();
        draft.select_service(ServicePackage::ProMulticam);
        assert_eq!(draft.service, ServicePackage::ProMulticam);
        assert_eq!(draft.hours, "");
        assert_eq!(
            draft.validate(),
            Err(BookingValidationError::MissingFields(vec![BookingField::Hours]))
        );
    }
}
