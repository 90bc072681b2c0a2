use serde::{Deserialize, Serialize};

use super::rates::{find_rate, FREE_ZONES};
use crate::enums::TransportZone;

pub const FREE_COST: &str = "GRATIS (0 Rupiah)";
pub const FREE_MESSAGE: &str = "Free Ongkir Area";
pub const UNKNOWN_COST: &str = "Hubungi Admin";
pub const UNKNOWN_MESSAGE: &str = "Lokasi belum terdaftar di database";

/// Результат расчёта стоимости выезда
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportEstimate {
    pub cost: String,
    pub message: String,
    pub is_free: bool,
    pub zone: TransportZone,
    /// Matched rate key, only for priced zones
    pub city: Option<String>,
}

impl TransportEstimate {
    fn free() -> Self {
        Self {
            cost: FREE_COST.to_string(),
            message: FREE_MESSAGE.to_string(),
            is_free: true,
            zone: TransportZone::Free,
            city: None,
        }
    }

    fn unknown() -> Self {
        Self {
            cost: UNKNOWN_COST.to_string(),
            message: UNKNOWN_MESSAGE.to_string(),
            is_free: false,
            zone: TransportZone::Unknown,
            city: None,
        }
    }

    pub fn note(&self) -> &'static str {
        self.zone.note()
    }

    pub fn is_known(&self) -> bool {
        self.zone != TransportZone::Unknown
    }
}

/// Classify a free-text event location into a transport estimate.
///
/// Returns `None` for empty input. Free zones take precedence over every priced
/// entry; otherwise the first rate key contained in the input wins. An unmatched
/// location degrades to the "contact admin" estimate rather than an error.
pub fn calculate_transport_cost(location: &str) -> Option<TransportEstimate> {
    let loc = location.trim().to_lowercase();
    if loc.is_empty() {
        return None;
    }

    if FREE_ZONES.iter().any(|zone| loc.contains(zone)) {
        return Some(TransportEstimate::free());
    }

    let Some(rate) = find_rate(&loc) else {
        return Some(TransportEstimate::unknown());
    };

    let message = match rate.zone {
        TransportZone::Flight => format!("Layanan Full Production ({})", rate.key),
        _ => format!("Estimasi Grab Car dari Singosari ke {}", rate.key),
    };

    Some(TransportEstimate {
        cost: rate.cost.to_string(),
        message,
        is_free: false,
        zone: rate.zone,
        city: Some(rate.key.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_location_gives_none() {
        assert_eq!(calculate_transport_cost(""), None);
        assert_eq!(calculate_transport_cost("   \t"), None);
    }

    #[test]
    fn test_free_zone_wins_over_priced_city() {
        let est = calculate_transport_cost("Singosari Malang").unwrap();
        assert!(est.is_free);
        assert_eq!(est.cost, "GRATIS (0 Rupiah)");
        assert_eq!(est.message, "Free Ongkir Area");
        assert_eq!(est.zone, TransportZone::Free);
        assert_eq!(est.city, None);
    }

    #[test]
    fn test_flight_zone_message() {
        let est = calculate_transport_cost("Jakarta Selatan").unwrap();
        assert_eq!(est.zone, TransportZone::Flight);
        assert_eq!(est.cost, "Tiket Pesawat + Akomodasi");
        assert!(est.message.contains("Full Production"));
        assert_eq!(est.message, "Layanan Full Production (jakarta)");
        assert_eq!(est.city.as_deref(), Some("jakarta"));
    }

    #[test]
    fn test_ground_zone_message() {
        let est = calculate_transport_cost("  Kota BATU ").unwrap();
        assert_eq!(est.zone, TransportZone::Close);
        assert_eq!(est.cost, "Rp 150.000");
        assert_eq!(est.message, "Estimasi Grab Car dari Singosari ke batu");
        assert!(!est.is_free);

        let est = calculate_transport_cost("GOR Kediri").unwrap();
        assert_eq!(est.zone, TransportZone::Far);
        assert_eq!(est.cost, "Rp 600.000");
    }

    #[test]
    fn test_unknown_location() {
        let est = calculate_transport_cost("Makassar").unwrap();
        assert_eq!(est.zone, TransportZone::Unknown);
        assert_eq!(est.cost, "Hubungi Admin");
        assert_eq!(est.message, "Lokasi belum terdaftar di database");
        assert!(!est.is_known());
        assert_eq!(est.note(), TransportZone::Unknown.note());
    }
}
