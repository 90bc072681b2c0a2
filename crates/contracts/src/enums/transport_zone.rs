use serde::{Deserialize, Serialize};

/// Зона доставки команды: определяет и стоимость, и текст подсказки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportZone {
    Free,
    Close,
    Medium,
    Far,
    Flight,
    Unknown,
}

impl TransportZone {
    /// Код зоны (как хранится и передаётся)
    pub fn code(&self) -> &'static str {
        match self {
            TransportZone::Free => "free",
            TransportZone::Close => "close",
            TransportZone::Medium => "medium",
            TransportZone::Far => "far",
            TransportZone::Flight => "flight",
            TransportZone::Unknown => "unknown",
        }
    }

    /// Static advisory note shown under the transport estimate
    pub fn note(&self) -> &'static str {
        match self {
            TransportZone::Free => "Gratis! Tim siap datang tanpa biaya tambahan.",
            TransportZone::Close => "Termasuk transport tim PP via Grab Car.",
            TransportZone::Medium => "Estimasi untuk 1 unit mobil (maks 4 crew).",
            TransportZone::Far => "Recommend menginap 1 malam. Akomodasi dibicarakan terpisah.",
            TransportZone::Flight => "Untuk event besar di luar Jawa Timur. Paket custom production.",
            TransportZone::Unknown => "Silakan hubungi admin untuk pengecekan detail.",
        }
    }

    pub fn all() -> Vec<TransportZone> {
        vec![
            TransportZone::Free,
            TransportZone::Close,
            TransportZone::Medium,
            TransportZone::Far,
            TransportZone::Flight,
            TransportZone::Unknown,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "free" => Some(TransportZone::Free),
            "close" => Some(TransportZone::Close),
            "medium" => Some(TransportZone::Medium),
            "far" => Some(TransportZone::Far),
            "flight" => Some(TransportZone::Flight),
            "unknown" => Some(TransportZone::Unknown),
            _ => None,
        }
    }
}

/// Note lookup by zone code; unrecognized codes get the `unknown` note.
pub fn transport_note(zone_code: &str) -> &'static str {
    TransportZone::from_code(zone_code)
        .unwrap_or(TransportZone::Unknown)
        .note()
}
