use serde::{Deserialize, Serialize};

use crate::shared::format::Price;

/// Пакеты услуг livestream-продакшена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServicePackage {
    #[default]
    StarterStream,
    ProMulticam,
    FullProduction,
}

impl ServicePackage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ServicePackage::StarterStream => "Starter Stream",
            ServicePackage::ProMulticam => "Pro Multicam",
            ServicePackage::FullProduction => "Full Production",
        }
    }

    /// Base price per event; the full production package is quoted per project.
    pub fn price(&self) -> Price {
        match self {
            ServicePackage::StarterStream => Price::Amount(1_500_000),
            ServicePackage::ProMulticam => Price::Amount(3_500_000),
            ServicePackage::FullProduction => Price::Text("Custom Quote".to_string()),
        }
    }

    pub fn default_hours(&self) -> u32 {
        match self {
            ServicePackage::StarterStream => 3,
            ServicePackage::ProMulticam => 5,
            ServicePackage::FullProduction => 8,
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            ServicePackage::StarterStream => "Untuk event kecil & komunitas",
            ServicePackage::ProMulticam => "Paling laris untuk turnamen & wedding",
            ServicePackage::FullProduction => "Broadcast skala besar, crew lengkap",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            ServicePackage::StarterStream => &[
                "1 Kamera Full HD",
                "Streaming ke 1 platform",
                "Overlay & lower third standar",
                "1 Operator",
            ],
            ServicePackage::ProMulticam => &[
                "3 Kamera + switcher",
                "Multi-platform streaming",
                "Custom overlay & replay",
                "Audio mixing",
                "3 Crew",
            ],
            ServicePackage::FullProduction => &[
                "5+ Kamera & jimmy jib",
                "Shoutcaster & talent (opsional)",
                "Graphic package custom",
                "Backup internet bonding",
                "Tim produksi lengkap",
            ],
        }
    }

    pub fn is_featured(&self) -> bool {
        matches!(self, ServicePackage::ProMulticam)
    }

    pub fn all() -> Vec<ServicePackage> {
        vec![
            ServicePackage::StarterStream,
            ServicePackage::ProMulticam,
            ServicePackage::FullProduction,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.display_name() == name)
    }
}
