//! Статическая таблица тарифов на выезд команды из Сингосари.
//!
//! Lookup is by substring containment and the FIRST matching entry wins, so the
//! order of [`TRANSPORT_RATES`] is part of the pricing policy. Keys are not
//! whole words: a short key can match inside an unrelated longer word of the
//! location text. That collision risk is known and intentionally not relied upon.

use crate::enums::TransportZone;

/// Area fragments served without a transport fee. Checked before the rate table.
pub const FREE_ZONES: [&str; 3] = ["singosari", "lawang", "pakis"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportRate {
    pub key: &'static str,
    pub cost: &'static str,
    pub zone: TransportZone,
}

const FLIGHT_COST: &str = "Tiket Pesawat + Akomodasi";

const fn rate(key: &'static str, cost: &'static str, zone: TransportZone) -> TransportRate {
    TransportRate { key, cost, zone }
}

pub const TRANSPORT_RATES: &[TransportRate] = &[
    // Malang Raya
    rate("malang", "Rp 75.000", TransportZone::Close),
    rate("batu", "Rp 150.000", TransportZone::Close),
    rate("kepanjen", "Rp 120.000", TransportZone::Close),
    rate("karangploso", "Rp 50.000", TransportZone::Close),
    rate("tumpang", "Rp 80.000", TransportZone::Close),
    // Jawa Timur, jarak menengah
    rate("pandaan", "Rp 150.000", TransportZone::Medium),
    rate("pasuruan", "Rp 200.000", TransportZone::Medium),
    rate("sidoarjo", "Rp 350.000", TransportZone::Medium),
    rate("surabaya", "Rp 450.000", TransportZone::Medium),
    rate("mojokerto", "Rp 400.000", TransportZone::Medium),
    rate("probolinggo", "Rp 300.000", TransportZone::Medium),
    rate("lumajang", "Rp 250.000", TransportZone::Medium),
    // Jawa Timur, jarak jauh
    rate("blitar", "Rp 500.000", TransportZone::Far),
    rate("kediri", "Rp 600.000", TransportZone::Far),
    rate("tulungagung", "Rp 550.000", TransportZone::Far),
    rate("jember", "Rp 700.000", TransportZone::Far),
    rate("banyuwangi", "Rp 900.000", TransportZone::Far),
    // Kota besar, perlu pesawat
    rate("jakarta", FLIGHT_COST, TransportZone::Flight),
    rate("bandung", FLIGHT_COST, TransportZone::Flight),
    rate("bali", FLIGHT_COST, TransportZone::Flight),
    rate("denpasar", FLIGHT_COST, TransportZone::Flight),
    rate("yogyakarta", FLIGHT_COST, TransportZone::Flight),
    rate("semarang", FLIGHT_COST, TransportZone::Flight),
];

/// First entry whose key occurs in `normalized` (already lowercased and trimmed).
pub fn find_rate(normalized: &str) -> Option<&'static TransportRate> {
    TRANSPORT_RATES.iter().find(|r| normalized.contains(r.key))
}
