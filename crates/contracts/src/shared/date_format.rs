//! Indonesian (id-ID) calendar formatting.
//!
//! Dates are shown in WIB (UTC+7), where the studio operates.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};

const WIB_OFFSET_SECONDS: i32 = 7 * 3600;

const MONTHS_LONG: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn weekday_long(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Format an ISO date (`YYYY-MM-DD`, as produced by `<input type="date">`) as a long
/// Indonesian date.
///
/// Example: "2024-03-15" -> "Jumat, 15 Maret 2024". Empty input gives "-",
/// anything unparsable is returned unchanged.
pub fn format_long_date_id(date_str: &str) -> String {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format!(
            "{}, {} {} {}",
            weekday_long(date.weekday()),
            date.day(),
            MONTHS_LONG[date.month0() as usize],
            date.year()
        ),
        Err(_) => date_str.to_string(),
    }
}

/// Short date for a unix timestamp in seconds: `1700000000` -> "15 Nov 2023".
pub fn format_short_date_id(seconds: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(WIB_OFFSET_SECONDS)?;
    let local = DateTime::from_timestamp(seconds, 0)?.with_timezone(&offset);
    Some(format!(
        "{} {} {}",
        local.day(),
        MONTHS_SHORT[local.month0() as usize],
        local.year()
    ))
}
