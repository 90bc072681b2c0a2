//! Форматирование цен для отображения (рупии, разделитель тысяч: точка)

use serde::{Deserialize, Serialize};

/// Цена пакета или транспорта: число в рупиях либо готовая строка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(u64),
    Text(String),
}

/// Fallback label when no price is known.
pub const PRICE_ON_REQUEST: &str = "Hubungi Admin";

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1500000), "1.500.000");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Renders a price for display: text passes through, amounts become `Rp 1.500.000`,
/// a missing price becomes [`PRICE_ON_REQUEST`].
pub fn format_price(price: Option<&Price>) -> String {
    match price {
        Some(Price::Text(text)) => text.clone(),
        Some(Price::Amount(amount)) => format!("Rp {}", format_thousands(*amount)),
        None => PRICE_ON_REQUEST.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(75000), "75.000");
        assert_eq!(format_thousands(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_price_variants() {
        assert_eq!(format_price(Some(&Price::Amount(1_500_000))), "Rp 1.500.000");
        assert_eq!(format_price(Some(&Price::Amount(0))), "Rp 0");
        assert_eq!(
            format_price(Some(&Price::Text("Custom Quote".into()))),
            "Custom Quote"
        );
        assert_eq!(format_price(None), "Hubungi Admin");
    }
}
