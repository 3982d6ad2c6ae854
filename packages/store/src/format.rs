//! # Input and display formatting
//!
//! Product forms keep their values as the strings the user sees. These helpers
//! turn raw keystrokes into those strings and back into numbers for sorting.
//!
//! | Function | Input → Output |
//! |----------|----------------|
//! | [`format_price`] | `"1234a5"` → `"1.234,56"`-style two-decimal amount (digits read as cents) |
//! | [`format_quantity`] | raw quantity → unit-aware quantity (`"1.234,567"` or `"12"`) |
//! | [`normalize_quantity_for_unit`] | quantity at submit time, whole number for units |
//! | [`sanitize_name`] | drops everything but letters and spaces |
//! | [`format_date`] | `2024-06-01` → `"01/06/2024"`, absent → `"*"` |
//!
//! Numbers follow the pt-BR convention: `.` groups thousands and `,` separates
//! decimals.

use chrono::NaiveDate;

use crate::models::Unit;

/// The formatted zero amount, shown before any price is typed.
pub const ZERO_PRICE: &str = "0,00";

/// Fractional digits kept for liters and kilograms.
pub const MAX_QUANTITY_DECIMALS: usize = 3;

/// Format raw price input: keep digits, read them as cents.
pub fn format_price(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    let padded = format!("{digits:0>3}");
    let (int, frac) = padded.split_at(padded.len() - 2);
    format!("{},{}", group_thousands(int), frac)
}

/// Format raw quantity input for the given unit.
///
/// Units are whole numbers: anything from the first `.` on is dropped. Liters
/// and kilograms accept one `,` decimal separator and up to three fractional
/// digits, and are regrouped with `.` thousands separators. Signs and leading
/// zeros are removed.
pub fn format_quantity(input: &str, unit: Unit) -> String {
    if unit.is_countable() {
        let whole = input.split('.').next().unwrap_or_default();
        let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
        return strip_leading_zeros(&digits);
    }

    let mut int = String::new();
    let mut frac = String::new();
    let mut has_separator = false;
    for c in input.chars() {
        match c {
            '0'..='9' if has_separator => frac.push(c),
            '0'..='9' => int.push(c),
            ',' => has_separator = true,
            _ => {}
        }
    }
    frac.truncate(MAX_QUANTITY_DECIMALS);

    if int.is_empty() && !has_separator {
        return String::new();
    }
    let int = if int.is_empty() {
        "0".to_string()
    } else {
        strip_leading_zeros(&int)
    };

    let mut out = group_thousands(&int);
    if has_separator {
        out.push(',');
        out.push_str(&frac);
    }
    out
}

/// Quantity as stored on submit.
///
/// For units, a value that still carries a `.` keeps only the part before it;
/// otherwise `,` separators are removed. Other units are stored as typed.
pub fn normalize_quantity_for_unit(quantity: &str, unit: Unit) -> String {
    if !unit.is_countable() {
        return quantity.to_string();
    }
    match quantity.split_once('.') {
        Some((whole, _)) => whole.to_string(),
        None => quantity.replace(',', ""),
    }
}

/// Keep letters (accented included) and spaces.
pub fn sanitize_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .collect()
}

/// `DD/MM/YYYY`, or `*` for an absent date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "*".to_string(),
    }
}

/// Price string as a number of cents.
pub fn price_cents(price: &str) -> u64 {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Quantity string as a number.
pub fn quantity_value(quantity: &str) -> f64 {
    quantity
        .replace('.', "")
        .replace(',', ".")
        .parse()
        .unwrap_or(0.0)
}

fn strip_leading_zeros(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn group_thousands(int: &str) -> String {
    let len = int.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(""), ZERO_PRICE);
        assert_eq!(format_price("0,00"), ZERO_PRICE);
        assert_eq!(format_price("5"), "0,05");
        // Typing after the placeholder shifts digits left
        assert_eq!(format_price("0,051"), "0,51");
        assert_eq!(format_price("12345"), "123,45");
        assert_eq!(format_price("123456"), "1.234,56");
        assert_eq!(format_price("R$ 1.234.567,89x"), "1.234.567,89");
    }

    #[test]
    fn test_format_quantity_for_units() {
        assert_eq!(format_quantity("12", Unit::Units), "12");
        assert_eq!(format_quantity("007", Unit::Units), "7");
        assert_eq!(format_quantity("0", Unit::Units), "0");
        assert_eq!(format_quantity("12.5", Unit::Units), "12");
        assert_eq!(format_quantity("-3", Unit::Units), "3");
        assert_eq!(format_quantity("", Unit::Units), "");
    }

    #[test]
    fn test_format_quantity_for_measures() {
        assert_eq!(format_quantity("2", Unit::Liters), "2");
        assert_eq!(format_quantity("1234", Unit::Kilograms), "1.234");
        assert_eq!(format_quantity("1.2345", Unit::Kilograms), "12.345");
        assert_eq!(format_quantity("1234,5678", Unit::Liters), "1.234,567");
        assert_eq!(format_quantity("0,5", Unit::Liters), "0,5");
        assert_eq!(format_quantity("00,5", Unit::Liters), "0,5");
        assert_eq!(format_quantity(",5", Unit::Liters), "0,5");
        assert_eq!(format_quantity("3,", Unit::Liters), "3,");
        assert_eq!(format_quantity("-2", Unit::Liters), "2");
        assert_eq!(format_quantity("", Unit::Liters), "");
    }

    #[test]
    fn test_normalize_quantity_for_unit() {
        assert_eq!(normalize_quantity_for_unit("1.234", Unit::Units), "1");
        assert_eq!(normalize_quantity_for_unit("1,234", Unit::Units), "1234");
        assert_eq!(normalize_quantity_for_unit("12", Unit::Units), "12");
        assert_eq!(normalize_quantity_for_unit("1.234,5", Unit::Liters), "1.234,5");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Pão de Açúcar 2!"), "Pão de Açúcar ");
        assert_eq!(sanitize_name("Milk"), "Milk");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 6, 1)), "01/06/2024");
        assert_eq!(format_date(None), "*");
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(price_cents("1.234,56"), 123456);
        assert_eq!(price_cents(""), 0);
        assert_eq!(quantity_value("1.234,5"), 1234.5);
        assert_eq!(quantity_value("12"), 12.0);
        assert_eq!(quantity_value(""), 0.0);
    }
}
