//! # Domain model for inventory records
//!
//! Defines [`Product`], the only entity the inventory keeps, and [`Unit`], the
//! closed set of measurement units a product can be counted in. Both types are
//! `Serialize + Deserialize` and their JSON shape is the persisted format: a
//! storage key holds a JSON array of products with camelCase field names.
//!
//! ## Persisted shape
//!
//! ```json
//! {
//!   "id": "2b8f6c1e-…",
//!   "name": "Milk",
//!   "unit": "lt",
//!   "price": "4,99",
//!   "quantity": "2",
//!   "manufacturingDate": "2024-01-01",
//!   "perishable": true,
//!   "expirationDate": "2024-06-01"
//! }
//! ```
//!
//! A product without an expiration date is written with `"expirationDate": ""`.
//! On read, both the empty string and a missing key mean "no expiration date".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Date format used in persisted records and by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Measurement unit of a product's quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "lt")]
    Liters,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "un")]
    Units,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Liters, Unit::Kilograms, Unit::Units];

    /// Short code stored in records and used as `<option>` value.
    pub fn code(self) -> &'static str {
        match self {
            Unit::Liters => "lt",
            Unit::Kilograms => "kg",
            Unit::Units => "un",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "lt" => Some(Unit::Liters),
            "kg" => Some(Unit::Kilograms),
            "un" => Some(Unit::Units),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Liters => "Liters",
            Unit::Kilograms => "Kilograms",
            Unit::Units => "Units",
        }
    }

    /// Whole-number quantities only.
    pub fn is_countable(self) -> bool {
        self == Unit::Units
    }
}

/// A single inventory record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// UUID assigned at creation, never changed afterwards.
    pub id: String,
    pub name: String,
    pub unit: Unit,
    /// pt-BR formatted amount: "1.234,56"
    pub price: String,
    /// Formatted quantity; whole number for [`Unit::Units`]
    pub quantity: String,
    #[serde(with = "iso_date")]
    pub manufacturing_date: NaiveDate,
    pub perishable: bool,
    #[serde(default, with = "optional_iso_date")]
    pub expiration_date: Option<NaiveDate>,
}

impl Product {
    /// Generate a fresh identifier for a product about to be created.
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Parse a `YYYY-MM-DD` date, as produced by a date input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

mod iso_date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw:?}")))
    }
}

mod optional_iso_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        parse_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw:?}")))
    }
}
