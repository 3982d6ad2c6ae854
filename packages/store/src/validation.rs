//! # Product form validation
//!
//! A [`ProductDraft`] is the raw state of the product form: every field is the
//! string shown in its input. [`ProductValidator`] checks a draft and, when it
//! passes, builds the [`Product`] to store.
//!
//! The validator is a pure function of the perishable flag:
//! [`ProductValidator::for_perishable`] is called again whenever the flag
//! toggles instead of mutating a shared validator.
//!
//! ## Rules
//!
//! | Field | Fails with |
//! |-------|-----------|
//! | `id`, `name`, `unit`, `quantity`, `manufacturingDate` | [`FieldError::MissingField`] when blank (an unknown unit or an unparseable date counts as empty) |
//! | `name` | [`FieldError::TooLong`] above [`NAME_MAX_CHARS`] characters |
//! | `price` | [`FieldError::MissingField`] when empty or equal to the `"0,00"` placeholder |
//! | `expirationDate` | only checked for perishable products: [`FieldError::MissingField`] when empty, [`FieldError::ExpiredProduct`] unless strictly after the manufacturing date |
//!
//! Each field reports at most one error, the first rule it breaks. For a
//! non-perishable product the expiration date is ignored and never stored.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::format::ZERO_PRICE;
use crate::models::{parse_date, Product, Unit};

pub const NAME_MAX_CHARS: usize = 50;

/// Editable product form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Name,
    Unit,
    Price,
    Quantity,
    ManufacturingDate,
    ExpirationDate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Name,
        Field::Unit,
        Field::Price,
        Field::Quantity,
        Field::ManufacturingDate,
        Field::ExpirationDate,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Required")]
    MissingField,
    #[error("At most 50 characters")]
    TooLong,
    #[error("Expired product!")]
    ExpiredProduct,
}

/// Errors of a failed validation, keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }
}

impl FromIterator<(Field, FieldError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        let mut errors = Self::default();
        for (field, error) in iter {
            errors.insert(field, error);
        }
        errors
    }
}

/// Raw form values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub price: String,
    pub quantity: String,
    pub manufacturing_date: String,
    pub expiration_date: String,
    pub perishable: bool,
}

impl ProductDraft {
    /// Empty form for a new product: liters, zero price, not perishable.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            unit: Unit::default().code().to_string(),
            price: ZERO_PRICE.to_string(),
            ..Self::default()
        }
    }

    /// Form pre-filled from a stored product.
    pub fn from_product(product: &Product) -> Self {
        let date = |d: chrono::NaiveDate| d.format(crate::models::DATE_FORMAT).to_string();
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit: product.unit.code().to_string(),
            price: product.price.clone(),
            quantity: product.quantity.clone(),
            manufacturing_date: date(product.manufacturing_date),
            expiration_date: product.expiration_date.map(date).unwrap_or_default(),
            perishable: product.perishable,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Unit => &self.unit,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
            Field::ManufacturingDate => &self.manufacturing_date,
            Field::ExpirationDate => &self.expiration_date,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Unit => &mut self.unit,
            Field::Price => &mut self.price,
            Field::Quantity => &mut self.quantity,
            Field::ManufacturingDate => &mut self.manufacturing_date,
            Field::ExpirationDate => &mut self.expiration_date,
        };
        *slot = value;
    }

    /// Selected unit, if the unit field holds a known code.
    pub fn unit(&self) -> Option<Unit> {
        Unit::from_code(self.unit.trim())
    }
}

/// Form validator for one value of the perishable flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductValidator {
    perishable: bool,
}

impl ProductValidator {
    pub fn for_perishable(perishable: bool) -> Self {
        Self { perishable }
    }

    /// Check every rule and build the product to store.
    pub fn validate(&self, draft: &ProductDraft) -> Result<Product, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let id = draft.id.trim();
        if id.is_empty() {
            errors.insert(Field::Id, FieldError::MissingField);
        }

        // Stored as typed; blank only counts as missing
        let name = draft.name.as_str();
        if name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::MissingField);
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.insert(Field::Name, FieldError::TooLong);
        }

        let unit = draft.unit();
        if unit.is_none() {
            errors.insert(Field::Unit, FieldError::MissingField);
        }

        let price = draft.price.trim();
        if price.is_empty() || price == ZERO_PRICE {
            errors.insert(Field::Price, FieldError::MissingField);
        }

        let quantity = draft.quantity.trim();
        if quantity.is_empty() {
            errors.insert(Field::Quantity, FieldError::MissingField);
        }

        let manufacturing_date = parse_date(&draft.manufacturing_date);
        if manufacturing_date.is_none() {
            errors.insert(Field::ManufacturingDate, FieldError::MissingField);
        }

        let expiration_date = if self.perishable {
            let expiration = parse_date(&draft.expiration_date);
            match (manufacturing_date, expiration) {
                (_, None) => errors.insert(Field::ExpirationDate, FieldError::MissingField),
                (Some(made), Some(expires)) if expires <= made => {
                    errors.insert(Field::ExpirationDate, FieldError::ExpiredProduct)
                }
                _ => {}
            }
            expiration
        } else {
            None
        };

        match (unit, manufacturing_date) {
            (Some(unit), Some(manufacturing_date)) if errors.is_empty() => Ok(Product {
                id: id.to_string(),
                name: name.to_string(),
                unit,
                price: price.to_string(),
                quantity: quantity.to_string(),
                manufacturing_date,
                perishable: self.perishable,
                expiration_date,
            }),
            _ => Err(errors),
        }
    }
}
