//! State behind the product form.
//!
//! [`ProductFormState`] starts in one of two modes, [`FormMode::Create`] with a
//! freshly generated id or [`FormMode::Edit`] pre-filled from a stored product,
//! and ends with [`ProductFormState::submit`], which writes to the repository.
//! Every edit re-runs validation; errors are only reported for fields the user
//! has already touched until a submit touches them all.

use std::collections::BTreeSet;

use store::format::{format_price, format_quantity, normalize_quantity_for_unit, sanitize_name};
use store::{
    Field, FieldError, Product, ProductDraft, ProductRepository, ProductStorage, ProductValidator,
    StoreError, ValidationErrors,
};
use thiserror::Error;

pub const CREATED_MESSAGE: &str = "Product created successfully!";
pub const UPDATED_MESSAGE: &str = "Product updated successfully!";

#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    /// Editing the product stored under `original_id`.
    Edit { original_id: String },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("the form has invalid fields: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A successful submit.
#[derive(Clone, Debug, PartialEq)]
pub struct Submitted {
    pub product: Product,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductFormState {
    mode: FormMode,
    draft: ProductDraft,
    validator: ProductValidator,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
}

impl ProductFormState {
    /// New-product form with a fresh id.
    pub fn create() -> Self {
        Self::create_with_id(Product::new_id())
    }

    pub fn create_with_id(id: impl Into<String>) -> Self {
        Self::with_draft(FormMode::Create, ProductDraft::new(id))
    }

    pub fn edit(product: &Product) -> Self {
        Self::with_draft(
            FormMode::Edit {
                original_id: product.id.clone(),
            },
            ProductDraft::from_product(product),
        )
    }

    fn with_draft(mode: FormMode, draft: ProductDraft) -> Self {
        Self {
            mode,
            validator: ProductValidator::for_perishable(draft.perishable),
            draft,
            touched: BTreeSet::new(),
            errors: ValidationErrors::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn is_perishable(&self) -> bool {
        self.draft.perishable
    }

    /// Error to display next to `field`.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Apply a raw input value, formatted the way its input displays it.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        let value = match field {
            Field::Name => sanitize_name(raw),
            Field::Price => format_price(raw),
            Field::Quantity => format_quantity(raw, self.draft.unit().unwrap_or_default()),
            _ => raw.to_string(),
        };
        self.draft.set(field, value);
        self.touched.insert(field);
        self.revalidate();
    }

    /// Flip the perishable flag. Turning it off clears the expiration date.
    pub fn toggle_perishable(&mut self) {
        let was_perishable = self.draft.perishable;
        self.draft.perishable = !was_perishable;
        self.validator = ProductValidator::for_perishable(self.draft.perishable);
        if was_perishable {
            self.draft.expiration_date.clear();
            self.touched.remove(&Field::ExpirationDate);
        }
        self.revalidate();
    }

    /// Validate every field and write the product to `repo`.
    pub fn submit<S: ProductStorage>(
        &mut self,
        repo: &ProductRepository<S>,
    ) -> Result<Submitted, SubmitError> {
        self.touched.extend(Field::ALL);
        self.revalidate();

        let mut product = self.validator.validate(&self.draft)?;
        product.quantity = normalize_quantity_for_unit(&product.quantity, product.unit);

        let message = match &self.mode {
            FormMode::Create => {
                repo.add(product.clone())?;
                CREATED_MESSAGE
            }
            FormMode::Edit { original_id } => {
                if !repo.update(original_id, product.clone())? {
                    tracing::warn!(id = %original_id, "edited product no longer exists");
                }
                UPDATED_MESSAGE
            }
        };
        Ok(Submitted { product, message })
    }

    fn revalidate(&mut self) {
        self.errors = match self.validator.validate(&self.draft) {
            Ok(_) => ValidationErrors::default(),
            Err(all) => all
                .iter()
                .filter(|(field, _)| self.touched.contains(field))
                .collect(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use store::{MemoryStore, Unit};

    fn filled_form() -> ProductFormState {
        let mut form = ProductFormState::create_with_id("new-1");
        form.set_field(Field::Name, "Milk");
        form.set_field(Field::Unit, "lt");
        form.set_field(Field::Price, "499");
        form.set_field(Field::Quantity, "2");
        form.set_field(Field::ManufacturingDate, "2024-01-01");
        form
    }

    #[test]
    fn test_errors_only_for_touched_fields() {
        let mut form = ProductFormState::create_with_id("new-1");
        assert!(form.errors().is_empty());

        form.set_field(Field::Name, "");
        assert_eq!(form.error(Field::Name), Some(FieldError::MissingField));
        assert_eq!(form.error(Field::Price), None);

        form.set_field(Field::Name, "Milk");
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn test_inputs_are_formatted() {
        let mut form = filled_form();
        assert_eq!(form.draft().price, "4,99");

        form.set_field(Field::Name, "Milk 2%");
        assert_eq!(form.draft().name, "Milk ");

        form.set_field(Field::Quantity, "1234,5");
        assert_eq!(form.draft().quantity, "1.234,5");

        form.set_field(Field::Unit, "un");
        form.set_field(Field::Quantity, "12.7");
        assert_eq!(form.draft().quantity, "12");
    }

    #[test]
    fn test_create_submit_adds_product() {
        let repo = ProductRepository::new(MemoryStore::new());
        let mut form = filled_form();

        let submitted = form.submit(&repo).unwrap();
        assert_eq!(submitted.message, CREATED_MESSAGE);
        assert_eq!(repo.list_all(), vec![submitted.product]);
    }

    #[test]
    fn test_invalid_submit_writes_nothing_and_shows_all_errors() {
        let repo = ProductRepository::new(MemoryStore::new());
        let mut form = ProductFormState::create_with_id("new-1");

        let err = form.submit(&repo).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(form.error(Field::Name), Some(FieldError::MissingField));
        assert_eq!(form.error(Field::Price), Some(FieldError::MissingField));
        assert!(repo.store().raw().is_none());
    }

    #[test]
    fn test_perishable_submit_requires_later_expiration() {
        let repo = ProductRepository::new(MemoryStore::new());
        let mut form = filled_form();
        form.toggle_perishable();

        assert!(form.submit(&repo).is_err());
        assert_eq!(form.error(Field::ExpirationDate), Some(FieldError::MissingField));

        form.set_field(Field::ExpirationDate, "2023-12-31");
        assert_eq!(form.error(Field::ExpirationDate), Some(FieldError::ExpiredProduct));
        assert!(form.submit(&repo).is_err());

        form.set_field(Field::ExpirationDate, "2024-06-01");
        let submitted = form.submit(&repo).unwrap();
        assert_eq!(
            submitted.product.expiration_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(repo.list_all().len(), 1);
    }

    #[test]
    fn test_turning_off_perishable_clears_expiration() {
        let mut form = filled_form();
        form.toggle_perishable();
        form.set_field(Field::ExpirationDate, "2023-12-31");
        assert!(form.error(Field::ExpirationDate).is_some());

        form.toggle_perishable();
        assert!(!form.is_perishable());
        assert_eq!(form.draft().expiration_date, "");
        assert_eq!(form.error(Field::ExpirationDate), None);
    }

    #[test]
    fn test_edit_submit_replaces_product() {
        let repo = ProductRepository::new(MemoryStore::new());
        let mut form = filled_form();
        form.toggle_perishable();
        form.set_field(Field::ExpirationDate, "2024-06-01");
        let original = form.submit(&repo).unwrap().product;

        let mut edit = ProductFormState::edit(&original);
        assert_eq!(
            edit.mode(),
            &FormMode::Edit {
                original_id: "new-1".to_string()
            }
        );
        assert!(edit.is_perishable());
        edit.toggle_perishable();
        edit.set_field(Field::Name, "Oat Milk");

        let submitted = edit.submit(&repo).unwrap();
        assert_eq!(submitted.message, UPDATED_MESSAGE);
        let stored = repo.get_by_id("new-1").unwrap();
        assert_eq!(stored.name, "Oat Milk");
        assert!(!stored.perishable);
        assert!(stored.expiration_date.is_none());
        assert_eq!(repo.list_all().len(), 1);
    }

    #[test]
    fn test_edit_of_deleted_product_leaves_store_unchanged() {
        let repo = ProductRepository::new(MemoryStore::new());
        let original = filled_form().submit(&repo).unwrap().product;
        let mut edit = ProductFormState::edit(&original);
        repo.delete(&original.id).unwrap();
        let before = repo.store().raw();

        assert!(edit.submit(&repo).is_ok());
        assert_eq!(repo.store().raw(), before);
    }

    #[test]
    fn test_units_quantity_is_normalized_on_submit() {
        let repo = ProductRepository::new(MemoryStore::new());
        let mut form = filled_form();
        // Typed while the unit was liters, then switched to units
        form.set_field(Field::Quantity, "1,5");
        form.set_field(Field::Unit, "un");

        let product = form.submit(&repo).unwrap().product;
        assert_eq!(product.unit, Unit::Units);
        assert_eq!(product.quantity, "15");
    }

    #[test]
    fn test_duplicate_id_surfaces_store_error() {
        let repo = ProductRepository::new(MemoryStore::new());
        filled_form().submit(&repo).unwrap();

        let err = filled_form().submit(&repo).unwrap_err();
        assert!(matches!(err, SubmitError::Store(StoreError::DuplicateId(_))));
    }
}
