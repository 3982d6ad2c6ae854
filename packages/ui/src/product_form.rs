use dioxus::prelude::*;
use store::{Field, FieldError, Product, Unit};

use crate::form_state::{ProductFormState, SubmitError};
use crate::{load_config, log_activity, make_repo, use_activity_log, LogLevel};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Create/edit form for a product.
///
/// Without `product` the form creates a new record with a fresh id; with one it
/// edits that record in place. `on_saved` fires after a successful write.
#[component]
pub fn ProductForm(
    #[props(!optional)] product: Option<Product>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(move || match &product {
        Some(product) => ProductFormState::edit(product),
        None => ProductFormState::create(),
    });
    let mut activity_log = use_activity_log();
    let currency_symbol = use_hook(|| load_config().display.currency_symbol);

    let handle_submit = move |_| {
        let repo = make_repo();
        let outcome = form.write().submit(&repo);
        match outcome {
            Ok(submitted) => {
                log_activity(&mut activity_log, LogLevel::Success, submitted.message);
                on_saved.call(());
            }
            Err(SubmitError::Invalid(errors)) => {
                tracing::debug!("submit blocked: {errors}");
            }
            Err(SubmitError::Store(e)) => {
                log_activity(
                    &mut activity_log,
                    LogLevel::Error,
                    &format!("Could not save product: {e}"),
                );
            }
        }
    };

    let state = form();
    let draft = state.draft().clone();
    let unit_code = draft.unit().unwrap_or_default().code();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "product-form",
            div {
                class: "product-form-grid",

                div {
                    class: "form-field",
                    label { r#for: "product-name", "Product name *" }
                    input {
                        id: "product-name",
                        r#type: "text",
                        value: "{draft.name}",
                        oninput: move |evt: FormEvent| form.write().set_field(Field::Name, &evt.value()),
                    }
                    FieldMessage { error: state.error(Field::Name) }
                }

                div {
                    class: "form-field",
                    label { r#for: "product-unit", "Unit of measure *" }
                    select {
                        id: "product-unit",
                        value: "{draft.unit}",
                        onchange: move |evt: FormEvent| form.write().set_field(Field::Unit, &evt.value()),
                        for unit in Unit::ALL {
                            option {
                                key: "{unit.code()}",
                                value: unit.code(),
                                selected: draft.unit == unit.code(),
                                "{unit.label()}"
                            }
                        }
                    }
                    FieldMessage { error: state.error(Field::Unit) }
                }

                div {
                    class: "form-field",
                    label { r#for: "product-quantity", "Quantity *" }
                    div {
                        class: "input-group",
                        input {
                            id: "product-quantity",
                            r#type: "text",
                            value: "{draft.quantity}",
                            oninput: move |evt: FormEvent| form.write().set_field(Field::Quantity, &evt.value()),
                        }
                        span { class: "input-addon", "{unit_code}" }
                    }
                    FieldMessage { error: state.error(Field::Quantity) }
                }

                div {
                    class: "form-field",
                    label { r#for: "product-price", "Price *" }
                    div {
                        class: "input-group",
                        span { class: "input-addon", "{currency_symbol}" }
                        input {
                            id: "product-price",
                            class: "text-right",
                            r#type: "text",
                            value: "{draft.price}",
                            oninput: move |evt: FormEvent| form.write().set_field(Field::Price, &evt.value()),
                        }
                    }
                    FieldMessage { error: state.error(Field::Price) }
                }

                div {
                    class: "form-field",
                    label { r#for: "product-expiration", "Expiration date" }
                    input {
                        id: "product-expiration",
                        r#type: "date",
                        disabled: !state.is_perishable(),
                        value: "{draft.expiration_date}",
                        oninput: move |evt: FormEvent| form.write().set_field(Field::ExpirationDate, &evt.value()),
                    }
                    FieldMessage { error: state.error(Field::ExpirationDate) }
                }

                div {
                    class: "form-field",
                    label { r#for: "product-manufacturing", "Manufacturing date *" }
                    input {
                        id: "product-manufacturing",
                        r#type: "date",
                        value: "{draft.manufacturing_date}",
                        oninput: move |evt: FormEvent| form.write().set_field(Field::ManufacturingDate, &evt.value()),
                    }
                    FieldMessage { error: state.error(Field::ManufacturingDate) }
                }

                div {
                    class: "form-checkbox",
                    input {
                        id: "product-perishable",
                        r#type: "checkbox",
                        checked: state.is_perishable(),
                        onchange: move |_| form.write().toggle_perishable(),
                    }
                    label { r#for: "product-perishable", "Mark as perishable" }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: handle_submit,
                    "Save"
                }
                button {
                    class: "danger",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Inline validation message under a field.
#[component]
fn FieldMessage(#[props(!optional)] error: Option<FieldError>) -> Element {
    rsx! {
        if let Some(error) = error {
            span { class: "form-error", "{error}" }
        }
    }
}
