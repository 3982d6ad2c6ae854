use dioxus::prelude::*;
use store::Product;

use crate::{load_config, log_activity, make_repo, use_activity_log, ConfirmDialog, LogLevel, ProductTable};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared product list view.
///
/// Reads every product from the local repository and re-reads the full list
/// after each delete. Platform packages provide navigation callbacks.
#[component]
pub fn ProductListView(
    /// Called with a product id when its edit button is pressed.
    on_edit: EventHandler<String>,
    /// Called when the user asks for a new product.
    on_create: EventHandler<()>,
) -> Element {
    let mut products = use_signal(|| make_repo().list_all());
    let mut pending_delete = use_signal(|| Option::<Product>::None);
    let mut activity_log = use_activity_log();
    let config = use_hook(load_config);

    let handle_confirm_delete = move |_| {
        let Some(product) = pending_delete.take() else {
            return;
        };
        let repo = make_repo();
        match repo.delete(&product.id) {
            Ok(true) => log_activity(
                &mut activity_log,
                LogLevel::Success,
                &format!("Deleted {}", product.name),
            ),
            Ok(false) => log_activity(
                &mut activity_log,
                LogLevel::Warning,
                &format!("{} was already deleted", product.name),
            ),
            Err(e) => log_activity(
                &mut activity_log,
                LogLevel::Error,
                &format!("Could not delete {}: {e}", product.name),
            ),
        }
        products.set(repo.list_all());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Product list" }
                button {
                    class: "primary",
                    onclick: move |_| on_create.call(()),
                    "New product"
                }
            }

            ProductTable {
                products: products(),
                currency_symbol: config.display.currency_symbol.clone(),
                page_size: config.page_size(),
                on_edit: move |id: String| on_edit.call(id),
                on_delete: move |product: Product| pending_delete.set(Some(product)),
            }

            if let Some(product) = pending_delete() {
                ConfirmDialog {
                    title: "Are you sure?".to_string(),
                    message: format!("\"{}\" will be permanently deleted. This action cannot be undone.", product.name),
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
