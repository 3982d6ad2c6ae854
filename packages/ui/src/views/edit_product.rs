use dioxus::prelude::*;

use crate::{make_repo, ProductForm};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared "edit product" view.
///
/// Looks the product up by id; an unknown id renders a static message.
#[component]
pub fn EditProductView(
    id: String,
    /// Called after saving or cancelling.
    on_done: EventHandler<()>,
) -> Element {
    let content = match make_repo().get_by_id(&id) {
        Some(product) => rsx! {
            h1 { class: "view-title", "Edit product" }
            ProductForm {
                key: "{id}",
                product: Some(product),
                on_saved: move |_| on_done.call(()),
                on_cancel: move |_| on_done.call(()),
            }
        },
        None => rsx! {
            div {
                class: "view-placeholder",
                h2 { "Product not found" }
                button {
                    class: "secondary",
                    onclick: move |_| on_done.call(()),
                    "Back to list"
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            {content}
        }
    }
}
