use dioxus::prelude::*;

use crate::ProductForm;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared "new product" view.
#[component]
pub fn CreateProductView(
    /// Called after saving or cancelling.
    on_done: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "New product" }
            ProductForm {
                product: None,
                on_saved: move |_| on_done.call(()),
                on_cancel: move |_| on_done.call(()),
            }
        }
    }
}
