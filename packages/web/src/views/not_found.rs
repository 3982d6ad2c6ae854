use dioxus::prelude::*;

use crate::Route;

/// Unknown paths land on the product list.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
    nav.replace(Route::ProductList {});
    rsx! {}
}
