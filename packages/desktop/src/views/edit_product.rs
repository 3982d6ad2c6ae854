use dioxus::prelude::*;

use ui::views::EditProductView;

use crate::Route;

#[component]
pub fn EditProduct(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        EditProductView {
            id,
            on_done: move |_| {
                nav.push(Route::ProductList {});
            },
        }
    }
}
