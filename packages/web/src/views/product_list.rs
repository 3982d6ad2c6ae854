use dioxus::prelude::*;

use ui::views::ProductListView;

use crate::Route;

#[component]
pub fn ProductList() -> Element {
    let nav = use_navigator();

    rsx! {
        ProductListView {
            on_edit: move |id: String| {
                nav.push(Route::EditProduct { id });
            },
            on_create: move |_| {
                nav.push(Route::CreateProduct {});
            },
        }
    }
}
