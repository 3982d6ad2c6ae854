use dioxus::prelude::*;

use ui::views::CreateProductView;

use crate::Route;

#[component]
pub fn CreateProduct() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateProductView {
            on_done: move |_| {
                nav.push(Route::ProductList {});
            },
        }
    }
}
