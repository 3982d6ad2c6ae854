use dioxus::prelude::*;

use ui::{ActivityLogPanel, ActivityLogToggle, Navbar};

use crate::Route;

/// Header, routed content and the activity log overlay.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::ProductList {}, active_class: "active", "Products" }
            Link { to: Route::CreateProduct {}, active_class: "active", "New product" }
        }
        main {
            Outlet::<Route> {}
        }
        ActivityLogPanel {}
        ActivityLogToggle {}
    }
}
