use dioxus::prelude::*;
use views::{AppLayout, CreateProduct, EditProduct, NotFound, ProductList};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(AppLayout)]
        #[route("/product-list")]
        ProductList {},
        #[route("/create-product")]
        CreateProduct {},
        #[route("/edit-product/:id")]
        EditProduct { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    use_hook(|| {
        let config = ui::load_config();
        tracing::info!(key = %config.storage.key, "desktop inventory starting");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::ProductList {});
    rsx! {}
}
