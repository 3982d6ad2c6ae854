use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Application header. Platform packages pass their router links as children.
#[component]
pub fn Navbar(#[props(default = "Inventory".to_string())] title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "{title}" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
