use dioxus::prelude::*;

/// Dimmed backdrop holding a dialog card.
///
/// `on_dismiss` fires on a click outside the card or on Escape.
#[component]
pub fn ModalOverlay(on_dismiss: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onclick: move |_| on_dismiss.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },
            section {
                class: "modal-card",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
