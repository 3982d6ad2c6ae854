use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no confirmation for an action that cannot be undone.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Yes, delete".to_string())] confirm_label: String,
    #[props(default = "No, cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_dismiss: move |_| on_cancel.call(()),
            div {
                class: "confirm-dialog",
                h2 { class: "confirm-dialog-title", "{title}" }
                p { class: "confirm-dialog-message", "{message}" }
                div {
                    class: "form-actions",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
