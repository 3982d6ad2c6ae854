use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating list of recent notifications, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let snapshot = log();

    if !snapshot.visible {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Recent activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        class: "secondary",
                        disabled: snapshot.entries().is_empty(),
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "activity-log-entries",
                if snapshot.entries().is_empty() {
                    li { class: "activity-log-empty", "Nothing yet." }
                }
                for entry in snapshot.entries().iter().rev() {
                    li {
                        key: "{entry.seq}",
                        class: entry.level.css_class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { class: "activity-log-level", " [{entry.level.label()}] " }
                        span { "{entry.message}" }
                    }
                }
            }
        }
    }
}

/// Opens and closes the panel. Shows the error count when there are errors.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let snapshot = log();
    let errors = snapshot.error_count();
    let total = snapshot.entries().len();

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Recent activity",
            onclick: move |_| {
                let mut log = log.write();
                log.visible = !log.visible;
            },
            if errors > 0 {
                "{errors} failed"
            } else {
                "Activity ({total})"
            }
        }
    }
}
