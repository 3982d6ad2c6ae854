use dioxus::prelude::*;
use store::Product;

use crate::table_state::{Column, SortDirection, TableState};

const TABLE_CSS: Asset = asset!("/assets/styling/product_table.css");

/// Sortable, filterable, paginated product table with edit/delete actions.
#[component]
pub fn ProductTable(
    products: Vec<Product>,
    currency_symbol: String,
    page_size: usize,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<Product>,
) -> Element {
    let mut table = use_signal(|| TableState::new(page_size));
    let mut show_columns = use_signal(|| false);

    let state = table();
    let page = state.view(&products);
    let columns = state.visible_columns();
    let matching = page.matching;
    let colspan = columns.len() + 1;
    let page_number = page.page + 1;

    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        div {
            class: "product-table-toolbar",
            input {
                class: "product-table-filter",
                r#type: "search",
                placeholder: "Filter by name...",
                value: "{state.filter()}",
                oninput: move |evt: FormEvent| table.write().set_filter(&evt.value()),
            }
            div {
                class: "column-menu",
                button {
                    class: "secondary",
                    onclick: move |_| show_columns.set(!show_columns()),
                    "Columns"
                }
                if show_columns() {
                    div {
                        class: "column-menu-list",
                        for column in Column::ALL {
                            label {
                                key: "{column.header()}",
                                input {
                                    r#type: "checkbox",
                                    checked: state.is_visible(column),
                                    onchange: move |_| table.write().toggle_column(column),
                                }
                                " {column.header()}"
                            }
                        }
                    }
                }
            }
        }

        div {
            class: "product-table-wrapper",
            table {
                class: "product-table",
                thead {
                    tr {
                        for column in columns.iter().copied() {
                            th {
                                key: "{column.header()}",
                                class: "sortable",
                                onclick: move |_| table.write().toggle_sort(column),
                                "{column.header()}"
                                span { class: "sort-indicator", "{sort_indicator(state.sort(), column)}" }
                            }
                        }
                        th { "" }
                    }
                }
                tbody {
                    if page.rows.is_empty() {
                        tr {
                            td {
                                class: "product-table-empty",
                                colspan: "{colspan}",
                                "No products found!"
                            }
                        }
                    }
                    for product in page.rows.iter().map(|p| (*p).clone()) {
                        tr {
                            key: "{product.id}",
                            for column in columns.iter().copied() {
                                td {
                                    key: "{column.header()}",
                                    "{column.cell(&product, &currency_symbol)}"
                                }
                            }
                            td {
                                class: "row-actions",
                                button {
                                    class: "primary",
                                    onclick: {
                                        let id = product.id.clone();
                                        move |_| on_edit.call(id.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let product = product.clone();
                                        move |_| on_delete.call(product.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        div {
            class: "product-table-pager",
            span { "Page {page_number} of {page.page_count} ({matching} products)" }
            button {
                class: "secondary",
                disabled: !page.has_previous(),
                onclick: move |_| table.write().previous_page(matching),
                "Previous"
            }
            button {
                class: "secondary",
                disabled: !page.has_next(),
                onclick: move |_| table.write().next_page(matching),
                "Next"
            }
        }
    }
}

fn sort_indicator(sort: Option<(Column, SortDirection)>, column: Column) -> &'static str {
    match sort {
        Some((c, SortDirection::Ascending)) if c == column => " \u{25B2}",
        Some((c, SortDirection::Descending)) if c == column => " \u{25BC}",
        _ => "",
    }
}
