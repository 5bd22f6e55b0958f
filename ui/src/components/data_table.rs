use api::query::Pagination;
use api::query::PAGE_LIMITS;
use dioxus::prelude::*;

/// A scrolling table with sticky headers. Rows are passed as children.
#[component]
pub fn DataTable(headers: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-height: 0; overflow-y: auto;",
            table {
                class: "striped",
                thead {
                    tr {
                        for header in headers {
                            th {
                                style: "position: sticky; top: 0; background: var(--pico-card-background-color); white-space: nowrap;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// Page navigation under a table.
#[component]
pub fn Pager(
    pagination: Pagination,
    total: usize,
    on_page: EventHandler<usize>,
    on_rows_per_page: EventHandler<usize>,
) -> Element {
    let (first, last) = pagination.displayed_rows(total);
    let current = pagination.current_page;
    let can_go_back = current > 0;
    let can_go_forward = pagination.can_change_page(current + 1, total);

    rsx! {
        nav {
            style: "display: flex; justify-content: flex-end; align-items: center; gap: 1rem; padding-top: 0.5rem;",
            label {
                style: "display: flex; align-items: center; gap: 0.5rem; margin: 0;",
                small { "Rows per page" }
                select {
                    style: "width: auto; margin: 0; padding: 0.2rem 2rem 0.2rem 0.5rem;",
                    onchange: move |evt| {
                        if let Ok(rows) = evt.value().parse::<usize>() {
                            on_rows_per_page.call(rows);
                        }
                    },
                    for limit in PAGE_LIMITS {
                        option {
                            value: "{limit}",
                            selected: limit == pagination.rows_per_page,
                            "{limit}"
                        }
                    }
                }
            }
            small { "{first}-{last} of {total}" }
            div {
                role: "group",
                style: "width: auto; margin: 0;",
                button {
                    class: "secondary outline",
                    disabled: !can_go_back,
                    onclick: move |_| on_page.call(current.saturating_sub(1)),
                    "‹"
                }
                button {
                    class: "secondary outline",
                    disabled: !can_go_forward,
                    onclick: move |_| on_page.call(current + 1),
                    "›"
                }
            }
        }
    }
}
