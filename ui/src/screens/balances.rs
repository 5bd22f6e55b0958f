//=============================================================================
// File: src/screens/balances.rs
//=============================================================================
use api::format::format_timestamp;
use api::format::relative_time;
use api::models::Paged;
use api::models::TokenBalanceWithPoolName;
use api::paged::PagedView;
use api::query::Filter;
use api::slide::BalanceSlideKey;
use api::slide::SlideState;
use chrono::Utc;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::action_link::ActionLink;
use crate::components::data_table::DataTable;
use crate::components::data_table::Pager;
use crate::components::empty_state::EmptyState;
use crate::components::filter_bar::FilterBar;
use crate::components::hash_popover::HashPopover;
use crate::components::list_item::IdListItem;
use crate::components::list_item::ListItem;
use crate::components::pico::Card;
use crate::components::slide_panel::SlideLoading;
use crate::components::slide_panel::SlidePanel;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::hooks::use_slide::use_slide;
use crate::screen::Screen;

#[component]
pub fn BalanceRow(
    row: TokenBalanceWithPoolName,
    #[props(optional)] on_open: Option<EventHandler<String>>,
    #[props(default = true)] show_pool: bool,
) -> Element {
    let slide_id = BalanceSlideKey::new(&row.balance.key, &row.balance.pool).encode();
    let updated = relative_time(&row.balance.updated, Utc::now());
    let full = format_timestamp(&row.balance.updated);

    rsx! {
        tr {
            style: if on_open.is_some() { "cursor: pointer;" } else { "" },
            onclick: move |_| {
                if let Some(handler) = &on_open {
                    handler.call(slide_id.clone());
                }
            },
            td { HashPopover { value: row.balance.key.clone(), label: "Key" } }
            if show_pool {
                td { "{row.pool_name}" }
            }
            td { "{row.balance.balance}" }
            td { title: "{full}", "{updated}" }
        }
    }
}

/// Details of one balance row, with links to its pool and transfers.
#[component]
pub fn BalanceDetail(row: TokenBalanceWithPoolName) -> Element {
    let balance = row.balance;
    let transfer_filters = vec![
        Filter::equals("key", &balance.key).to_string(),
        Filter::equals("pool", &balance.pool).to_string(),
    ];
    let updated = format_timestamp(&balance.updated);

    rsx! {
        IdListItem { label: "Key", value: balance.key.clone() }
        ListItem {
            label: "Pool",
            ActionLink { to: Screen::PoolDetails(balance.pool.clone()), "{row.pool_name}" }
        }
        IdListItem { label: "Pool ID", value: balance.pool.clone() }
        ListItem { label: "Balance", "{balance.balance}" }
        if !balance.uri.is_empty() {
            ListItem { label: "URI", "{balance.uri}" }
        }
        ListItem { label: "Connector", "{balance.connector}" }
        ListItem { label: "Updated", "{updated}" }
        p {
            style: "margin-top: 1rem;",
            ActionLink {
                to: Screen::Transfers,
                filters: transfer_filters,
                "View transfers for this key and pool"
            }
        }
    }
}

/// Slide fetch shared by every screen that lists balances. An id that is
/// not a well formed key/pool pair, or that matches anything but exactly one
/// balance, closes the panel.
pub async fn fetch_balance_slide(
    app_state: AppState,
    ns: String,
    slide_id: String,
) -> Result<Option<TokenBalanceWithPoolName>, api::ApiError> {
    let Some(key) = BalanceSlideKey::decode(&slide_id) else {
        return Ok(None);
    };
    let rows = app_state
        .client
        .balances_by_key_pool(&ns, &key.key, &key.pool)
        .await?;
    if rows.len() != 1 {
        return Ok(None);
    }
    let named = app_state
        .pool_cache
        .with_pool_names(&app_state.client, &ns, rows)
        .await;
    Ok(named.into_iter().next())
}

#[allow(non_snake_case)]
#[component]
pub fn BalancesScreen() -> Element {
    let app_state = use_context::<AppState>();

    let state = app_state.clone();
    let mut balances = use_paged_collection(move |ns, query| {
        let state = state.clone();
        async move {
            let page = state.client.balances(&ns, &query).await?;
            let items = state
                .pool_cache
                .with_pool_names(&state.client, &ns, page.items)
                .await;
            Ok(Paged {
                items,
                total: page.total,
            })
        }
    });

    let state = app_state.clone();
    let mut slide = use_slide(move |ns, id| fetch_balance_slide(state.clone(), ns, id));

    rsx! {
        FilterBar {}
        Card {
            h3 { "Balances" }
            match balances.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No token balances" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: vec!["Key", "Pool", "Balance", "Updated"],
                        for row in balances.rows() {
                            BalanceRow {
                                key: "{row.balance.key}-{row.balance.pool}",
                                row,
                                on_open: move |id: String| slide.open(id),
                            }
                        }
                    }
                    Pager {
                        pagination: balances.pagination(),
                        total: balances.total(),
                        on_page: move |page| balances.change_page(page),
                        on_rows_per_page: move |rows| balances.set_rows_per_page(rows),
                    }
                },
            }
        }
        match slide.state() {
            SlideState::Closed => rsx! {},
            SlideState::Loading { .. } => rsx! {
                SlidePanel { title: "Balance", on_close: move |_| slide.close(), SlideLoading {} }
            },
            SlideState::Loaded { detail, .. } => rsx! {
                SlidePanel {
                    title: "Balance",
                    on_close: move |_| slide.close(),
                    BalanceDetail { row: detail }
                }
            },
        }
    }
}
