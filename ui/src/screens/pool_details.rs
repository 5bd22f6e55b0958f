//=============================================================================
// File: src/screens/pool_details.rs
//=============================================================================
use api::format::format_timestamp;
use api::models::Paged;
use api::models::TokenPool;
use api::paged::PagedView;
use api::query::Filter;
use dioxus::prelude::*;

use super::balances::BalanceRow;
use super::transfers::use_transfer_slide;
use super::transfers::TransferRow;
use super::transfers::TransferSlide;
use super::transfers::POOL_TRANSFER_HEADERS;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::data_table::DataTable;
use crate::components::data_table::Pager;
use crate::components::empty_state::EmptyState;
use crate::components::list_item::IdListItem;
use crate::components::list_item::ListItem;
use crate::components::pico::Card;
use crate::hooks::use_error_reporter::use_error_reporter;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::screen::Screen;

#[component]
fn PoolSummary(pool: TokenPool) -> Element {
    let created = format_timestamp(&pool.created);
    let info = serde_json::to_string_pretty(&pool.info).unwrap_or_else(|_| pool.info.to_string());
    let has_info = !pool.info.is_null();

    rsx! {
        Card {
            h3 { "{pool.name}" }
            IdListItem { label: "ID", value: pool.id.clone() }
            ListItem { label: "Standard", "{pool.standard}" }
            ListItem { label: "Type", "{pool.pool_type}" }
            ListItem { label: "State", "{pool.state}" }
            ListItem { label: "Connector", "{pool.connector}" }
            IdListItem { label: "Locator", value: pool.locator.clone() }
            ListItem { label: "Created", "{created}" }
            if has_info {
                details {
                    style: "margin-top: 1rem;",
                    summary { "Pool info" }
                    pre { style: "white-space: pre-wrap;", "{info}" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PoolDetailsScreen(pool_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut reporter = use_error_reporter();

    let state = app_state.clone();
    let id = pool_id.clone();
    let pool = use_resource(move || {
        let state = state.clone();
        let id = id.clone();
        let ns = app_state_mut.namespace.read().clone();
        async move {
            let result = state.pool_cache.get_or_fetch(&state.client, &ns, &id).await;
            reporter.check("Could not load pool", result)
        }
    });

    let state = app_state.clone();
    let id = pool_id.clone();
    let mut accounts = use_paged_collection(move |ns, query| {
        let state = state.clone();
        let id = id.clone();
        async move {
            let page = state.client.pool_balances(&ns, &id, &query).await?;
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
    let id = pool_id.clone();
    let mut transfers = use_paged_collection(move |ns, query| {
        let state = state.clone();
        let query = query.extra("pool", id.clone());
        async move { state.client.transfers(&ns, &query).await }
    });
    let mut slide = use_transfer_slide();

    let pool_filter = Filter::equals("pool", &pool_id).to_string();

    rsx! {
        match pool() {
            Some(Some(pool)) => rsx! { PoolSummary { pool } },
            _ => rsx! { Card { progress {} } },
        }
        Card {
            h4 { "Accounts" }
            match accounts.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No accounts hold this token" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: vec!["Key", "Balance", "Updated"],
                        for row in accounts.rows() {
                            BalanceRow {
                                key: "{row.balance.key}",
                                row,
                                show_pool: false,
                            }
                        }
                    }
                    Pager {
                        pagination: accounts.pagination(),
                        total: accounts.total(),
                        on_page: move |page| accounts.change_page(page),
                        on_rows_per_page: move |rows| accounts.set_rows_per_page(rows),
                    }
                },
            }
        }
        Card {
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { style: "margin: 0;", "Transfers" }
                ActionLink { to: Screen::Transfers, filters: vec![pool_filter], "View all" }
            }
            match transfers.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No transfers in this pool" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: POOL_TRANSFER_HEADERS.to_vec(),
                        for transfer in transfers.rows() {
                            TransferRow {
                                key: "{transfer.local_id}",
                                transfer,
                                in_pool: true,
                                on_open: move |id: String| slide.open(id),
                            }
                        }
                    }
                    Pager {
                        pagination: transfers.pagination(),
                        total: transfers.total(),
                        on_page: move |page| transfers.change_page(page),
                        on_rows_per_page: move |rows| transfers.set_rows_per_page(rows),
                    }
                },
            }
        }
        TransferSlide { slide }
    }
}
