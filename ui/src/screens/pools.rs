//=============================================================================
// File: src/screens/pools.rs
//=============================================================================
use api::format::format_timestamp;
use api::format::relative_time;
use api::models::TokenPool;
use api::paged::PagedView;
use chrono::Utc;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::action_link::ActionLink;
use crate::components::data_table::DataTable;
use crate::components::data_table::Pager;
use crate::components::empty_state::EmptyState;
use crate::components::filter_bar::FilterBar;
use crate::components::hash_popover::HashPopover;
use crate::components::pico::Card;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::screen::Screen;

#[component]
fn PoolRow(pool: TokenPool) -> Element {
    let created = relative_time(&pool.created, Utc::now());
    let full = format_timestamp(&pool.created);

    rsx! {
        tr {
            td {
                ActionLink { to: Screen::PoolDetails(pool.id.clone()), "{pool.name}" }
            }
            td { HashPopover { value: pool.id.clone(), label: "Pool ID" } }
            td { "{pool.standard}" }
            td { "{pool.pool_type}" }
            td { "{pool.state}" }
            td { title: "{full}", "{created}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PoolsScreen() -> Element {
    let app_state = use_context::<AppState>();

    let state = app_state.clone();
    let mut pools = use_paged_collection(move |ns, query| {
        let state = state.clone();
        async move { state.client.pools(&ns, &query).await }
    });

    rsx! {
        FilterBar {}
        Card {
            h3 { "Pools" }
            match pools.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No token pools" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: vec!["Name", "ID", "Standard", "Type", "State", "Created"],
                        for pool in pools.rows() {
                            PoolRow { key: "{pool.id}", pool }
                        }
                    }
                    Pager {
                        pagination: pools.pagination(),
                        total: pools.total(),
                        on_page: move |page| pools.change_page(page),
                        on_rows_per_page: move |rows| pools.set_rows_per_page(rows),
                    }
                },
            }
        }
    }
}
