//=============================================================================
// File: src/screens/transfers.rs
//=============================================================================
use api::format::format_timestamp;
use api::format::relative_time;
use api::histogram::make_transfer_histogram;
use api::models::TokenTransfer;
use api::paged::PagedView;
use api::paths::BucketCollection;
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
use crate::components::histogram_chart::HistogramChart;
use crate::components::list_item::IdListItem;
use crate::components::list_item::ListItem;
use crate::components::pico::Card;
use crate::components::slide_panel::SlideLoading;
use crate::components::slide_panel::SlidePanel;
use crate::hooks::use_histogram::use_histogram;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::hooks::use_slide::use_slide;
use crate::hooks::use_slide::SlideHandle;
use crate::screen::Screen;

pub const TRANSFER_HEADERS: [&str; 6] = ["Type", "From", "To", "Amount", "Pool", "Created"];

/// Columns of a table already scoped to one pool.
pub const POOL_TRANSFER_HEADERS: [&str; 7] = [
    "Type",
    "From",
    "To",
    "Amount",
    "Blockchain event",
    "Signing key",
    "Created",
];

/// With `in_pool` the pool column gives way to the blockchain event and
/// signing key, matching [`POOL_TRANSFER_HEADERS`].
#[component]
pub fn TransferRow(
    transfer: TokenTransfer,
    on_open: EventHandler<String>,
    #[props(default)] in_pool: bool,
) -> Element {
    let id = transfer.local_id.clone();
    let created = relative_time(&transfer.created, Utc::now());
    let full = format_timestamp(&transfer.created);
    let kind = transfer.transfer_type.nice_name();

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| on_open.call(id.clone()),
            td { "{kind}" }
            td { HashPopover { value: transfer.from.clone().unwrap_or_default(), label: "From" } }
            td { HashPopover { value: transfer.to.clone().unwrap_or_default(), label: "To" } }
            td { "{transfer.amount}" }
            if in_pool {
                td {
                    HashPopover {
                        value: transfer.blockchain_event.clone().unwrap_or_default(),
                        label: "Blockchain event",
                    }
                }
                td { HashPopover { value: transfer.key.clone(), label: "Signing key" } }
            } else {
                td { HashPopover { value: transfer.pool.clone(), label: "Pool ID" } }
            }
            td { title: "{full}", "{created}" }
        }
    }
}

#[component]
pub fn TransferDetail(transfer: TokenTransfer) -> Element {
    let created = format_timestamp(&transfer.created);
    let kind = transfer.transfer_type.nice_name();

    rsx! {
        ListItem { label: "Type", "{kind}" }
        IdListItem { label: "Local ID", value: transfer.local_id.clone() }
        ListItem {
            label: "Pool",
            ActionLink { to: Screen::PoolDetails(transfer.pool.clone()), "View pool" }
        }
        IdListItem { label: "Pool ID", value: transfer.pool.clone() }
        IdListItem { label: "From", value: transfer.from.clone().unwrap_or_default() }
        IdListItem { label: "To", value: transfer.to.clone().unwrap_or_default() }
        ListItem { label: "Amount", "{transfer.amount}" }
        IdListItem { label: "Signing key", value: transfer.key.clone() }
        IdListItem { label: "Protocol ID", value: transfer.protocol_id.clone() }
        if let Some(be) = transfer.blockchain_event.clone() {
            IdListItem { label: "Blockchain event", value: be }
        }
        ListItem { label: "Created", "{created}" }
    }
}

/// Panel for the transfer named by the `slide` parameter.
#[component]
pub fn TransferSlide(slide: SlideHandle<TokenTransfer>) -> Element {
    let mut slide = slide;
    match slide.state() {
        SlideState::Closed => rsx! {},
        SlideState::Loading { .. } => rsx! {
            SlidePanel { title: "Transfer", on_close: move |_| slide.close(), SlideLoading {} }
        },
        SlideState::Loaded { detail, .. } => rsx! {
            SlidePanel {
                title: "Transfer",
                on_close: move |_| slide.close(),
                TransferDetail { transfer: detail }
            }
        },
    }
}

/// Transfer panel hook shared by the transfers and pool screens.
pub fn use_transfer_slide() -> SlideHandle<TokenTransfer> {
    let app_state = use_context::<AppState>();
    use_slide(move |ns, id| {
        let state = app_state.clone();
        async move { state.client.transfer(&ns, &id).await.map(Some) }
    })
}

#[allow(non_snake_case)]
#[component]
pub fn TransfersScreen() -> Element {
    let app_state = use_context::<AppState>();
    let histogram = use_histogram(BucketCollection::TokenTransfers, make_transfer_histogram);

    let state = app_state.clone();
    let mut transfers = use_paged_collection(move |ns, query| {
        let state = state.clone();
        async move { state.client.transfers(&ns, &query).await }
    });
    let mut slide = use_transfer_slide();

    rsx! {
        FilterBar {}
        Card {
            h3 { "Transfers" }
            HistogramChart {
                histogram: histogram().flatten(),
                empty_message: "No token transfers in this time range",
            }
        }
        Card {
            match transfers.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No token transfers" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: TRANSFER_HEADERS.to_vec(),
                        for transfer in transfers.rows() {
                            TransferRow {
                                key: "{transfer.local_id}",
                                transfer,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_table_trades_pool_column_for_event_and_key() {
        assert!(TRANSFER_HEADERS.contains(&"Pool"));
        assert!(!POOL_TRANSFER_HEADERS.contains(&"Pool"));
        assert!(POOL_TRANSFER_HEADERS.contains(&"Blockchain event"));
        assert!(POOL_TRANSFER_HEADERS.contains(&"Signing key"));
        assert_eq!(POOL_TRANSFER_HEADERS.len(), TRANSFER_HEADERS.len() + 1);
        assert_eq!(POOL_TRANSFER_HEADERS.last(), TRANSFER_HEADERS.last());
    }
}
