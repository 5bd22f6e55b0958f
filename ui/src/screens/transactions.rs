//=============================================================================
// File: src/screens/transactions.rs
//=============================================================================
use api::format::format_timestamp;
use api::format::relative_time;
use api::models::Transaction;
use api::models::TxBlockchainEvent;
use api::models::TxOperation;
use api::models::TxState;
use api::models::TxStatus;
use api::paged::PagedView;
use api::query::Filter;
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
use crate::hooks::use_error_reporter::use_error_reporter;
use crate::hooks::use_paged_collection::use_paged_collection;
use crate::hooks::use_slide::use_slide;
use crate::screen::Screen;

/// Everything the transaction panel shows. Each part is fetched on its own;
/// a part that failed to load is `None` and simply not rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TxDetail {
    pub tx: Option<Transaction>,
    pub status: Option<TxStatus>,
    pub operations: Option<Vec<TxOperation>>,
    pub blockchain_events: Option<Vec<TxBlockchainEvent>>,
}

#[component]
fn StateBadge(state: TxState) -> Element {
    let color = match state {
        TxState::Pending => "var(--pico-muted-color)",
        TxState::Succeeded => "var(--pico-ins-color)",
        TxState::Failed => "var(--pico-del-color)",
    };
    rsx! {
        strong { style: "color: {color};", "{state}" }
    }
}

#[component]
fn TransactionRow(tx: Transaction, on_open: EventHandler<String>) -> Element {
    let id = tx.id.clone();
    let created = relative_time(&tx.created, Utc::now());
    let full = format_timestamp(&tx.created);
    let blockchain_id = tx.blockchain_ids.first().cloned().unwrap_or_default();

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| on_open.call(id.clone()),
            td { HashPopover { value: tx.id.clone() } }
            td { "{tx.tx_type}" }
            td { HashPopover { value: blockchain_id } }
            td { title: "{full}", "{created}" }
        }
    }
}

#[component]
fn TransactionDetail(tx_id: String, detail: TxDetail) -> Element {
    let events_filter = Filter::equals("tx", &tx_id).to_string();

    rsx! {
        IdListItem { label: "ID", value: tx_id.clone() }
        if let Some(tx) = detail.tx {
            ListItem { label: "Type", "{tx.tx_type}" }
            for (i, id) in tx.blockchain_ids.iter().enumerate() {
                IdListItem { key: "{id}", label: format!("Blockchain ID {}", i + 1), value: id.clone() }
            }
            {
                let created = format_timestamp(&tx.created);
                rsx! { ListItem { label: "Created", "{created}" } }
            }
        }
        if let Some(status) = detail.status {
            ListItem { label: "Status", StateBadge { state: status.status } }
            for d in status.details {
                ListItem {
                    label: d.detail_type.clone(),
                    StateBadge { state: d.status }
                    if let Some(error) = d.error {
                        small { "{error}" }
                    }
                }
            }
        }
        if let Some(operations) = detail.operations {
            h5 { style: "margin-top: 1rem;", "Operations" }
            for op in operations {
                ListItem {
                    key: "{op.id}",
                    label: op.op_type.clone(),
                    small { "{op.plugin}" }
                    StateBadge { state: op.status }
                }
            }
        }
        if let Some(events) = detail.blockchain_events {
            h5 { style: "margin-top: 1rem;", "Blockchain events" }
            for be in events {
                ListItem {
                    key: "{be.id}",
                    label: be.name.clone(),
                    HashPopover { value: be.protocol_id.clone(), label: "Protocol ID" }
                }
            }
        }
        p {
            style: "margin-top: 1rem;",
            ActionLink {
                to: Screen::Events,
                filters: vec![events_filter],
                "View events of this transaction"
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn TransactionsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let reporter = use_error_reporter();

    let client = app_state.clone();
    let mut transactions = use_paged_collection(move |ns, query| {
        let client = client.clone();
        async move { client.client.transactions(&ns, &query).await }
    });

    let client = app_state.clone();
    let mut slide = use_slide(move |ns, id| {
        let client = client.clone();
        let mut reporter = reporter;
        async move {
            let api = &client.client;
            let (tx, status, operations, blockchain_events) = futures::join!(
                api.transaction(&ns, &id),
                api.transaction_status(&ns, &id),
                api.transaction_operations(&ns, &id),
                api.transaction_blockchain_events(&ns, &id),
            );
            Ok(Some(TxDetail {
                tx: reporter.check("Could not load transaction", tx),
                status: reporter.check("Could not load transaction status", status),
                operations: reporter.check("Could not load operations", operations),
                blockchain_events: reporter
                    .check("Could not load blockchain events", blockchain_events),
            }))
        }
    });

    rsx! {
        FilterBar {}
        Card {
            h3 { "Transactions" }
            match transactions.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No transactions" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: vec!["ID", "Type", "Blockchain ID", "Created"],
                        for tx in transactions.rows() {
                            TransactionRow {
                                key: "{tx.id}",
                                tx,
                                on_open: move |id: String| slide.open(id),
                            }
                        }
                    }
                    Pager {
                        pagination: transactions.pagination(),
                        total: transactions.total(),
                        on_page: move |page| transactions.change_page(page),
                        on_rows_per_page: move |rows| transactions.set_rows_per_page(rows),
                    }
                },
            }
        }
        match slide.state() {
            SlideState::Closed => rsx! {},
            SlideState::Loading { .. } => rsx! {
                SlidePanel { title: "Transaction", on_close: move |_| slide.close(), SlideLoading {} }
            },
            SlideState::Loaded { id, detail } => rsx! {
                SlidePanel {
                    title: "Transaction",
                    on_close: move |_| slide.close(),
                    TransactionDetail { tx_id: id, detail }
                }
            },
        }
    }
}
