//=============================================================================
// File: src/screens/approvals.rs
//=============================================================================
use api::format::format_timestamp;
use api::format::relative_time;
use api::format::short_hash;
use api::models::Paged;
use api::models::TokenApprovalWithPoolName;
use api::paged::PagedView;
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

pub const APPROVAL_HEADERS: [&str; 6] = [
    "Operator",
    "Pool",
    "Signing key",
    "Approved",
    "Blockchain event",
    "Created",
];

fn approved_label(approved: bool) -> &'static str {
    if approved {
        "Approved"
    } else {
        "Revoked"
    }
}

#[component]
fn ApprovalRow(row: TokenApprovalWithPoolName, on_open: EventHandler<String>) -> Element {
    let approval = row.approval;
    let id = approval.local_id.clone();
    let created = relative_time(&approval.created, Utc::now());
    let full = format_timestamp(&approval.created);
    let approved = approved_label(approval.approved);

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| on_open.call(id.clone()),
            td { HashPopover { value: approval.operator.clone(), label: "Operator" } }
            td { "{row.pool_name}" }
            td { HashPopover { value: approval.key.clone(), label: "Signing key" } }
            td { "{approved}" }
            td {
                HashPopover {
                    value: approval.blockchain_event.clone().unwrap_or_default(),
                    label: "Blockchain event",
                }
            }
            td { title: "{full}", "{created}" }
        }
    }
}

#[component]
fn ApprovalDetail(row: TokenApprovalWithPoolName) -> Element {
    let approval = row.approval;
    let created = format_timestamp(&approval.created);
    let approved = approved_label(approval.approved);
    let active = if approval.active { "Yes" } else { "No" };
    let info = serde_json::to_string_pretty(&approval.info)
        .unwrap_or_else(|_| approval.info.to_string());
    let has_info = !approval.info.is_null();

    rsx! {
        IdListItem { label: "Local ID", value: approval.local_id.clone() }
        ListItem {
            label: "Pool",
            ActionLink { to: Screen::PoolDetails(approval.pool.clone()), "{row.pool_name}" }
        }
        IdListItem { label: "Pool ID", value: approval.pool.clone() }
        IdListItem { label: "Operator", value: approval.operator.clone() }
        IdListItem { label: "Signing key", value: approval.key.clone() }
        ListItem { label: "Status", "{approved}" }
        ListItem { label: "Active", "{active}" }
        IdListItem { label: "Protocol ID", value: approval.protocol_id.clone() }
        if !approval.subject.is_empty() {
            IdListItem { label: "Subject", value: approval.subject.clone() }
        }
        ListItem { label: "Connector", "{approval.connector}" }
        if let Some(be) = approval.blockchain_event.clone() {
            IdListItem { label: "Blockchain event", value: be }
        }
        if let Some(tx) = approval.tx.id.clone() {
            IdListItem { label: "Transaction ID", value: tx.clone() }
            ListItem {
                label: "",
                ActionLink { to: Screen::Transactions, slide: tx, "View transaction" }
            }
        }
        ListItem { label: "Created", "{created}" }
        if has_info {
            details {
                style: "margin-top: 1rem;",
                summary { "Approval info" }
                pre { style: "white-space: pre-wrap;", "{info}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ApprovalsScreen() -> Element {
    let app_state = use_context::<AppState>();

    let state = app_state.clone();
    let mut approvals = use_paged_collection(move |ns, query| {
        let state = state.clone();
        async move {
            let page = state.client.approvals(&ns, &query).await?;
            let items = state
                .pool_cache
                .approvals_with_pool_names(&state.client, &ns, page.items)
                .await;
            Ok(Paged {
                items,
                total: page.total,
            })
        }
    });

    let state = app_state.clone();
    let mut slide = use_slide(move |ns, id| {
        let state = state.clone();
        async move {
            let Some(approval) = state.client.approval(&ns, &id).await? else {
                return Ok(None);
            };
            let named = state
                .pool_cache
                .approvals_with_pool_names(&state.client, &ns, vec![approval])
                .await;
            Ok(named.into_iter().next())
        }
    });

    rsx! {
        FilterBar {}
        Card {
            h3 { "Approvals" }
            match approvals.view() {
                PagedView::Loading => rsx! { progress {} },
                PagedView::Empty => rsx! { EmptyState { message: "No token approvals" } },
                PagedView::Rows => rsx! {
                    DataTable {
                        headers: APPROVAL_HEADERS.to_vec(),
                        for row in approvals.rows() {
                            ApprovalRow {
                                key: "{row.approval.local_id}",
                                row,
                                on_open: move |id: String| slide.open(id),
                            }
                        }
                    }
                    Pager {
                        pagination: approvals.pagination(),
                        total: approvals.total(),
                        on_page: move |page| approvals.change_page(page),
                        on_rows_per_page: move |rows| approvals.set_rows_per_page(rows),
                    }
                },
            }
        }
        match slide.state() {
            SlideState::Closed => rsx! {},
            SlideState::Loading { .. } => rsx! {
                SlidePanel { title: "Approval", on_close: move |_| slide.close(), SlideLoading {} }
            },
            SlideState::Loaded { detail, .. } => {
                let title = format!("Approval for {}", short_hash(&detail.approval.operator));
                rsx! {
                    SlidePanel {
                        title,
                        on_close: move |_| slide.close(),
                        ApprovalDetail { row: detail }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_status_labels() {
        assert_eq!(approved_label(true), "Approved");
        assert_eq!(approved_label(false), "Revoked");
    }
}
