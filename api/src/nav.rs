//! Dashboard navigation paths and parsing of the `slide` / `filters` query
//! parameters that ride on them.

use reqwest::Url;

pub const ACTIVITY_PATH: &str = "activity";
pub const APIS_PATH: &str = "apis";
pub const APPROVALS_PATH: &str = "approvals";
pub const BALANCES_PATH: &str = "balances";
pub const BATCHES_PATH: &str = "batches";
pub const BLOCKCHAIN_PATH: &str = "blockchain";
pub const DATA_PATH: &str = "data";
pub const DATATYPES_PATH: &str = "datatypes";
pub const EVENTS_PATH: &str = "events";
pub const GROUPS_PATH: &str = "groups";
pub const HOME_PATH: &str = "home";
pub const IDENTITIES_PATH: &str = "identities";
pub const INTERFACES_PATH: &str = "interfaces";
pub const LISTENERS_PATH: &str = "listeners";
pub const MESSAGES_PATH: &str = "messages";
pub const MY_NODES_PATH: &str = "myNode";
pub const NAMESPACES_PATH: &str = "namespaces";
pub const NETWORK_PATH: &str = "network";
pub const NODES_PATH: &str = "nodes";
pub const OFFCHAIN_PATH: &str = "offChain";
pub const OPERATIONS_PATH: &str = "operations";
pub const ORGANIZATIONS_PATH: &str = "organizations";
pub const POOLS_PATH: &str = "pools";
pub const SUBSCRIPTIONS_PATH: &str = "subscriptions";
pub const TOKENS_PATH: &str = "tokens";
pub const TRANSACTIONS_PATH: &str = "transactions";
pub const TRANSFERS_PATH: &str = "transfers";
pub const WEBSOCKETS_PATH: &str = "websockets";

pub const SLIDE_PARAM: &str = "slide";
pub const FILTERS_PARAM: &str = "filters";

/// Resolves bare paths; only the path and query of a location are kept.
const LOCATION_BASE: &str = "http://localhost/";

/// Operation type of token transfers, used by the failed-transfers link.
pub const TOKEN_TRANSFER_OP: &str = "token_transfer";

fn ns_root(ns: &str) -> String {
    format!("/{NAMESPACES_PATH}/{ns}")
}

/// `name=value` with the value percent-encoded.
fn param(name: &str, value: &str) -> String {
    format!("{name}={}", urlencoding::encode(value))
}

fn filter_param(field: &str, op: &str, value: &str) -> String {
    param(FILTERS_PARAM, &format!("{field}{op}{value}"))
}

fn with_slide(path: String, slide: Option<&str>) -> String {
    match slide {
        Some(id) if !id.is_empty() => format!("{path}?{}", param(SLIDE_PARAM, id)),
        _ => path,
    }
}

fn with_filter(path: String, field: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("{path}?{}", filter_param(field, "==", v)),
        _ => path,
    }
}

// Home

pub fn home_path(ns: &str) -> String {
    format!("{}/{HOME_PATH}", ns_root(ns))
}

// Activity

pub fn activity_timeline_path(ns: &str) -> String {
    format!("{}/{ACTIVITY_PATH}", ns_root(ns))
}

pub fn activity_events_path(ns: &str, event_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{ACTIVITY_PATH}/{EVENTS_PATH}", ns_root(ns)),
        event_id,
    )
}

pub fn activity_events_path_with_tx_filter(ns: &str, tx_id: &str) -> String {
    with_filter(
        format!("{}/{ACTIVITY_PATH}/{EVENTS_PATH}", ns_root(ns)),
        "tx",
        Some(tx_id),
    )
}

pub fn activity_tx_path(ns: &str) -> String {
    format!("{}/{ACTIVITY_PATH}/{TRANSACTIONS_PATH}", ns_root(ns))
}

pub fn activity_tx_detail_path(ns: &str, tx_id: &str) -> String {
    format!("{}/{tx_id}", activity_tx_path(ns))
}

pub fn activity_tx_detail_path_with_slide(ns: &str, tx_id: &str, slide_id: &str) -> String {
    with_slide(activity_tx_detail_path(ns, tx_id), Some(slide_id))
}

pub fn activity_op_path(ns: &str, op_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{ACTIVITY_PATH}/{OPERATIONS_PATH}", ns_root(ns)),
        op_id,
    )
}

pub fn activity_op_path_with_tx_filter(ns: &str, tx_id: &str) -> String {
    with_filter(
        format!("{}/{ACTIVITY_PATH}/{OPERATIONS_PATH}", ns_root(ns)),
        "tx",
        Some(tx_id),
    )
}

pub fn activity_op_error_path(ns: &str) -> String {
    format!("{}?{}", activity_op_path(ns, None), filter_param("error", "!=", ""))
}

// Blockchain

pub fn blockchain_path(ns: &str) -> String {
    format!("{}/{BLOCKCHAIN_PATH}", ns_root(ns))
}

pub fn blockchain_events_path(ns: &str, be_id: Option<&str>) -> String {
    with_slide(format!("{}/{EVENTS_PATH}", blockchain_path(ns)), be_id)
}

pub fn blockchain_apis_path(ns: &str, api_name: Option<&str>) -> String {
    with_slide(format!("{}/{APIS_PATH}", blockchain_path(ns)), api_name)
}

pub fn blockchain_interfaces_path(ns: &str, interface_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{INTERFACES_PATH}", blockchain_path(ns)),
        interface_id,
    )
}

pub fn blockchain_listeners_path(ns: &str) -> String {
    format!("{}/{LISTENERS_PATH}", blockchain_path(ns))
}

pub fn blockchain_listeners_single_path(ns: &str, listener_id: &str) -> String {
    with_slide(blockchain_listeners_path(ns), Some(listener_id))
}

// Off-chain

pub fn offchain_path(ns: &str) -> String {
    format!("{}/{OFFCHAIN_PATH}", ns_root(ns))
}

pub fn offchain_messages_path(ns: &str, msg_id: Option<&str>) -> String {
    with_slide(format!("{}/{MESSAGES_PATH}", offchain_path(ns)), msg_id)
}

pub fn offchain_data_path(ns: &str, data_id: Option<&str>) -> String {
    with_slide(format!("{}/{DATA_PATH}", offchain_path(ns)), data_id)
}

pub fn offchain_datatypes_path(ns: &str, datatype_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{DATATYPES_PATH}", offchain_path(ns)),
        datatype_id,
    )
}

pub fn offchain_batches_path(ns: &str, batch_id: Option<&str>) -> String {
    with_slide(format!("{}/{BATCHES_PATH}", offchain_path(ns)), batch_id)
}

pub fn offchain_groups_path(ns: &str) -> String {
    format!("{}/{GROUPS_PATH}", offchain_path(ns))
}

// Tokens

pub fn tokens_path(ns: &str) -> String {
    format!("{}/{TOKENS_PATH}", ns_root(ns))
}

pub fn tokens_transfers_path(ns: &str, pool_id: Option<&str>) -> String {
    with_filter(
        format!("{}/{TRANSFERS_PATH}", tokens_path(ns)),
        "pool",
        pool_id,
    )
}

pub fn tokens_transfers_error_path(ns: &str) -> String {
    format!(
        "{}?{}&{}",
        activity_op_path(ns, None),
        filter_param("error", "!=", ""),
        filter_param("type", "==", TOKEN_TRANSFER_OP)
    )
}

pub fn tokens_transfers_path_local_id(ns: &str, local_id: Option<&str>) -> String {
    with_slide(format!("{}/{TRANSFERS_PATH}", tokens_path(ns)), local_id)
}

pub fn tokens_transfers_path_by_key_and_pool(ns: &str, key: &str, pool: &str) -> String {
    format!(
        "{}/{TRANSFERS_PATH}?{}&{}",
        tokens_path(ns),
        filter_param("key", "==", key),
        filter_param("pool", "==", pool)
    )
}

pub fn tokens_pools_path(ns: &str) -> String {
    format!("{}/{POOLS_PATH}", tokens_path(ns))
}

pub fn tokens_pool_details_path(ns: &str, pool_id: &str) -> String {
    format!("{}/{pool_id}", tokens_pools_path(ns))
}

pub fn tokens_balances_path(ns: &str) -> String {
    format!("{}/{BALANCES_PATH}", tokens_path(ns))
}

pub fn tokens_approvals_path(ns: &str, approval_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{APPROVALS_PATH}", tokens_path(ns)),
        approval_id,
    )
}

// Network

pub fn network_path(ns: &str) -> String {
    format!("{}/{NETWORK_PATH}", ns_root(ns))
}

pub fn network_orgs_path(ns: &str, slide_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{ORGANIZATIONS_PATH}", network_path(ns)),
        slide_id,
    )
}

pub fn network_nodes_path(ns: &str, slide_id: Option<&str>) -> String {
    with_slide(format!("{}/{NODES_PATH}", network_path(ns)), slide_id)
}

pub fn network_identities_path(ns: &str, slide_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{IDENTITIES_PATH}", network_path(ns)),
        slide_id,
    )
}

pub fn network_namespaces_path(ns: &str, slide_id: Option<&str>) -> String {
    with_slide(
        format!("{}/{NAMESPACES_PATH}", network_path(ns)),
        slide_id,
    )
}

// My node

pub fn my_node_path(ns: &str) -> String {
    format!("{}/{MY_NODES_PATH}", ns_root(ns))
}

pub fn my_node_subscriptions_path(ns: &str) -> String {
    format!("{}/{SUBSCRIPTIONS_PATH}", my_node_path(ns))
}

pub fn my_node_websockets_path(ns: &str) -> String {
    format!("{}/{WEBSOCKETS_PATH}", my_node_path(ns))
}

/// A dashboard location split into its path and the query parameters the
/// views care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardLocation {
    pub path: String,
    pub slide: Option<String>,
    pub filters: Vec<String>,
}

impl DashboardLocation {
    /// Parses a location such as `https://host/namespaces/ns/tokens/balances?slide=a||b`
    /// or a bare `/namespaces/...` path. Parameter values are percent-decoded;
    /// unknown parameters are ignored.
    pub fn parse(location: &str) -> Self {
        let url = match Url::parse(LOCATION_BASE).and_then(|base| base.join(location)) {
            Ok(url) => url,
            Err(e) => {
                dioxus_logger::tracing::warn!("unparsable location {location}: {e}");
                return Self {
                    path: location.split(['?', '#']).next().unwrap_or_default().to_string(),
                    ..Default::default()
                };
            }
        };

        let path = urlencoding::decode(url.path())
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| url.path().to_string());
        let mut parsed = Self {
            path,
            ..Default::default()
        };
        for (name, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            match name.as_ref() {
                SLIDE_PARAM => parsed.slide = Some(value.into_owned()),
                FILTERS_PARAM => parsed.filters.push(value.into_owned()),
                _ => {}
            }
        }
        parsed
    }

    /// Namespace segment of the path, if the path is namespaced.
    pub fn namespace(&self) -> Option<&str> {
        let mut segments = self.path.trim_start_matches('/').split('/');
        match (segments.next(), segments.next()) {
            (Some(NAMESPACES_PATH), Some(ns)) if !ns.is_empty() => Some(ns),
            _ => None,
        }
    }

    /// Renders the location back into a path with its query string.
    pub fn to_url(&self) -> String {
        let mut params: Vec<String> = self
            .filters
            .iter()
            .map(|f| param(FILTERS_PARAM, f))
            .collect();
        if let Some(slide) = &self.slide {
            params.push(param(SLIDE_PARAM, slide));
        }
        if params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_suffix_only_when_id_present() {
        assert_eq!(
            activity_events_path("default", None),
            "/namespaces/default/activity/events"
        );
        assert_eq!(
            activity_events_path("default", Some("ev1")),
            "/namespaces/default/activity/events?slide=ev1"
        );
        assert_eq!(
            tokens_transfers_path("ns1", Some("pool1")),
            "/namespaces/ns1/tokens/transfers?filters=pool%3D%3Dpool1"
        );
        assert_eq!(
            tokens_transfers_path("ns1", None),
            "/namespaces/ns1/tokens/transfers"
        );
    }

    #[test]
    fn composite_filter_paths() {
        assert_eq!(
            tokens_transfers_path_by_key_and_pool("ns", "0xk", "p"),
            "/namespaces/ns/tokens/transfers?filters=key%3D%3D0xk&filters=pool%3D%3Dp"
        );
        assert_eq!(
            tokens_transfers_error_path("ns"),
            "/namespaces/ns/activity/operations?filters=error%21%3D&filters=type%3D%3Dtoken_transfer"
        );
        assert_eq!(
            activity_tx_detail_path_with_slide("ns", "tx1", "op1"),
            "/namespaces/ns/activity/transactions/tx1?slide=op1"
        );
    }

    #[test]
    fn location_parsing_extracts_slide_and_filters() {
        let loc = DashboardLocation::parse(
            "http://localhost:3000/namespaces/default/tokens/balances?filters=pool==p1&slide=0xKEY||0xPOOL&filters=key==k",
        );
        assert_eq!(loc.path, "/namespaces/default/tokens/balances");
        assert_eq!(loc.slide.as_deref(), Some("0xKEY||0xPOOL"));
        assert_eq!(loc.filters, vec!["pool==p1", "key==k"]);
        assert_eq!(loc.namespace(), Some("default"));
    }

    #[test]
    fn location_round_trips_to_url() {
        let loc = DashboardLocation {
            path: "/namespaces/a/activity/events".into(),
            slide: Some("e1".into()),
            filters: vec!["tx==t1".into()],
        };
        assert_eq!(
            loc.to_url(),
            "/namespaces/a/activity/events?filters=tx%3D%3Dt1&slide=e1"
        );
        assert_eq!(DashboardLocation::parse("/other").namespace(), None);
        assert_eq!(DashboardLocation::parse(&loc.to_url()), loc);
    }

    #[test]
    fn reserved_characters_survive_the_url() {
        let loc = DashboardLocation {
            path: "/namespaces/ns/tokens/pools".into(),
            slide: Some("k%7C1||p #2".into()),
            filters: vec!["name==a&b=c".into(), "memo==50% off".into()],
        };
        let url = loc.to_url();
        assert_eq!(
            url,
            "/namespaces/ns/tokens/pools?filters=name%3D%3Da%26b%3Dc&filters=memo%3D%3D50%25%20off&slide=k%257C1%7C%7Cp%20%232"
        );
        assert_eq!(DashboardLocation::parse(&url), loc);
    }

    #[test]
    fn browser_encoded_parameters_are_decoded() {
        let loc = DashboardLocation::parse(
            "https://host/namespaces/ns/tokens/pools?filters=name%3D%3Dmy%20pool&slide=a%7C%7Cb#top",
        );
        assert_eq!(loc.path, "/namespaces/ns/tokens/pools");
        assert_eq!(loc.filters, vec!["name==my pool"]);
        assert_eq!(loc.slide.as_deref(), Some("a||b"));
    }
}
