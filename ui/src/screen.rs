//! The pages of the explorer and their dashboard paths.

use api::nav;
use api::nav::DashboardLocation;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    Timeline,
    #[default]
    Events,
    Transactions,
    Apis,
    Balances,
    Approvals,
    Pools,
    PoolDetails(String),
    Transfers,
}

/// Screens listed in the tab bar.
pub const ALL_SCREENS: [Screen; 8] = [
    Screen::Timeline,
    Screen::Events,
    Screen::Transactions,
    Screen::Apis,
    Screen::Transfers,
    Screen::Balances,
    Screen::Approvals,
    Screen::Pools,
];

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Timeline => "Timeline",
            Screen::Events => "Events",
            Screen::Transactions => "Transactions",
            Screen::Apis => "APIs",
            Screen::Balances => "Balances",
            Screen::Approvals => "Approvals",
            Screen::Pools => "Pools",
            Screen::PoolDetails(_) => "Pool",
            Screen::Transfers => "Transfers",
        }
    }

    /// Whether this screen's tab is highlighted while `active` is shown.
    pub fn is_tab_of(&self, active: &Screen) -> bool {
        match (active, self) {
            (Screen::PoolDetails(_), Screen::Pools) => true,
            (active, current) => active == current,
        }
    }

    /// Screen to stay on after switching namespace. Pool ids do not carry
    /// over, so pool details falls back to the pool list.
    pub fn in_other_namespace(&self) -> Screen {
        match self {
            Screen::PoolDetails(_) => Screen::Pools,
            other => other.clone(),
        }
    }

    /// Dashboard path of the screen, without query parameters.
    pub fn path(&self, ns: &str) -> String {
        match self {
            Screen::Timeline => nav::activity_timeline_path(ns),
            Screen::Events => nav::activity_events_path(ns, None),
            Screen::Transactions => nav::activity_tx_path(ns),
            Screen::Apis => nav::blockchain_apis_path(ns, None),
            Screen::Balances => nav::tokens_balances_path(ns),
            Screen::Approvals => nav::tokens_approvals_path(ns, None),
            Screen::Pools => nav::tokens_pools_path(ns),
            Screen::PoolDetails(id) => nav::tokens_pool_details_path(ns, id),
            Screen::Transfers => nav::tokens_transfers_path(ns, None),
        }
    }

    /// Screen shown at `path`, if any.
    pub fn from_path(path: &str) -> Option<Screen> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [nav::NAMESPACES_PATH, _, nav::ACTIVITY_PATH] => Some(Screen::Timeline),
            [nav::NAMESPACES_PATH, _, nav::ACTIVITY_PATH, nav::EVENTS_PATH] => Some(Screen::Events),
            [nav::NAMESPACES_PATH, _, nav::ACTIVITY_PATH, nav::TRANSACTIONS_PATH] => {
                Some(Screen::Transactions)
            }
            [nav::NAMESPACES_PATH, _, nav::BLOCKCHAIN_PATH, nav::APIS_PATH] => Some(Screen::Apis),
            [nav::NAMESPACES_PATH, _, nav::TOKENS_PATH, nav::BALANCES_PATH] => Some(Screen::Balances),
            [nav::NAMESPACES_PATH, _, nav::TOKENS_PATH, nav::APPROVALS_PATH] => {
                Some(Screen::Approvals)
            }
            [nav::NAMESPACES_PATH, _, nav::TOKENS_PATH, nav::POOLS_PATH] => Some(Screen::Pools),
            [nav::NAMESPACES_PATH, _, nav::TOKENS_PATH, nav::POOLS_PATH, id] => {
                Some(Screen::PoolDetails(id.to_string()))
            }
            [nav::NAMESPACES_PATH, _, nav::TOKENS_PATH, nav::TRANSFERS_PATH] => {
                Some(Screen::Transfers)
            }
            _ => None,
        }
    }

    /// Screen and slide to show for a dashboard location. A transaction
    /// detail page opens that transaction's slide on the transactions screen.
    pub fn route(location: &DashboardLocation) -> Option<(Screen, Option<String>)> {
        if let Some(screen) = Screen::from_path(&location.path) {
            return Some((screen, location.slide.clone()));
        }
        let tx_prefix = format!("{}/", nav::activity_tx_path(location.namespace()?));
        let tx_id = location.path.strip_prefix(&tx_prefix)?;
        if tx_id.is_empty() || tx_id.contains('/') {
            return None;
        }
        Some((Screen::Transactions, Some(tx_id.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_back_to_screens() {
        for screen in ALL_SCREENS.into_iter().chain([Screen::PoolDetails("p1".into())]) {
            assert_eq!(Screen::from_path(&screen.path("default")), Some(screen));
        }
        assert_eq!(Screen::from_path("/namespaces/default/home"), None);
        assert_eq!(Screen::from_path(""), None);
    }

    #[test]
    fn transaction_detail_opens_slide() {
        let loc = DashboardLocation::parse("/namespaces/ns/activity/transactions/tx1");
        assert_eq!(
            Screen::route(&loc),
            Some((Screen::Transactions, Some("tx1".to_string())))
        );
        let loc = DashboardLocation::parse("/namespaces/ns/tokens/balances?slide=k||p");
        assert_eq!(
            Screen::route(&loc),
            Some((Screen::Balances, Some("k||p".to_string())))
        );
        let loc = DashboardLocation::parse("/namespaces/ns/tokens/approvals?slide=a1");
        assert_eq!(
            Screen::route(&loc),
            Some((Screen::Approvals, Some("a1".to_string())))
        );
        let loc = DashboardLocation::parse("/namespaces/ns/blockchain/apis?slide=my%20api");
        assert_eq!(
            Screen::route(&loc),
            Some((Screen::Apis, Some("my api".to_string())))
        );
        let loc = DashboardLocation::parse("/namespaces/ns/offChain/messages?slide=m1");
        assert_eq!(Screen::route(&loc), None);
    }

    #[test]
    fn namespace_switch_keeps_screen_except_pool_details() {
        assert_eq!(Screen::Approvals.in_other_namespace(), Screen::Approvals);
        assert_eq!(Screen::PoolDetails("p1".into()).in_other_namespace(), Screen::Pools);
        assert_eq!(
            Screen::Transfers.in_other_namespace().path("ns2"),
            "/namespaces/ns2/tokens/transfers"
        );
    }

    #[test]
    fn pool_details_highlights_pools_tab() {
        let active = Screen::PoolDetails("p1".into());
        assert!(Screen::Pools.is_tab_of(&active));
        assert!(!Screen::Balances.is_tab_of(&active));
    }
}
