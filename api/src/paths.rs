//! REST paths on the backend, relative to the API base url.

pub const NS_PREFIX: &str = "/api/v1/namespaces";

pub const APIS: &str = "/apis";
pub const EVENTS: &str = "/events";
pub const TRANSACTIONS: &str = "/transactions";
pub const TOKEN_APPROVALS: &str = "/tokens/approvals";
pub const TOKEN_BALANCES: &str = "/tokens/balances";
pub const TOKEN_POOLS: &str = "/tokens/pools";
pub const TOKEN_TRANSFERS: &str = "/tokens/transfers";

/// Collections the histogram endpoint can bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BucketCollection {
    Events,
    Messages,
    Operations,
    Transactions,
    #[strum(serialize = "tokentransfers")]
    TokenTransfers,
    #[strum(serialize = "blockchainevents")]
    BlockchainEvents,
}

/// How many buckets a histogram request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketCount {
    Small,
    Large,
}

impl BucketCount {
    pub fn value(&self) -> u32 {
        match self {
            Self::Small => 8,
            Self::Large => 24,
        }
    }
}

pub fn namespaced(ns: &str, resource: &str) -> String {
    format!("{NS_PREFIX}/{ns}{resource}")
}

pub fn api_by_name(name: &str) -> String {
    format!("{APIS}/{}", urlencoding::encode(name))
}

pub fn event_by_id(id: &str) -> String {
    format!("{EVENTS}/{id}")
}

pub fn transaction_by_id(id: &str) -> String {
    format!("{TRANSACTIONS}/{id}")
}

pub fn transaction_by_id_status(id: &str) -> String {
    format!("{TRANSACTIONS}/{id}/status")
}

pub fn transaction_by_id_operations(id: &str) -> String {
    format!("{TRANSACTIONS}/{id}/operations")
}

pub fn transaction_by_id_blockchain_events(id: &str) -> String {
    format!("{TRANSACTIONS}/{id}/blockchainevents")
}

pub fn token_approval_by_id(local_id: &str) -> String {
    format!("{TOKEN_APPROVALS}?localid={}", urlencoding::encode(local_id))
}

pub fn token_balances_by_key_pool(key: &str, pool: &str) -> String {
    format!(
        "{TOKEN_BALANCES}?key={}&pool={}",
        urlencoding::encode(key),
        urlencoding::encode(pool)
    )
}

pub fn token_pool_by_id(id: &str) -> String {
    format!("{TOKEN_POOLS}/{id}")
}

pub fn token_transfer_by_id(id: &str) -> String {
    format!("{TOKEN_TRANSFERS}/{id}")
}

pub fn charts_histogram(collection: BucketCollection) -> String {
    format!("/charts/histogram/{collection}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_paths() {
        assert_eq!(namespaced("default", EVENTS), "/api/v1/namespaces/default/events");
        assert_eq!(
            namespaced("ns", &transaction_by_id_blockchain_events("t1")),
            "/api/v1/namespaces/ns/transactions/t1/blockchainevents"
        );
        assert_eq!(
            namespaced("ns", &token_balances_by_key_pool("0xk", "p1")),
            "/api/v1/namespaces/ns/tokens/balances?key=0xk&pool=p1"
        );
        assert_eq!(
            token_balances_by_key_pool("k&pool=x", "p|1"),
            "/tokens/balances?key=k%26pool%3Dx&pool=p%7C1"
        );
        assert_eq!(api_by_name("my api"), "/apis/my%20api");
        assert_eq!(
            namespaced("ns", &token_approval_by_id("a1")),
            "/api/v1/namespaces/ns/tokens/approvals?localid=a1"
        );
    }

    #[test]
    fn histogram_collections_use_backend_names() {
        assert_eq!(
            charts_histogram(BucketCollection::TokenTransfers),
            "/charts/histogram/tokentransfers"
        );
        assert_eq!(charts_histogram(BucketCollection::Events), "/charts/histogram/events");
        assert_eq!(BucketCount::Large.value(), 24);
    }
}
