//! Thin HTTP client for the backend's REST API. One attempt per call; the
//! caller reports failures.

use chrono::DateTime;
use chrono::Utc;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::Event;
use crate::models::FireflyApi;
use crate::models::MetricBucket;
use crate::models::Namespace;
use crate::models::Paged;
use crate::models::TokenApproval;
use crate::models::TokenBalance;
use crate::models::TokenPool;
use crate::models::TokenTransfer;
use crate::models::Transaction;
use crate::models::TxBlockchainEvent;
use crate::models::TxOperation;
use crate::models::TxStatus;
use crate::paths;
use crate::paths::BucketCollection;
use crate::paths::BucketCount;
use crate::pool_cache::PoolSource;
use crate::query::CollectionQuery;

#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    http: reqwest::Client,
}

impl RestClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute url of `path`, `None` for an empty path.
    pub fn endpoint(&self, path: &str) -> Option<String> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(format!("{}{}", self.base_url, trimmed))
        } else {
            Some(format!("{}/{}", self.base_url, trimmed))
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self
            .endpoint(path)
            .ok_or_else(|| ApiError::InvalidPath(path.to_string()))?;
        debug!("GET {url}");

        let result = async {
            let response = self.http.get(url.as_str()).send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            if !status.is_success() {
                return Err(ApiError::http(status.as_u16(), &bytes));
            }
            Ok(serde_json::from_slice::<T>(&bytes)?)
        }
        .await;

        if let Err(e) = &result {
            warn!("GET {url} failed: {e}");
        }
        result
    }

    /// One page of `resource` in `ns`.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        ns: &str,
        resource: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<T>, ApiError> {
        self.get_json(&collection_path(ns, resource, query)).await
    }

    /// Every namespace the backend serves.
    pub async fn namespaces(&self) -> Result<Vec<Namespace>, ApiError> {
        self.get_json(paths::NS_PREFIX).await
    }

    pub async fn events(&self, ns: &str, query: &CollectionQuery) -> Result<Paged<Event>, ApiError> {
        self.fetch_page(ns, paths::EVENTS, query).await
    }

    pub async fn event(&self, ns: &str, id: &str) -> Result<Event, ApiError> {
        self.get_json(&paths::namespaced(ns, &paths::event_by_id(id))).await
    }

    /// The newest `limit` events, newest first.
    pub async fn latest_events(&self, ns: &str, limit: usize) -> Result<Vec<Event>, ApiError> {
        let path = format!("{}?limit={limit}", paths::namespaced(ns, paths::EVENTS));
        self.get_json(&path).await
    }

    pub async fn transactions(
        &self,
        ns: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<Transaction>, ApiError> {
        self.fetch_page(ns, paths::TRANSACTIONS, query).await
    }

    pub async fn transaction(&self, ns: &str, id: &str) -> Result<Transaction, ApiError> {
        self.get_json(&paths::namespaced(ns, &paths::transaction_by_id(id)))
            .await
    }

    pub async fn transaction_status(&self, ns: &str, id: &str) -> Result<TxStatus, ApiError> {
        self.get_json(&paths::namespaced(ns, &paths::transaction_by_id_status(id)))
            .await
    }

    pub async fn transaction_operations(
        &self,
        ns: &str,
        id: &str,
    ) -> Result<Vec<TxOperation>, ApiError> {
        self.get_json(&paths::namespaced(
            ns,
            &paths::transaction_by_id_operations(id),
        ))
        .await
    }

    pub async fn transaction_blockchain_events(
        &self,
        ns: &str,
        id: &str,
    ) -> Result<Vec<TxBlockchainEvent>, ApiError> {
        self.get_json(&paths::namespaced(
            ns,
            &paths::transaction_by_id_blockchain_events(id),
        ))
        .await
    }

    pub async fn balances(
        &self,
        ns: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<TokenBalance>, ApiError> {
        self.fetch_page(ns, paths::TOKEN_BALANCES, query).await
    }

    /// Balances of `key` in `pool`; a well formed balance slide yields one row.
    pub async fn balances_by_key_pool(
        &self,
        ns: &str,
        key: &str,
        pool: &str,
    ) -> Result<Vec<TokenBalance>, ApiError> {
        self.get_json(&paths::namespaced(
            ns,
            &paths::token_balances_by_key_pool(key, pool),
        ))
        .await
    }

    /// Accounts holding a balance in `pool`.
    pub async fn pool_balances(
        &self,
        ns: &str,
        pool: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<TokenBalance>, ApiError> {
        let query = query.clone().extra("pool", pool);
        self.fetch_page(ns, paths::TOKEN_BALANCES, &query).await
    }

    pub async fn pools(
        &self,
        ns: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<TokenPool>, ApiError> {
        self.fetch_page(ns, paths::TOKEN_POOLS, query).await
    }

    pub async fn pool(&self, ns: &str, id: &str) -> Result<TokenPool, ApiError> {
        self.get_json(&paths::namespaced(ns, &paths::token_pool_by_id(id)))
            .await
    }

    pub async fn transfers(
        &self,
        ns: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<TokenTransfer>, ApiError> {
        self.fetch_page(ns, paths::TOKEN_TRANSFERS, query).await
    }

    pub async fn transfer(&self, ns: &str, local_id: &str) -> Result<TokenTransfer, ApiError> {
        self.get_json(&paths::namespaced(ns, &paths::token_transfer_by_id(local_id)))
            .await
    }

    pub async fn approvals(
        &self,
        ns: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<TokenApproval>, ApiError> {
        self.fetch_page(ns, paths::TOKEN_APPROVALS, query).await
    }

    /// The approval with `local_id`, `None` when the backend has no such
    /// approval.
    pub async fn approval(
        &self,
        ns: &str,
        local_id: &str,
    ) -> Result<Option<TokenApproval>, ApiError> {
        let matches: Vec<TokenApproval> = self
            .get_json(&paths::namespaced(ns, &paths::token_approval_by_id(local_id)))
            .await?;
        Ok(matches.into_iter().next())
    }

    pub async fn apis(
        &self,
        ns: &str,
        query: &CollectionQuery,
    ) -> Result<Paged<FireflyApi>, ApiError> {
        self.fetch_page(ns, paths::APIS, query).await
    }

    pub async fn api(&self, ns: &str, name: &str) -> Result<FireflyApi, ApiError> {
        self.get_json(&paths::namespaced(ns, &paths::api_by_name(name)))
            .await
    }

    pub async fn histogram(
        &self,
        ns: &str,
        collection: BucketCollection,
        start: i64,
        end: DateTime<Utc>,
        buckets: BucketCount,
    ) -> Result<Vec<MetricBucket>, ApiError> {
        self.get_json(&histogram_path(ns, collection, start, end, buckets))
            .await
    }
}

impl PoolSource for RestClient {
    async fn fetch_pool(&self, namespace: &str, pool_id: &str) -> Result<TokenPool, ApiError> {
        self.pool(namespace, pool_id).await
    }
}

/// `/api/v1/namespaces/{ns}{resource}?limit=..&count&skip=..` plus filters.
pub fn collection_path(ns: &str, resource: &str, query: &CollectionQuery) -> String {
    let path = paths::namespaced(ns, resource);
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{}", query.to_query_string())
}

pub fn histogram_path(
    ns: &str,
    collection: BucketCollection,
    start: i64,
    end: DateTime<Utc>,
    buckets: BucketCount,
) -> String {
    format!(
        "{}?startTime={start}&endTime={}&buckets={}",
        paths::namespaced(ns, &paths::charts_histogram(collection)),
        end.timestamp(),
        buckets.value()
    )
}

fn normalize_base_url(base_url: &str) -> Result<String, ApiError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidPath("empty base url".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::query::Filter;
    use crate::query::FilterSet;
    use crate::query::Pagination;

    #[test]
    fn endpoint_builder_normalizes_paths() {
        let client = RestClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(
            client.endpoint("/api/v1/status"),
            Some("http://127.0.0.1:5000/api/v1/status".to_string())
        );
        assert_eq!(
            client.endpoint("api/v1/status"),
            Some("http://127.0.0.1:5000/api/v1/status".to_string())
        );
        assert_eq!(client.endpoint("  "), None);
        assert!(RestClient::new(" ").is_err());
    }

    #[test]
    fn collection_path_carries_paging_and_filters() {
        let pagination = Pagination {
            current_page: 2,
            rows_per_page: 10,
        };
        let mut filters = FilterSet::new();
        filters.add(Filter::equals("tx", "t1"));
        let query = CollectionQuery::new(pagination).filters(filters);
        assert_eq!(
            collection_path("default", paths::EVENTS, &query),
            "/api/v1/namespaces/default/events?limit=10&count&skip=20&tx=t1"
        );
    }

    #[test]
    fn histogram_path_has_window_and_buckets() {
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            histogram_path(
                "ns",
                BucketCollection::Events,
                1_704_000_000,
                end,
                BucketCount::Large
            ),
            "/api/v1/namespaces/ns/charts/histogram/events?startTime=1704000000&endTime=1704067200&buckets=24"
        );
    }
}
