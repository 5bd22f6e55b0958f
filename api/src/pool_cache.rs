//! Session-lifetime cache of token pools, used to show pool names next to
//! balances without refetching the same pool for every row.

use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use futures::future::join_all;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::TokenApproval;
use crate::models::TokenApprovalWithPoolName;
use crate::models::TokenBalance;
use crate::models::TokenBalanceWithPoolName;
use crate::models::TokenPool;

/// Anything that can fetch a single pool by id.
#[allow(async_fn_in_trait)]
pub trait PoolSource {
    async fn fetch_pool(&self, namespace: &str, pool_id: &str) -> Result<TokenPool, ApiError>;
}

type PoolKey = (String, String);

/// Resolution state of one pool id.
///
/// The lock is held for the whole fetch, so concurrent callers queue behind
/// the one fetching. `finished` counts completed fetches: a caller that saw
/// it change while queued takes the shared outcome instead of fetching again.
#[derive(Debug, Default)]
struct Slot {
    finished: AtomicU64,
    state: Mutex<SlotState>,
}

#[derive(Debug, Default)]
struct SlotState {
    pool: Option<TokenPool>,
    last_error: Option<ApiError>,
}

/// Pools resolved so far, keyed by namespace and pool id. Entries are never
/// invalidated.
#[derive(Debug, Default)]
pub struct PoolCache {
    entries: RwLock<HashMap<PoolKey, Arc<Slot>>>,
}

impl PoolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool if it has already been resolved.
    pub async fn get(&self, namespace: &str, pool_id: &str) -> Option<TokenPool> {
        let slot = self
            .entries
            .read()
            .await
            .get(&(namespace.to_string(), pool_id.to_string()))
            .cloned()?;
        let state = slot.state.try_lock().ok()?;
        state.pool.clone()
    }

    /// Returns the cached pool, or fetches it from `source`.
    ///
    /// Concurrent callers asking for the same uncached id share one fetch and
    /// its outcome, failure included. A failed fetch leaves the id uncached so
    /// a later call tries again.
    pub async fn get_or_fetch<S: PoolSource>(
        &self,
        source: &S,
        namespace: &str,
        pool_id: &str,
    ) -> Result<TokenPool, ApiError> {
        let slot = self.slot(namespace, pool_id).await;
        let seen = slot.finished.load(Ordering::Acquire);
        let mut state = slot.state.lock().await;

        if let Some(pool) = &state.pool {
            return Ok(pool.clone());
        }
        if slot.finished.load(Ordering::Acquire) != seen {
            if let Some(e) = &state.last_error {
                return Err(e.clone());
            }
        }

        debug!("resolving pool {pool_id} in namespace {namespace}");
        let result = source.fetch_pool(namespace, pool_id).await;
        match &result {
            Ok(pool) => {
                state.pool = Some(pool.clone());
                state.last_error = None;
            }
            Err(e) => state.last_error = Some(e.clone()),
        }
        slot.finished.fetch_add(1, Ordering::Release);
        result
    }

    /// Name of the pool, or its id when it cannot be resolved.
    pub async fn pool_name<S: PoolSource>(
        &self,
        source: &S,
        namespace: &str,
        pool_id: &str,
    ) -> String {
        match self.get_or_fetch(source, namespace, pool_id).await {
            Ok(pool) => pool.name,
            Err(e) => {
                warn!("could not resolve pool {pool_id}: {e}");
                pool_id.to_string()
            }
        }
    }

    /// Joins every balance of a page with its pool's name. Pools that cannot
    /// be resolved fall back to their id.
    pub async fn with_pool_names<S: PoolSource>(
        &self,
        source: &S,
        namespace: &str,
        balances: Vec<TokenBalance>,
    ) -> Vec<TokenBalanceWithPoolName> {
        join_all(balances.into_iter().map(|balance| async move {
            let pool_name = self.pool_name(source, namespace, &balance.pool).await;
            TokenBalanceWithPoolName { balance, pool_name }
        }))
        .await
    }

    /// Same as [`Self::with_pool_names`] for a page of approvals.
    pub async fn approvals_with_pool_names<S: PoolSource>(
        &self,
        source: &S,
        namespace: &str,
        approvals: Vec<TokenApproval>,
    ) -> Vec<TokenApprovalWithPoolName> {
        join_all(approvals.into_iter().map(|approval| async move {
            let pool_name = self.pool_name(source, namespace, &approval.pool).await;
            TokenApprovalWithPoolName { approval, pool_name }
        }))
        .await
    }

    async fn slot(&self, namespace: &str, pool_id: &str) -> Arc<Slot> {
        let key = (namespace.to_string(), pool_id.to_string());

        if let Some(slot) = self.entries.read().await.get(&key) {
            return slot.clone();
        }

        // another task may have inserted the slot while we waited for the write lock.
        let mut entries = self.entries.write().await;
        entries.entry(key).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    struct CountingSource {
        fetches: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl PoolSource for CountingSource {
        async fn fetch_pool(&self, namespace: &str, pool_id: &str) -> Result<TokenPool, ApiError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            // let concurrent callers pile up on the same slot.
            tokio::task::yield_now().await;
            if self.fail {
                return Err(ApiError::http(404, b"not found"));
            }
            Ok(TokenPool {
                id: pool_id.to_string(),
                name: format!("{namespace}-{pool_id}-name"),
                standard: "ERC20".into(),
                pool_type: "fungible".into(),
                state: "confirmed".into(),
                connector: "erc20_erc721".into(),
                locator: String::new(),
                info: serde_json::Value::Null,
                created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            })
        }
    }

    fn balance(pool: &str) -> TokenBalance {
        TokenBalance {
            key: "0xkey".into(),
            pool: pool.into(),
            balance: "10".into(),
            uri: String::new(),
            connector: String::new(),
            namespace: "default".into(),
            updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn cached_pool_needs_no_fetch() {
        let cache = PoolCache::new();
        let source = CountingSource::default();
        cache.get_or_fetch(&source, "default", "p1").await.unwrap();
        assert_eq!(source.fetches(), 1);

        let pool = cache.get_or_fetch(&source, "default", "p1").await.unwrap();
        assert_eq!(pool.name, "default-p1-name");
        assert_eq!(source.fetches(), 1);
        assert!(cache.get("default", "p1").await.is_some());
    }

    #[tokio::test]
    async fn concurrent_lookups_share_one_fetch() {
        let cache = PoolCache::new();
        let source = CountingSource::default();
        let (a, b, c) = tokio::join!(
            cache.get_or_fetch(&source, "default", "p1"),
            cache.get_or_fetch(&source, "default", "p1"),
            cache.get_or_fetch(&source, "default", "p1"),
        );
        assert_eq!(a.unwrap(), b.unwrap());
        assert!(c.is_ok());
        assert_eq!(source.fetches(), 1);
    }

    #[tokio::test]
    async fn namespaces_are_cached_separately() {
        let cache = PoolCache::new();
        let source = CountingSource::default();
        cache.get_or_fetch(&source, "a", "p1").await.unwrap();
        cache.get_or_fetch(&source, "b", "p1").await.unwrap();
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn failure_is_not_cached() {
        let cache = PoolCache::new();
        let failing = CountingSource {
            fail: true,
            ..Default::default()
        };
        assert!(cache.get_or_fetch(&failing, "default", "p1").await.is_err());
        assert!(cache.get("default", "p1").await.is_none());

        let working = CountingSource::default();
        assert!(cache.get_or_fetch(&working, "default", "p1").await.is_ok());
        assert_eq!(working.fetches(), 1);
    }

    #[tokio::test]
    async fn page_of_balances_resolves_each_pool_once() {
        let cache = PoolCache::new();
        let source = CountingSource::default();
        let rows = cache
            .with_pool_names(
                &source,
                "default",
                vec![balance("p1"), balance("p2"), balance("p1"), balance("p1")],
            )
            .await;
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].pool_name, "default-p1-name");
        assert_eq!(rows[1].pool_name, "default-p2-name");
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn concurrent_failure_is_fetched_once_and_shared() {
        let cache = PoolCache::new();
        let failing = CountingSource {
            fail: true,
            ..Default::default()
        };
        let lookups = (0..25).map(|_| cache.get_or_fetch(&failing, "default", "p1"));
        let results = join_all(lookups).await;
        assert!(results.iter().all(|r| r == &Err(ApiError::http(404, b"not found"))));
        assert_eq!(failing.fetches(), 1);

        // a later call retries.
        assert!(cache.get_or_fetch(&failing, "default", "p1").await.is_err());
        assert_eq!(failing.fetches(), 2);
    }

    #[tokio::test]
    async fn page_on_failing_pool_fetches_it_once() {
        let cache = PoolCache::new();
        let failing = CountingSource {
            fail: true,
            ..Default::default()
        };
        let rows = cache
            .with_pool_names(&failing, "default", vec![balance("p1"); 10])
            .await;
        assert!(rows.iter().all(|r| r.pool_name == "p1"));
        assert_eq!(failing.fetches(), 1);
    }

    #[tokio::test]
    async fn approvals_share_the_pool_cache() {
        let cache = PoolCache::new();
        let source = CountingSource::default();
        cache.get_or_fetch(&source, "default", "p1").await.unwrap();

        let approval: TokenApproval = serde_json::from_value(serde_json::json!({
            "localId": "a1", "pool": "p1", "key": "0xk", "operator": "0xop",
            "approved": true, "created": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let rows = cache
            .approvals_with_pool_names(&source, "default", vec![approval])
            .await;
        assert_eq!(rows[0].pool_name, "default-p1-name");
        assert_eq!(source.fetches(), 1);
    }

    #[tokio::test]
    async fn unresolved_pool_falls_back_to_id() {
        let cache = PoolCache::new();
        let source = CountingSource {
            fail: true,
            ..Default::default()
        };
        let rows = cache
            .with_pool_names(&source, "default", vec![balance("p9")])
            .await;
        assert_eq!(rows[0].pool_name, "p9");
    }
}
