use std::ops::Deref;
use std::sync::Arc;

use api::prefs::user_prefs::UserPrefs;
use api::PoolCache;
use api::RestClient;

/// Stable, non-reactive state shared by every screen.
#[derive(Debug)]
pub struct AppStateData {
    pub client: RestClient,
    pub prefs: UserPrefs,
    pub pool_cache: PoolCache,
}

#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(client: RestClient, prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData {
            client,
            prefs,
            pool_cache: PoolCache::new(),
        }))
    }
}
