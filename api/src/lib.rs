//! UI-free core of the exchange explorer: backend models and client, query
//! building, paging and slide state, histogram folding and the pool cache.

pub mod client;
pub mod error;
pub mod event_types;
pub mod format;
pub mod histogram;
pub mod live;
pub mod models;
pub mod nav;
pub mod paged;
pub mod paths;
pub mod pool_cache;
pub mod prefs;
pub mod query;
pub mod sequencer;
pub mod slide;

pub use client::RestClient;
pub use error::ApiError;
pub use pool_cache::PoolCache;
pub use prefs::user_prefs::UserPrefs;
