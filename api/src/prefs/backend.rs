use serde::Deserialize;
use serde::Serialize;

use super::env_value;

/// Where the backend lives and how often to look for new events.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BackendSettings {
    pub api_url: String,
    pub namespace: String,
    pub poll_secs: u64,
}

impl BackendSettings {
    pub const DEFAULT_API_URL: &'static str = "http://127.0.0.1:5000";
    pub const DEFAULT_NAMESPACE: &'static str = "default";
    pub const DEFAULT_POLL_SECS: u64 = 10;

    /// Creates settings from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `EXPLORER_API_URL`: base url of the REST backend.
    /// - `EXPLORER_NAMESPACE`: namespace selected at startup.
    /// - `EXPLORER_POLL_SECS`: seconds between new-event polls. 0 disables
    ///   polling.
    pub fn from_env() -> Self {
        Self::from_values(
            env_value("EXPLORER_API_URL", option_env!("EXPLORER_API_URL")),
            env_value("EXPLORER_NAMESPACE", option_env!("EXPLORER_NAMESPACE")),
            env_value("EXPLORER_POLL_SECS", option_env!("EXPLORER_POLL_SECS")),
        )
    }

    fn from_values(
        api_url: Option<String>,
        namespace: Option<String>,
        poll_secs: Option<String>,
    ) -> Self {
        Self {
            api_url: api_url.unwrap_or_else(|| Self::DEFAULT_API_URL.to_string()),
            namespace: namespace.unwrap_or_else(|| Self::DEFAULT_NAMESPACE.to_string()),
            poll_secs: poll_secs
                .and_then(|s| s.parse().ok())
                .unwrap_or(Self::DEFAULT_POLL_SECS),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let s = BackendSettings::from_values(None, None, Some("soon".into()));
        assert_eq!(s.api_url, "http://127.0.0.1:5000");
        assert_eq!(s.namespace, "default");
        assert_eq!(s.poll_secs, 10);

        let s = BackendSettings::from_values(
            Some("https://ff.example.com".into()),
            Some("ns1".into()),
            Some("0".into()),
        );
        assert_eq!(s.namespace, "ns1");
        assert_eq!(s.poll_secs, 0);
    }
}
