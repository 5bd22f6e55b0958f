use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::backend::BackendSettings;
use super::env_value;
use crate::query::TimeRange;
use crate::query::DEFAULT_ROWS_PER_PAGE;
use crate::query::PAGE_LIMITS;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    backend: BackendSettings,
    rows_per_page: usize,
    time_range: TimeRange,
}

impl UserPrefs {
    /// # Environment Variables
    /// - `EXPLORER_ROWS_PER_PAGE`: one of 10, 25, 50. Other numbers snap to
    ///   the nearest choice.
    /// - `EXPLORER_TIME_RANGE`: `1h`, `24h`, `7d` or `30d`.
    ///
    /// See [`BackendSettings::from_env`] for the rest.
    pub fn from_env() -> Self {
        let rows_per_page = env_value("EXPLORER_ROWS_PER_PAGE", option_env!("EXPLORER_ROWS_PER_PAGE"))
            .and_then(|s| s.parse::<usize>().ok())
            .map(clamp_rows_per_page)
            .unwrap_or(DEFAULT_ROWS_PER_PAGE);

        let time_range = env_value("EXPLORER_TIME_RANGE", option_env!("EXPLORER_TIME_RANGE"))
            .and_then(|s| TimeRange::from_str(&s).ok())
            .unwrap_or_default();

        Self {
            backend: BackendSettings::from_env(),
            rows_per_page,
            time_range,
        }
    }

    pub fn backend(&self) -> &BackendSettings {
        &self.backend
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Nearest entry of the page-limit options; ties go to the smaller one.
pub fn clamp_rows_per_page(n: usize) -> usize {
    PAGE_LIMITS
        .iter()
        .copied()
        .min_by_key(|limit| limit.abs_diff(n))
        .unwrap_or(DEFAULT_ROWS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_page_snaps_to_options() {
        assert_eq!(clamp_rows_per_page(10), 10);
        assert_eq!(clamp_rows_per_page(1), 10);
        assert_eq!(clamp_rows_per_page(20), 25);
        assert_eq!(clamp_rows_per_page(40), 50);
        assert_eq!(clamp_rows_per_page(1000), 50);
    }
}
