//! Building the query string of a paged collection request: pagination,
//! the created-time window and the user's field filters.

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

/// Rows-per-page choices offered by the tables.
pub const PAGE_LIMITS: [usize; 3] = [10, 25, 50];
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

/// Which page of a collection is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            current_page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Offset of the first row of the current page.
    pub fn skip(&self) -> usize {
        self.rows_per_page * self.current_page
    }

    /// Whether moving to `new_page` is allowed given the collection total.
    ///
    /// Moving backwards is always allowed. Moving forwards is refused once the
    /// current page already reaches the end of the collection.
    pub fn can_change_page(&self, new_page: usize, total: usize) -> bool {
        !(new_page > self.current_page && self.rows_per_page * (self.current_page + 1) >= total)
    }

    /// Moves to `new_page` if allowed; returns whether the page changed.
    pub fn change_page(&mut self, new_page: usize, total: usize) -> bool {
        if !self.can_change_page(new_page, total) || new_page == self.current_page {
            return false;
        }
        self.current_page = new_page;
        true
    }

    /// Changes the page size and goes back to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.current_page = 0;
        self.rows_per_page = rows_per_page.max(1);
    }

    /// Index of the last page for `total` rows (0 when empty).
    pub fn last_page(&self, total: usize) -> usize {
        total.saturating_sub(1) / self.rows_per_page
    }

    /// 1-based `(from, to)` row numbers shown under the table.
    pub fn displayed_rows(&self, total: usize) -> (usize, usize) {
        if total == 0 {
            return (0, 0);
        }
        let from = self.skip() + 1;
        let to = (self.skip() + self.rows_per_page).min(total);
        (from.min(total), to)
    }
}

/// Time window applied to the `created` field of collection requests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum TimeRange {
    #[strum(serialize = "1h")]
    LastHour,
    #[default]
    #[strum(serialize = "24h")]
    LastDay,
    #[strum(serialize = "7d")]
    LastWeek,
    #[strum(serialize = "30d")]
    LastMonth,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LastHour => "Last hour",
            Self::LastDay => "Last 24 hours",
            Self::LastWeek => "Last 7 days",
            Self::LastMonth => "Last 30 days",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::LastHour => Duration::hours(1),
            Self::LastDay => Duration::hours(24),
            Self::LastWeek => Duration::days(7),
            Self::LastMonth => Duration::days(30),
        }
    }

    /// The concrete filter for this window ending at `now`.
    pub fn created_filter(&self, now: DateTime<Utc>) -> CreatedFilter {
        let filter_time = (now - self.duration()).timestamp();
        CreatedFilter {
            filter_time,
            filter_string: format!("&created=>={filter_time}"),
        }
    }
}

/// A created-time lower bound, as query fragment and as unix seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFilter {
    pub filter_time: i64,
    pub filter_string: String,
}

/// Comparison of a single field filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Equal,
    NotEqual,
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
}

impl FilterOp {
    const ALL: [FilterOp; 6] = [
        Self::Equal,
        Self::NotEqual,
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::Greater,
        Self::Less,
    ];

    /// Spelling in the dashboard's `filters` url parameter.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
        }
    }

    /// Value prefix understood by the backend.
    pub fn backend_prefix(&self) -> &'static str {
        match self {
            Self::Equal => "",
            Self::NotEqual => "!",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
        }
    }
}

/// One `field <op> value` predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed filter: {0}")]
pub struct FilterParseError(pub String);

impl Filter {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Equal, value)
    }

    /// `&field=<prefix>value`, with the value percent-encoded.
    pub fn backend_fragment(&self) -> String {
        format!(
            "&{}={}{}",
            urlencoding::encode(&self.field),
            self.op.backend_prefix(),
            urlencoding::encode(&self.value)
        )
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op.token(), self.value)
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    /// Splits at the earliest operator, preferring the longer token when two
    /// start at the same position (`>=` over `>`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pos, op) = FilterOp::ALL
            .iter()
            .filter_map(|op| s.find(op.token()).map(|pos| (pos, *op)))
            .min_by(|(pa, oa), (pb, ob)| {
                pa.cmp(pb).then(ob.token().len().cmp(&oa.token().len()))
            })
            .ok_or_else(|| FilterParseError(s.to_string()))?;

        let field = s[..pos].trim();
        let valid_field = !field.is_empty()
            && field
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        if !valid_field {
            return Err(FilterParseError(s.to_string()));
        }
        let value = s[pos + op.token().len()..].trim();
        Ok(Self::new(field, op, value))
    }
}

/// The active set of field filters, in the order the user added them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(Vec<Filter>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `filters` url parameter values, skipping malformed ones.
    pub fn from_params<'a>(params: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for param in params {
            match param.parse::<Filter>() {
                Ok(filter) => set.add(filter),
                Err(e) => dioxus_logger::tracing::warn!("ignoring {}", e),
            }
        }
        set
    }

    /// Adds a filter unless an identical one is already active.
    pub fn add(&mut self, filter: Filter) {
        if !self.0.contains(&filter) {
            self.0.push(filter);
        }
    }

    pub fn remove(&mut self, filter: &Filter) {
        self.0.retain(|f| f != filter);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.0.iter()
    }

    /// First equality filter on `field`, e.g. the pool a view is scoped to.
    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|f| f.field == field && f.op == FilterOp::Equal)
            .map(|f| f.value.as_str())
    }

    /// Backend query fragment: each filter as `&field=<prefix>value`.
    pub fn to_query_fragment(&self) -> String {
        self.0.iter().map(Filter::backend_fragment).join("")
    }

    /// Values for the dashboard's repeated `filters` url parameter.
    pub fn to_params(&self) -> Vec<String> {
        self.0.iter().map(|f| f.to_string()).collect()
    }
}

/// Everything needed to request one page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    pub pagination: Pagination,
    pub created: Option<CreatedFilter>,
    pub filters: FilterSet,
    pub extra: Vec<(String, String)>,
}

impl CollectionQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            ..Default::default()
        }
    }

    pub fn created(mut self, created: CreatedFilter) -> Self {
        self.created = Some(created);
        self
    }

    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// `limit={n}&count&skip={s}` followed by created, filter and extra fragments.
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "limit={}&count&skip={}",
            self.pagination.rows_per_page,
            self.pagination.skip()
        );
        if let Some(created) = &self.created {
            query.push_str(&created.filter_string);
        }
        query.push_str(&self.filters.to_query_fragment());
        for (k, v) in &self.extra {
            query.push_str(&format!(
                "&{}={}",
                urlencoding::encode(k),
                urlencoding::encode(v)
            ));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn skip_is_rows_times_page() {
        for rows in [1, 10, 25, 50] {
            for page in 0..20 {
                let p = Pagination {
                    current_page: page,
                    rows_per_page: rows,
                };
                assert_eq!(p.skip(), rows * page);
            }
        }
    }

    #[test]
    fn query_suffix_for_first_and_third_page() {
        let mut p = Pagination::new(10);
        assert_eq!(CollectionQuery::new(p).to_query_string(), "limit=10&count&skip=0");
        p.current_page = 2;
        assert_eq!(CollectionQuery::new(p).to_query_string(), "limit=10&count&skip=20");
    }

    #[test]
    fn forward_paging_stops_at_total() {
        let mut p = Pagination::new(10);
        assert!(p.change_page(1, 25));
        assert!(p.change_page(2, 25));
        // rows 20..25 are on page 2, nothing beyond
        assert!(!p.change_page(3, 25));
        assert_eq!(p.current_page, 2);
        assert!(p.change_page(0, 25));

        let empty = Pagination::new(10);
        assert!(!empty.can_change_page(1, 0));
        assert!(!Pagination::new(10).can_change_page(1, 10));
        assert!(Pagination::new(10).can_change_page(1, 11));
    }

    #[test]
    fn rows_per_page_change_resets_page() {
        let mut p = Pagination::new(10);
        p.change_page(3, 100);
        p.set_rows_per_page(25);
        assert_eq!(p.current_page, 0);
        assert_eq!(p.rows_per_page, 25);
        assert_eq!(p.last_page(51), 2);
        assert_eq!(p.displayed_rows(51), (1, 25));
        assert_eq!(p.displayed_rows(0), (0, 0));
    }

    #[test]
    fn created_filter_from_time_range() {
        let now = Utc.with_ymd_and_hms(2022, 5, 6, 12, 0, 0).unwrap();
        let f = TimeRange::LastHour.created_filter(now);
        assert_eq!(f.filter_time, now.timestamp() - 3600);
        assert_eq!(f.filter_string, format!("&created=>={}", now.timestamp() - 3600));
        assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::LastWeek);
    }

    #[test]
    fn filters_parse_and_render() {
        let f: Filter = "tx==abc".parse().unwrap();
        assert_eq!(f, Filter::equals("tx", "abc"));
        assert_eq!(f.backend_fragment(), "&tx=abc");

        let ne: Filter = "error!=".parse().unwrap();
        assert_eq!(ne.op, FilterOp::NotEqual);
        assert_eq!(ne.value, "");
        assert_eq!(ne.backend_fragment(), "&error=!");

        let ge: Filter = "sequence>=10".parse().unwrap();
        assert_eq!(ge.op, FilterOp::GreaterOrEqual);
        assert_eq!(ge.to_string(), "sequence>=10");

        assert!("==abc".parse::<Filter>().is_err());
        assert!("no operator".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_set_builds_query_fragment() {
        let set = FilterSet::from_params(["pool==p1", "garbage", "key==0xk", "pool==p1"]);
        assert_eq!(set.to_query_fragment(), "&pool=p1&key=0xk");
        assert_eq!(set.value_of("pool"), Some("p1"));
        assert_eq!(set.to_params(), vec!["pool==p1", "key==0xk"]);

        let now = Utc.with_ymd_and_hms(2022, 5, 6, 12, 0, 0).unwrap();
        let created = TimeRange::LastDay.created_filter(now);
        let query = CollectionQuery::new(Pagination::new(25))
            .created(created.clone())
            .filters(set)
            .extra("pool", "p9");
        assert_eq!(
            query.to_query_string(),
            format!(
                "limit=25&count&skip=0{}&pool=p1&key=0xk&pool=p9",
                created.filter_string
            )
        );
    }

    #[test]
    fn reserved_characters_stay_inside_their_value() {
        let f: Filter = "name==a&b=c #1%".parse().unwrap();
        assert_eq!(f.value, "a&b=c #1%");
        assert_eq!(f.backend_fragment(), "&name=a%26b%3Dc%20%231%25");

        let query = CollectionQuery::new(Pagination::new(10)).extra("pool", "p&x=1");
        assert_eq!(query.to_query_string(), "limit=10&count&skip=0&pool=p%26x%3D1");
    }
}
