//! Records returned by the backend. The dashboard only renders these, it
//! never owns their lifecycle.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::event_types::EventType;

/// One page of a collection, together with the size of the whole collection.
///
/// `total` is what the pager uses; `items.len()` is only the page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub sequence: u64,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub tx: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    pub created: DateTime<Utc>,
}

impl Event {
    /// The parsed event type, `None` for types this dashboard does not know.
    pub fn kind(&self) -> Option<EventType> {
        EventType::parse(&self.event_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(default)]
    pub namespace: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub blockchain_ids: Vec<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
pub enum TxState {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxStatusDetail {
    #[serde(rename = "type")]
    pub detail_type: String,
    pub status: TxState,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxStatus {
    pub status: TxState,
    #[serde(default)]
    pub details: Vec<TxStatusDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOperation {
    pub id: String,
    #[serde(rename = "type")]
    pub op_type: String,
    pub status: TxState,
    #[serde(default)]
    pub plugin: String,
    #[serde(default)]
    pub error: Option<String>,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxBlockchainEvent {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub protocol_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub key: String,
    pub pool: String,
    pub balance: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub connector: String,
    #[serde(default)]
    pub namespace: String,
    pub updated: DateTime<Utc>,
}

/// A balance row joined with the name of its pool.
///
/// `pool_name` falls back to the pool id when the pool could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalanceWithPoolName {
    pub balance: TokenBalance,
    pub pool_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub standard: String,
    #[serde(rename = "type", default)]
    pub pool_type: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub connector: String,
    #[serde(default)]
    pub locator: String,
    #[serde(default)]
    pub info: serde_json::Value,
    pub created: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransferType {
    Mint,
    Burn,
    Transfer,
}

impl TransferType {
    /// Label used in tables and as the histogram key.
    pub fn nice_name(&self) -> &'static str {
        match self {
            Self::Mint => "Mint",
            Self::Burn => "Burn",
            Self::Transfer => "Transfer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub local_id: String,
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
    pub pool: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    pub amount: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub blockchain_event: Option<String>,
    #[serde(default)]
    pub protocol_id: String,
    pub created: DateTime<Utc>,
}

/// Count of one type inside a histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTypeCount {
    #[serde(rename = "type")]
    pub metric_type: String,
    #[serde(deserialize_with = "count_from_str_or_number")]
    pub count: u64,
}

/// One time bucket as returned by the histogram endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBucket {
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "count_from_str_or_number")]
    pub count: u64,
    #[serde(default)]
    pub types: Vec<MetricTypeCount>,
    #[serde(default)]
    pub is_capped: bool,
}

/// A namespace the backend serves; the dashboard switches between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Transaction that caused a record, as embedded in token records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxRef {
    #[serde(rename = "type", default)]
    pub tx_type: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Permission for `operator` to move tokens of `key` in a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenApproval {
    pub local_id: String,
    pub pool: String,
    #[serde(default)]
    pub connector: String,
    pub key: String,
    pub operator: String,
    pub approved: bool,
    #[serde(default)]
    pub protocol_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub info: serde_json::Value,
    #[serde(default)]
    pub tx: TxRef,
    #[serde(default)]
    pub blockchain_event: Option<String>,
    pub created: DateTime<Utc>,
}

/// A token approval joined with the name of its pool.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenApprovalWithPoolName {
    pub approval: TokenApproval,
    pub pool_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceRef {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiUrls {
    #[serde(default)]
    pub openapi: String,
    #[serde(default)]
    pub ui: String,
}

/// A contract API published on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireflyApi {
    pub id: String,
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub interface: InterfaceRef,
    #[serde(default)]
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub urls: ApiUrls,
}

/// The histogram endpoint sends counts as decimal strings; accept numbers too.
fn count_from_str_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountRepr {
        Number(u64),
        Text(String),
    }

    match CountRepr::deserialize(deserializer)? {
        CountRepr::Number(n) => Ok(n),
        CountRepr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_response_keeps_total_separate_from_items() {
        let json = r#"{
            "items": [{
                "id": "e1", "sequence": 7, "type": "message_confirmed",
                "reference": "m1", "tx": "t1", "created": "2022-05-06T10:00:00Z"
            }],
            "total": 140
        }"#;
        let page: Paged<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 140);
        assert_eq!(page.items[0].tx.as_deref(), Some("t1"));
    }

    #[test]
    fn metric_counts_accept_strings_and_numbers() {
        let json = r#"[
            {"timestamp": "2022-05-06T10:00:00Z", "count": "5",
             "types": [{"type": "token_transfer_confirmed", "count": "3"},
                       {"type": "message_confirmed", "count": 2}]}
        ]"#;
        let buckets: Vec<MetricBucket> = serde_json::from_str(json).unwrap();
        assert_eq!(buckets[0].count, 5);
        assert_eq!(buckets[0].types[0].count, 3);
        assert_eq!(buckets[0].types[1].count, 2);
        assert!(!buckets[0].is_capped);
    }

    #[test]
    fn transfer_type_is_lowercase_on_the_wire() {
        let json = r#"{
            "localId": "l1", "type": "mint", "pool": "p1", "to": "0xabc",
            "amount": "10", "created": "2022-05-06T10:00:00Z"
        }"#;
        let transfer: TokenTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.transfer_type, TransferType::Mint);
        assert_eq!(transfer.from, None);
        assert_eq!(transfer.transfer_type.nice_name(), "Mint");
    }

    #[test]
    fn approval_embeds_its_transaction() {
        let json = r#"{
            "localId": "a1", "pool": "p1", "key": "0xowner", "operator": "0xop",
            "approved": true, "active": true, "protocolId": "000/000/01",
            "tx": {"type": "token_approval", "id": "t1"},
            "created": "2022-05-06T10:00:00Z"
        }"#;
        let approval: TokenApproval = serde_json::from_str(json).unwrap();
        assert!(approval.approved);
        assert_eq!(approval.tx.id.as_deref(), Some("t1"));
        assert_eq!(approval.blockchain_event, None);
        assert_eq!(approval.info, serde_json::Value::Null);
    }

    #[test]
    fn api_location_is_optional_json() {
        let json = r#"{
            "id": "api1", "namespace": "default", "name": "simple-storage",
            "interface": {"id": "if1"},
            "location": {"address": "0x1234"},
            "urls": {"openapi": "http://host/api/swagger.json", "ui": "http://host/api"}
        }"#;
        let api: FireflyApi = serde_json::from_str(json).unwrap();
        assert_eq!(api.interface.id, "if1");
        assert_eq!(api.location, Some(serde_json::json!({"address": "0x1234"})));
        assert_eq!(api.urls.ui, "http://host/api");

        let bare: FireflyApi = serde_json::from_str(r#"{"id": "api2", "name": "n"}"#).unwrap();
        assert_eq!(bare.location, None);
        assert!(bare.urls.openapi.is_empty());
    }

    #[test]
    fn namespace_needs_only_a_name() {
        let list: Vec<Namespace> = serde_json::from_str(
            r#"[{"name": "default", "description": "Default"}, {"name": "ns2"}]"#,
        )
        .unwrap();
        assert_eq!(list[1].name, "ns2");
        assert_eq!(list[0].created, None);
    }
}
