//! Known backend event types and the category each one is charted under.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::nav;

/// The three series the activity charts are split into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum EventCategory {
    Blockchain,
    Messages,
    Tokens,
}

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [Self::Blockchain, Self::Messages, Self::Tokens];

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    TransactionSubmitted,
    MessageConfirmed,
    MessageRejected,
    DatatypeConfirmed,
    IdentityConfirmed,
    IdentityUpdated,
    NamespaceConfirmed,
    TokenPoolConfirmed,
    TokenPoolOpFailed,
    TokenTransferConfirmed,
    TokenTransferOpFailed,
    TokenApprovalConfirmed,
    TokenApprovalOpFailed,
    ContractInterfaceConfirmed,
    ContractApiConfirmed,
    BlockchainEventReceived,
    BlockchainInvokeOpSucceeded,
    BlockchainInvokeOpFailed,
}

impl EventType {
    /// Parses a wire type string; unknown types yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_str(s.trim()).ok()
    }

    pub fn category(&self) -> EventCategory {
        use EventType::*;
        match self {
            TransactionSubmitted
            | ContractInterfaceConfirmed
            | ContractApiConfirmed
            | BlockchainEventReceived
            | BlockchainInvokeOpSucceeded
            | BlockchainInvokeOpFailed => EventCategory::Blockchain,
            MessageConfirmed | MessageRejected | DatatypeConfirmed | IdentityConfirmed
            | IdentityUpdated | NamespaceConfirmed => EventCategory::Messages,
            TokenPoolConfirmed
            | TokenPoolOpFailed
            | TokenTransferConfirmed
            | TokenTransferOpFailed
            | TokenApprovalConfirmed
            | TokenApprovalOpFailed => EventCategory::Tokens,
        }
    }

    /// Whether the event reports a failed operation, in which case the
    /// reference is an operation id rather than the affected record.
    pub fn is_op_failure(&self) -> bool {
        use EventType::*;
        matches!(
            self,
            TokenPoolOpFailed
                | TokenTransferOpFailed
                | TokenApprovalOpFailed
                | BlockchainInvokeOpSucceeded
                | BlockchainInvokeOpFailed
        )
    }

    pub fn is_transfer(&self) -> bool {
        matches!(
            self,
            EventType::TokenTransferConfirmed | EventType::TokenTransferOpFailed
        )
    }

    /// Label of the event's `reference` field.
    pub fn reference_label(&self) -> &'static str {
        use EventType::*;
        if self.is_op_failure() {
            return "Operation ID";
        }
        match self {
            TransactionSubmitted => "Transaction ID",
            MessageConfirmed | MessageRejected => "Message ID",
            DatatypeConfirmed => "Datatype ID",
            IdentityConfirmed | IdentityUpdated => "Identity ID",
            NamespaceConfirmed => "Namespace ID",
            TokenPoolConfirmed => "Pool ID",
            TokenTransferConfirmed => "Transfer ID",
            TokenApprovalConfirmed => "Approval ID",
            ContractInterfaceConfirmed => "Interface ID",
            ContractApiConfirmed => "API ID",
            BlockchainEventReceived => "Blockchain Event ID",
            _ => "Reference ID",
        }
    }

    /// Dashboard path showing the record the event refers to.
    pub fn reference_path(&self, ns: &str, reference: &str) -> String {
        use EventType::*;
        if self.is_op_failure() {
            return nav::activity_op_path(ns, Some(reference));
        }
        match self {
            TransactionSubmitted => nav::activity_tx_detail_path(ns, reference),
            MessageConfirmed | MessageRejected => nav::offchain_messages_path(ns, Some(reference)),
            DatatypeConfirmed => nav::offchain_datatypes_path(ns, Some(reference)),
            IdentityConfirmed | IdentityUpdated => nav::network_identities_path(ns, Some(reference)),
            NamespaceConfirmed => nav::network_namespaces_path(ns, Some(reference)),
            TokenPoolConfirmed => nav::tokens_pool_details_path(ns, reference),
            TokenTransferConfirmed => nav::tokens_transfers_path_local_id(ns, Some(reference)),
            TokenApprovalConfirmed => nav::tokens_approvals_path(ns, Some(reference)),
            ContractInterfaceConfirmed => nav::blockchain_interfaces_path(ns, Some(reference)),
            ContractApiConfirmed => nav::blockchain_apis_path(ns, Some(reference)),
            BlockchainEventReceived => nav::blockchain_events_path(ns, Some(reference)),
            _ => nav::activity_events_path(ns, None),
        }
    }

    /// Human readable name, e.g. `Token Transfer Confirmed`.
    pub fn nice_name(&self) -> String {
        let wire: &'static str = self.into();
        wire.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Category of a raw type string as found in histogram buckets.
pub fn category_of(raw_type: &str) -> Option<EventCategory> {
    EventType::parse(raw_type).map(|t| t.category())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_and_rejects_unknown() {
        assert_eq!(
            EventType::parse("token_transfer_confirmed"),
            Some(EventType::TokenTransferConfirmed)
        );
        assert_eq!(EventType::parse("no_such_event"), None);
        assert_eq!(EventType::MessageConfirmed.to_string(), "message_confirmed");
    }

    #[test]
    fn categories_follow_event_family() {
        assert_eq!(category_of("blockchain_event_received"), Some(EventCategory::Blockchain));
        assert_eq!(category_of("message_rejected"), Some(EventCategory::Messages));
        assert_eq!(category_of("token_approval_op_failed"), Some(EventCategory::Tokens));
        assert_eq!(category_of("bogus"), None);
    }

    #[test]
    fn op_failures_link_to_operations() {
        let t = EventType::TokenTransferOpFailed;
        assert_eq!(t.reference_label(), "Operation ID");
        assert_eq!(
            t.reference_path("default", "op1"),
            "/namespaces/default/activity/operations?slide=op1"
        );
        assert_eq!(
            EventType::TokenPoolConfirmed.reference_path("default", "p1"),
            "/namespaces/default/tokens/pools/p1"
        );
    }

    #[test]
    fn nice_name_capitalizes_words() {
        assert_eq!(
            EventType::TokenTransferConfirmed.nice_name(),
            "Token Transfer Confirmed"
        );
    }
}
