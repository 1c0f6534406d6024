use serde::{Deserialize, Serialize};

/// The three ticket categories sold at the box office. Closed set: anything
/// else fails at the deserialization boundary, so downstream matches are
/// exhaustive with no fallback arm.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

/// Opaque reference to the purchasing account. The core never inspects it;
/// it is handed to the payment collaborator as-is.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Copy)]
pub struct AccountId(pub u64);

/// How many tickets of one category the customer wants.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct TicketTypeRequest {
    pub ticket_type: TicketType,
    pub quantity: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }
}

/// A complete purchase request: who is buying and what. Immutable once
/// constructed; validation derives a fresh tally from it on every call.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PurchaseRequest {
    pub account: AccountId,
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    pub fn new(account: AccountId, tickets: Vec<TicketTypeRequest>) -> Self {
        Self { account, tickets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_type_deserialization() {
        let ty: TicketType = serde_json::from_str("\"adult\"").unwrap();
        assert_eq!(ty, TicketType::Adult);
        let ty: TicketType = serde_json::from_str("\"infant\"").unwrap();
        assert_eq!(ty, TicketType::Infant);
    }

    #[test]
    fn test_unknown_ticket_type_rejected() {
        let result = serde_json::from_str::<TicketType>("\"senior\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_request_is_value_equal() {
        let a = PurchaseRequest::new(
            AccountId(1),
            vec![TicketTypeRequest::new(TicketType::Adult, 2)],
        );
        let b = a.clone();
        assert_eq!(a, b);
    }
}
