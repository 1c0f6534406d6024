use crate::domain::tally::TicketTally;
use crate::domain::ticket::TicketType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Process-wide pricing configuration: unit price per category plus the
/// per-purchase ticket cap. Fixed at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSchedule {
    adult_price: Decimal,
    child_price: Decimal,
    infant_price: Decimal,
    max_tickets_per_purchase: u32,
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            adult_price: dec!(20),
            child_price: dec!(10),
            infant_price: Decimal::ZERO,
            max_tickets_per_purchase: 20,
        }
    }
}

impl PriceSchedule {
    pub fn price_of(&self, ticket_type: TicketType) -> Decimal {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }

    pub fn max_tickets_per_purchase(&self) -> u32 {
        self.max_tickets_per_purchase
    }

    /// Total cost of a validated tally. Infants are always free, so they
    /// never contribute regardless of the configured infant price being zero.
    pub fn total(&self, tally: &TicketTally) -> Decimal {
        Decimal::from(tally.adults()) * self.adult_price
            + Decimal::from(tally.children()) * self.child_price
            + Decimal::from(tally.infants()) * self.infant_price
    }
}
