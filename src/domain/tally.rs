use crate::domain::pricing::PriceSchedule;
use crate::domain::ticket::{PurchaseRequest, TicketType};
use crate::error::TicketError;

/// Per-category ticket counts for a single purchase.
///
/// A tally can only be obtained through [`TicketTally::from_request`], which
/// runs the full eligibility rule set, so holding one is proof the purchase
/// passed validation. It is built fresh on every call and never shared
/// between purchases.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TicketTally {
    adults: u32,
    children: u32,
    infants: u32,
}

impl TicketTally {
    /// Validates a purchase request and derives its tally.
    ///
    /// Checks run in order and the first violation wins:
    /// 1. at least one ticket requested
    /// 2. total tickets within the per-purchase maximum
    /// 3. at least one adult ticket
    /// 4. no more infants than adults (each infant sits on an adult's lap)
    pub fn from_request(
        request: &PurchaseRequest,
        schedule: &PriceSchedule,
    ) -> Result<Self, TicketError> {
        let mut tally = Self {
            adults: 0,
            children: 0,
            infants: 0,
        };

        for entry in &request.tickets {
            // Saturating keeps absurd quantities in "too many tickets"
            // territory instead of wrapping around the limit check.
            match entry.ticket_type {
                TicketType::Adult => tally.adults = tally.adults.saturating_add(entry.quantity),
                TicketType::Child => {
                    tally.children = tally.children.saturating_add(entry.quantity)
                }
                TicketType::Infant => tally.infants = tally.infants.saturating_add(entry.quantity),
            }
        }

        if tally.total_tickets() == 0 {
            return Err(TicketError::InvalidRequest(
                "no tickets requested".to_string(),
            ));
        }

        if tally.total_tickets() > schedule.max_tickets_per_purchase() {
            return Err(TicketError::InvalidRequest(format!(
                "maximum of {} tickets allowed per purchase",
                schedule.max_tickets_per_purchase()
            )));
        }

        if tally.adults == 0 {
            return Err(TicketError::InvalidRequest(
                "at least one adult ticket must be purchased".to_string(),
            ));
        }

        if tally.infants > tally.adults {
            return Err(TicketError::InvalidRequest(
                "cannot purchase more infant tickets than adult tickets".to_string(),
            ));
        }

        Ok(tally)
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn infants(&self) -> u32 {
        self.infants
    }

    /// All requested tickets, infants included.
    pub fn total_tickets(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Seats actually occupied: infants travel on a lap and get none.
    pub fn seat_count(&self) -> u32 {
        self.adults + self.children
    }
}
