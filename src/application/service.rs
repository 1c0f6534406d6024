use crate::domain::ports::{PaymentServiceBox, Seat, SeatReservationServiceBox};
use crate::domain::pricing::PriceSchedule;
use crate::domain::tally::TicketTally;
use crate::domain::ticket::{AccountId, PurchaseRequest};
use crate::error::{Result, TicketError};
use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of a successful purchase: per-category counts, the seats that
/// were reserved and the total charged. Pure data; rendering it is the
/// interfaces layer's job.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PurchaseConfirmation {
    pub account: AccountId,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub seats: Vec<Seat>,
    pub total: Decimal,
}

/// The main entry point for ticket purchases.
///
/// `TicketService` owns its two collaborators and the price schedule and
/// nothing else: every call derives a fresh tally from the request, so
/// concurrent or repeated purchases cannot contaminate each other.
pub struct TicketService {
    payment: PaymentServiceBox,
    reservation: SeatReservationServiceBox,
    schedule: PriceSchedule,
}

impl TicketService {
    /// Creates a service with the standard price schedule.
    pub fn new(payment: PaymentServiceBox, reservation: SeatReservationServiceBox) -> Self {
        Self::with_schedule(payment, reservation, PriceSchedule::default())
    }

    pub fn with_schedule(
        payment: PaymentServiceBox,
        reservation: SeatReservationServiceBox,
        schedule: PriceSchedule,
    ) -> Self {
        Self {
            payment,
            reservation,
            schedule,
        }
    }

    /// Validates, prices and executes a purchase.
    ///
    /// Strictly sequential: an invalid request touches no collaborator, a
    /// payment failure reserves no seats, and a reservation failure after
    /// payment is surfaced as [`TicketError::Reservation`] without any
    /// automatic refund.
    pub async fn purchase_tickets(&self, request: &PurchaseRequest) -> Result<PurchaseConfirmation> {
        let tally = TicketTally::from_request(request, &self.schedule)?;
        let total = self.schedule.total(&tally);

        self.payment
            .make_payment(total, request.account)
            .await
            .map_err(|e| TicketError::Payment(e.to_string()))?;

        // One call per occupied seat, adult seats then child seats, kept
        // sequential so seat numbering is reproducible.
        let mut seats = Vec::with_capacity(tally.seat_count() as usize);
        for _ in 0..tally.seat_count() {
            let seat = self.reservation.reserve_seat().await.map_err(|e| {
                TicketError::Reservation(format!("{e} (payment of {total} already taken)"))
            })?;
            seats.push(seat);
        }

        Ok(PurchaseConfirmation {
            account: request.account,
            adults: tally.adults(),
            children: tally.children(),
            infants: tally.infants(),
            seats,
            total,
        })
    }
}
