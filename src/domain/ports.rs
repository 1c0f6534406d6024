use crate::domain::ticket::AccountId;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// A seat handed out by the reservation collaborator. Opaque to the core.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(transparent)]
pub struct Seat(pub u32);

/// Failure signalled by the payment collaborator. The orchestrator remaps
/// this into [`crate::error::TicketError::Payment`]; it never crosses the
/// service boundary raw.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct PaymentDeclined {
    pub reason: String,
}

impl PaymentDeclined {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure signalled by the reservation collaborator.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct ReservationFailed {
    pub reason: String,
}

impl ReservationFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External payment gateway. Called at most once per purchase, with the
/// exact computed total.
#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn make_payment(&self, amount: Decimal, account: AccountId)
    -> Result<(), PaymentDeclined>;
}

/// External seat booking system. Called once per seat-occupying ticket.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve_seat(&self) -> Result<Seat, ReservationFailed>;
}

pub type PaymentServiceBox = Box<dyn PaymentService>;
pub type SeatReservationServiceBox = Box<dyn SeatReservationService>;
