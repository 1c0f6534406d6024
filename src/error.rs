use thiserror::Error;

/// Failure modes of a ticket purchase, plus the ambient IO/CSV errors of the
/// interface layer. The three purchase variants are distinct on purpose:
/// callers need to know whether money changed hands before the failure.
#[derive(Error, Debug)]
pub enum TicketError {
    /// The request was rejected before any collaborator was contacted.
    #[error("invalid purchase request: {0}")]
    InvalidRequest(String),
    /// The payment collaborator declined or failed; no seats were reserved.
    #[error("payment failed: {0}")]
    Payment(String),
    /// Seat reservation failed after payment was taken.
    #[error("seat reservation failed: {0}")]
    Reservation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TicketError>;
