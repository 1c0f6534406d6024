use crate::application::service::PurchaseConfirmation;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Flat output row for a confirmation. Seats are reported as a count; the
/// individual handles stay on the structured value.
#[derive(Debug, Serialize)]
struct ConfirmationRecord {
    account: u64,
    adults: u32,
    children: u32,
    infants: u32,
    seats_reserved: u32,
    total: Decimal,
}

impl From<&PurchaseConfirmation> for ConfirmationRecord {
    fn from(confirmation: &PurchaseConfirmation) -> Self {
        Self {
            account: confirmation.account.0,
            adults: confirmation.adults,
            children: confirmation.children,
            infants: confirmation.infants,
            seats_reserved: confirmation.seats.len() as u32,
            total: confirmation.total,
        }
    }
}

/// CSV presenter for purchase confirmations. The core returns data; this is
/// the reporting boundary that turns it into text.
pub struct ConfirmationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ConfirmationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, confirmation: &PurchaseConfirmation) -> Result<()> {
        self.writer.serialize(ConfirmationRecord::from(confirmation))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
