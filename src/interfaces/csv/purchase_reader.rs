use crate::domain::ticket::{AccountId, PurchaseRequest, TicketType, TicketTypeRequest};
use crate::error::TicketError;
use serde::Deserialize;
use std::io::Read;

/// One input row: `account,adult,child,infant` with per-category quantities.
/// Missing quantity columns default to zero.
#[derive(Debug, Deserialize)]
struct PurchaseRecord {
    account: u64,
    #[serde(default)]
    adult: u32,
    #[serde(default)]
    child: u32,
    #[serde(default)]
    infant: u32,
}

impl From<PurchaseRecord> for PurchaseRequest {
    fn from(record: PurchaseRecord) -> Self {
        PurchaseRequest::new(
            AccountId(record.account),
            vec![
                TicketTypeRequest::new(TicketType::Adult, record.adult),
                TicketTypeRequest::new(TicketType::Child, record.child),
                TicketTypeRequest::new(TicketType::Infant, record.infant),
            ],
        )
    }
}

/// Streams purchase requests out of a CSV source. Malformed rows surface as
/// `Err` items so the host can report them and keep going.
pub struct PurchaseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PurchaseReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<PurchaseRequest, TicketError>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: PurchaseRecord| PurchaseRequest::from(record))
                .map_err(TicketError::from)
        })
    }
}
