pub mod ports;
pub mod pricing;
pub mod tally;
pub mod ticket;
