pub mod confirmation_writer;
pub mod purchase_reader;
