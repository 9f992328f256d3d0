//! CSV adapters used by the command-line binary.

pub mod account_reader;
pub mod account_writer;
pub mod request_reader;
pub mod result_writer;
