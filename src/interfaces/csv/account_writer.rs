use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes account state as CSV, in the same layout [`super::account_reader::AccountReader`] reads.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        self.writer
            .write_record(["account", "balance", "status", "schemes"])?;
        for account in accounts {
            self.writer.write_record([
                account.number.as_str(),
                account.balance.to_string().as_str(),
                account.status.to_string().as_str(),
                account.allowed_schemes.to_string().as_str(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
