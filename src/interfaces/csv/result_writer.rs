use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::error::Result;
use std::io::Write;

/// Writes one CSV line per authorization outcome.
///
/// Columns: `debtor,scheme,amount,success,reason`. Unrecognized schemes and
/// successful payments leave their column empty.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(["debtor", "scheme", "amount", "success", "reason"])?;
        Ok(Self { writer })
    }

    pub fn write_result(&mut self, request: &PaymentRequest, result: &PaymentResult) -> Result<()> {
        let scheme = request.scheme().map(|s| s.to_string()).unwrap_or_default();
        let reason = result
            .decline_reason
            .map(|r| r.to_string())
            .unwrap_or_default();

        self.writer.write_record([
            request.debtor_account_number(),
            scheme.as_str(),
            request.amount().normalize().to_string().as_str(),
            if result.success { "true" } else { "false" },
            reason.as_str(),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
