use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payauth::application::authorizer::{AuthorizerConfig, PaymentAuthorizer};
use payauth::domain::ports::AccountStoreBox;
use payauth::error::PaymentError;
use payauth::infrastructure::in_memory::InMemoryAccountStore;
use payauth::interfaces::csv::account_reader::AccountReader;
use payauth::interfaces::csv::account_writer::AccountWriter;
use payauth::interfaces::csv::request_reader::RequestReader;
use payauth::interfaces::csv::result_writer::ResultWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Accounts CSV file used to seed the store before processing
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Do not write accounts back to the store when a payment is declined
    #[arg(long)]
    skip_update_on_decline: bool,

    /// Write the final state of every account to this CSV file
    #[arg(long)]
    final_state: Option<PathBuf>,

    /// Log filter, e.g. `info` or `payauth=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<PathBuf>) -> Result<AccountStoreBox> {
    use payauth::infrastructure::rocksdb::RocksDbAccountStore;

    match db_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using RocksDB account store");
            let store = RocksDbAccountStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(InMemoryAccountStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<PathBuf>) -> Result<AccountStoreBox> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
        );
    }
    Ok(Box::new(InMemoryAccountStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let store = open_store(cli.db_path)?;

    if let Some(accounts_path) = cli.accounts {
        let file = File::open(accounts_path).into_diagnostic()?;
        for account in AccountReader::new(file).accounts() {
            match account {
                Ok(account) => store.update(account).await.into_diagnostic()?,
                Err(e) => error!("Error reading account: {}", e),
            }
        }
    }

    let config = AuthorizerConfig {
        update_on_decline: !cli.skip_update_on_decline,
    };
    let authorizer = PaymentAuthorizer::with_config(store, config);

    let stdout = io::stdout();
    let mut results = ResultWriter::new(stdout.lock()).into_diagnostic()?;

    let file = File::open(cli.input).into_diagnostic()?;
    for request in RequestReader::new(file).requests() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                error!("Error reading payment request: {}", e);
                continue;
            }
        };

        match authorizer.authorize(&request).await {
            Ok(result) => results.write_result(&request, &result).into_diagnostic()?,
            Err(e @ (PaymentError::InvalidRequest(_) | PaymentError::BalanceOverflow { .. })) => {
                error!("Rejected payment request: {}", e);
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
    results.flush().into_diagnostic()?;

    if let Some(final_state) = cli.final_state {
        let accounts = authorizer.store().all_accounts().await.into_diagnostic()?;
        let file = File::create(final_state).into_diagnostic()?;
        AccountWriter::new(file)
            .write_accounts(accounts)
            .into_diagnostic()?;
    }

    Ok(())
}
