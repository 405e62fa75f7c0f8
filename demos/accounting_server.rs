//! Runnable accounting service.
//!
//! ```sh
//! cargo run --example accounting_server --features http
//! curl -X POST localhost:3000/accounting -H 'content-type: application/json' \
//!      -d '{"category":"hotel","amount":125.0}'
//! curl localhost:3000/accounting
//! curl 'localhost:3000/accounting?action=status'
//! ```
//!
//! Ctrl-C clears the record file before the process exits.

use std::sync::Arc;

use tripkit::{service, FileRecordStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = Arc::new(FileRecordStore::new("data/accounting_records.json"));
    service::serve(store, "0.0.0.0:3000").await
}
