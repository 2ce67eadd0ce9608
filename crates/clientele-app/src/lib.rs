//! # Clientele Application
//!
//! Dependency injection and wiring.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  AppConfig ──► backend?                                          │
//! │                 ├── memory  ► InMemoryCustomerStore (+ seed)     │
//! │                 └── sqlite  ► SqliteCustomerStore::connect       │
//! │                                    │                             │
//! │                          CustomerGateway<S>                      │
//! │                                    │                             │
//! │                          CustomerCommand::execute                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;

use std::time::Duration;

use clientele_adapter::{InMemoryCustomerStore, SqliteConfig, SqliteCustomerStore};
use clientele_domain::{CustomerData, CustomerStore};
use clientele_usecase::CustomerGateway;
use shared::{AppConfig, DatabaseConfig, StoreBackend};
use tracing::info;

pub use commands::{CommandOutput, CustomerCommand};

/// Build the configured store and run one command against it
pub async fn run(config: &AppConfig, command: &CustomerCommand) -> anyhow::Result<CommandOutput> {
    info!(backend = %config.backend, "Wiring customer gateway");

    let output = match config.backend {
        StoreBackend::Memory => {
            let store = seeded_memory_store(&config.seed).await?;
            command.execute(&CustomerGateway::new(store)).await?
        }
        StoreBackend::Sqlite => {
            let store = SqliteCustomerStore::connect(&sqlite_config(&config.database)).await?;
            command.execute(&CustomerGateway::new(store)).await?
        }
    };

    Ok(output)
}

/// In-memory store holding one record per seed name, ids from 1
pub async fn seeded_memory_store(seed: &[String]) -> anyhow::Result<InMemoryCustomerStore> {
    let store = InMemoryCustomerStore::new();
    for name in seed {
        store.create(CustomerData::new(name.as_str())).await?;
    }
    Ok(store)
}

/// Process exit status for a finished command: 1 when a lookup found nothing
pub fn exit_status(output: &CommandOutput) -> u8 {
    if output.is_absent() {
        1
    } else {
        0
    }
}

fn sqlite_config(database: &DatabaseConfig) -> SqliteConfig {
    SqliteConfig::new(database.url.as_str())
        .with_max_connections(database.max_connections)
        .with_acquire_timeout(Duration::from_secs(database.acquire_timeout_secs))
}
