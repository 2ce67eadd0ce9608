//! SQLite Customer Store
//!
//! Production adapter over an sqlx connection pool. Ids come from an
//! `AUTOINCREMENT` primary key, so they are monotonic and never reused,
//! matching the in-memory store.

use std::str::FromStr;
use std::time::Duration;

use clientele_domain::{
    Customer, CustomerData, CustomerId, CustomerStore, CustomerWhereUnique, StoreError,
};
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

/// Connection settings for the SQLite store
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://clientele.db".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// An in-memory database lives and dies with its single connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// SQLite-backed Customer Store
#[derive(Debug, Clone)]
pub struct SqliteCustomerStore {
    pool: SqlitePool,
}

impl SqliteCustomerStore {
    /// Wrap an existing pool. The table must already exist; see [`Self::migrate`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `config` and make sure the customers table exists.
    pub async fn connect(config: &SqliteConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout);

        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        info!(url = %config.url, "Connected to SQLite customer store");

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl CustomerStore for SqliteCustomerStore {
    async fn find_many(&self) -> Result<Vec<Customer>, StoreError> {
        debug!("Listing customers");

        let rows = sqlx::query_as::<_, CustomerRow>("SELECT id, name FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_unique(
        &self,
        selector: &CustomerWhereUnique,
    ) -> Result<Option<Customer>, StoreError> {
        debug!("Finding customer by id: {}", selector.id);

        let row = sqlx::query_as::<_, CustomerRow>("SELECT id, name FROM customers WHERE id = ?")
            .bind(selector.id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Customer::from))
    }

    async fn create(&self, data: CustomerData) -> Result<Customer, StoreError> {
        debug!("Creating customer");

        let row = sqlx::query_as::<_, CustomerRow>(
            "INSERT INTO customers (name) VALUES (?) RETURNING id, name",
        )
        .bind(data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        selector: &CustomerWhereUnique,
        data: CustomerData,
    ) -> Result<Customer, StoreError> {
        debug!("Updating customer: {}", selector.id);

        let row = sqlx::query_as::<_, CustomerRow>(
            "UPDATE customers SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(data.name)
        .bind(selector.id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Customer::from)
            .ok_or(StoreError::NotFound { id: selector.id })
    }

    async fn delete(&self, selector: &CustomerWhereUnique) -> Result<Customer, StoreError> {
        debug!("Deleting customer: {}", selector.id);

        let row = sqlx::query_as::<_, CustomerRow>(
            "DELETE FROM customers WHERE id = ? RETURNING id, name",
        )
        .bind(selector.id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Customer::from)
            .ok_or(StoreError::NotFound { id: selector.id })
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(CustomerId::new(row.id), row.name)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => StoreError::Constraint {
                message: db.message().to_string(),
            },
            _ => StoreError::Persistence {
                message: err.to_string(),
            },
        },
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Connection {
            message: err.to_string(),
        },
        _ => StoreError::Persistence {
            message: err.to_string(),
        },
    }
}
