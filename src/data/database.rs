use diesel::sqlite::SqliteConnection;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig, deadpool};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

/// SQLite runs behind diesel-async's sync wrapper so the rest of the
/// crate can stay on the async diesel API.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

pub struct Database {
    pool: Pool<DbConnection>,
}

impl Database {
    pub async fn new() -> Self {
        Database {
            pool: DB_POOL.clone(),
        }
    }

    pub async fn get_connection(&self) -> Result<Object<DbConnection>, deadpool::PoolError> {
        self.pool.get().await
    }

    /// Applies `migrations/schema.sql`. Every statement in the script is
    /// idempotent, so this runs unconditionally at startup.
    pub async fn run_migrations(&self) -> Result<(), diesel::result::Error> {
        let mut conn = self.get_connection().await.map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.batch_execute(include_str!("../../migrations/schema.sql"))
            .await?;

        tracing::info!("database schema applied");

        Ok(())
    }
}

/// Lazily initialized global database connection pool
static DB_POOL: Lazy<Pool<DbConnection>> = Lazy::new(|| {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "joya.db".to_string());

    let mut manager_config = ManagerConfig::default();
    manager_config.custom_setup = Box::new(|url: &str| {
        let url = url.to_string();
        Box::pin(async move {
            let mut conn = DbConnection::establish(&url).await?;
            conn.batch_execute(
                "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL;",
            )
            .await
            .map_err(diesel::ConnectionError::CouldntSetupConfiguration)?;
            Ok(conn)
        })
    });

    let manager =
        AsyncDieselConnectionManager::<DbConnection>::new_with_config(database_url, manager_config);
    let pool = Pool::builder(manager)
        .build()
        .expect("Failed to create database connection pool");

    tracing::info!("DB connection pool created");

    pool
});
