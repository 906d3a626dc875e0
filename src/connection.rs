use log::LevelFilter;
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};
use sqlx::{
    ConnectOptions as _,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::config::Config;
use crate::error::Result;

/// Open the one connection the process works through.
///
/// Every generated statement is logged at `info` when `sql_log` is set.
/// There is no retry: a failure here is meant to end the process.
pub async fn establish_connection(config: &Config) -> Result<DatabaseConnection> {
    let opt = sqlite_options(config)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect_with(opt)
        .await
        .map_err(|e| {
            DbErr::Conn(RuntimeErr::Internal(format!(
                "cannot open '{}': {e}",
                config.database
            )))
        })?;

    tracing::info!(database = %config.database, "connection established");

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// The file path is handed over as a path, never spliced into a URL, so
/// `%`, `?` and `#` in it are plain characters. The file is created when
/// missing, its parent directory is not.
fn sqlite_options(config: &Config) -> Result<SqliteConnectOptions> {
    let opt = if config.is_memory() {
        "sqlite::memory:"
            .parse::<SqliteConnectOptions>()
            .map_err(|e| DbErr::Conn(RuntimeErr::Internal(e.to_string())))?
    } else {
        SqliteConnectOptions::new()
            .filename(&config.database)
            .create_if_missing(true)
    };

    Ok(if config.sql_log {
        opt.log_statements(LevelFilter::Info)
    } else {
        opt.disable_statement_logging()
    })
}
