#![deny(missing_debug_implementations)]

//! # myapp
//!
//! Data-access binding for a SQLite database holding users and their
//! comments. Persistence is entirely SeaORM's; this crate provides the
//! configuration around it:
//!
//! 1. a process-wide default time zone (`Tokyo`), with timestamp columns
//!    written and read as local civil time,
//! 2. a single connection to `./myapp.db`, logging every statement,
//! 3. the `User` / `Comment` entities, bound to `users` / `comments`, where a
//!    user has many comments and a comment belongs to one user.
//!
//! ```no_run
//! # async fn run() -> myapp::Result<()> {
//! use myapp::{Config, Mutation, Query};
//!
//! let db = myapp::bootstrap(&Config::default()).await?;
//! let alice = Mutation::create_user(&db, "Alice").await?;
//! Mutation::create_comment(&db, alice.id, "Hello").await?;
//! assert_eq!(Query::comments_of(&db, &alice).await?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod entity;
pub mod error;
pub mod logging;
pub mod schema;
pub mod service;
pub mod timezone;

pub use config::{Config, TimestampMode};
pub use connection::establish_connection;
pub use error::{Error, Result};
pub use service::{Mutation, Query};

pub use sea_orm;

use sea_orm::DatabaseConnection;

/// Run the startup sequence: time zone, connection, tables.
pub async fn bootstrap(config: &Config) -> Result<DatabaseConnection> {
    timezone::configure(&config.time_zone, config.default_timezone)?;
    let db = establish_connection(config).await?;
    schema::create_tables(&db).await?;
    Ok(db)
}
