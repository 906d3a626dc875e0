//! Table bootstrap derived from the entity definitions.

use sea_orm::{ConnectionTrait, DbConn, DbErr, EntityTrait, ExecResult, Schema};

use crate::entity::prelude::*;

/// Create `users` and `comments` unless they already exist.
///
/// `users` goes first, `comments` carries the foreign key to it.
pub async fn create_tables(db: &DbConn) -> Result<(), DbErr> {
    create_table(db, User).await?;
    create_table(db, Comment).await?;
    tracing::debug!("tables users, comments are in place");
    Ok(())
}

async fn create_table<E>(db: &DbConn, entity: E) -> Result<ExecResult, DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend)
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned();

    db.execute(backend.build(&stmt)).await
}
