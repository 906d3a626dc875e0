pub mod comment;
pub mod prelude;
pub mod user;

use sea_orm::{DbErr, prelude::DateTime};

/// Timestamp for `created_at` / `updated_at`, under the configured zone
pub(crate) fn timestamp_now() -> Result<DateTime, DbErr> {
    crate::timezone::now().map_err(|e| DbErr::Custom(e.to_string()))
}
