//! Database access layer
//!
//! One module per collection; every function takes the shared
//! `Database` handle. Uniqueness is enforced by the indexes created at
//! startup, so concurrent check-then-insert sequences cannot both
//! land.

pub mod appointments;
pub mod barbers;
pub mod services;

use mongodb::Database;
use mongodb::error::{ErrorKind, WriteFailure};

/// Create the unique indexes backing the duplicate checks
pub async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    barbers::ensure_indexes(db).await?;
    services::ensure_indexes(db).await?;
    appointments::ensure_indexes(db).await
}

/// Whether an insert failed against a unique index (E11000)
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}
