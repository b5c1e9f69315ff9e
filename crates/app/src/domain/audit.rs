//! Audit Fields

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Row, postgres::PgRow};
use uuid::Uuid;

/// Identity and audit metadata shared by every entity.
///
/// Embedded by value in each record. `created_at` and `updated_at` are set by
/// the database on insert and on every update respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditFields<Id> {
    pub uuid: Id,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<Id> AuditFields<Id>
where
    Id: From<Uuid>,
{
    /// Read the `uuid`, `created_at` and `updated_at` columns of a row.
    pub(crate) fn try_from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: Id::from(row.try_get::<Uuid, _>("uuid")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
