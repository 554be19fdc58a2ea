use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted planet record.
///
/// `id` and `created_at` are assigned by the database at insert time; a
/// planet is never updated in place once persisted. `name` is unique across
/// the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: Uuid,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub created_at: DateTime<Utc>,
}
