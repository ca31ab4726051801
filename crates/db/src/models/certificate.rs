//! Certificate model.

use lms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `certificates` table. One per (user, course).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certificate {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub certificate_url: String,
    pub issued_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
