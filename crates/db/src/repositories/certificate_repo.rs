//! Repository for the `certificates` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::certificate::Certificate;

const COLUMNS: &str = "id, user_id, course_id, certificate_url, issued_at, created_at, updated_at";

/// Provides certificate issuance and lookup.
pub struct CertificateRepo;

impl CertificateRepo {
    /// Issue a certificate unless one already exists for (user, course).
    ///
    /// Returns the new row, or `None` if a certificate was already issued.
    pub async fn issue_if_absent(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
        certificate_url: &str,
    ) -> Result<Option<Certificate>, sqlx::Error> {
        let query = format!(
            "INSERT INTO certificates (user_id, course_id, certificate_url)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, course_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(user_id)
            .bind(course_id)
            .bind(certificate_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Certificate>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM certificates WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Certificate>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// A user's certificates, most recently issued first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Certificate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM certificates WHERE user_id = $1 ORDER BY issued_at DESC, id DESC"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
