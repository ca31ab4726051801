//! Completion cascade run after every quiz attempt.
//!
//! Loads the course's quizzes, the user's passed quizzes and the course's
//! modules, evaluates [`evaluate_cascade`], and upserts the resulting flags.
//! When the course flag is true the enrollment is stamped complete and a
//! certificate is issued once per (user, course).
//!
//! Each step is its own statement; a failure part-way leaves the flags
//! written so far in place and the next attempt recomputes everything.

use std::collections::HashSet;

use lms_core::progress::{evaluate_cascade, ModuleCompletion};
use lms_core::types::DbId;
use lms_db::models::certificate::Certificate;
use lms_db::repositories::{
    CertificateRepo, CompletionRepo, EnrollmentRepo, ModuleRepo, QuizAttemptRepo, QuizRepo,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::config::ServerConfig;

/// Flags written by one cascade run.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionUpdate {
    pub modules: Vec<ModuleCompletion>,
    pub course_complete: bool,
    /// Set only on the run that first issues the certificate.
    pub certificate: Option<Certificate>,
}

/// Recompute and persist completion for `user_id` in `course_id`.
pub async fn recompute_completion(
    pool: &PgPool,
    config: &ServerConfig,
    user_id: DbId,
    course_id: DbId,
) -> Result<CompletionUpdate, sqlx::Error> {
    let quiz_ids = QuizRepo::list_ids_by_course(pool, course_id).await?;
    let passed: HashSet<DbId> = QuizAttemptRepo::passed_quiz_ids(pool, user_id, course_id)
        .await?
        .into_iter()
        .collect();
    let module_ids = ModuleRepo::list_ids_by_course(pool, course_id).await?;

    let outcome = evaluate_cascade(&quiz_ids, &passed, &module_ids);

    for module in &outcome.modules {
        CompletionRepo::upsert_module(pool, user_id, module.module_id, module.is_completed)
            .await?;
    }
    CompletionRepo::upsert_course(pool, user_id, course_id, outcome.course_complete).await?;

    tracing::debug!(
        user_id,
        course_id,
        quizzes = quiz_ids.len(),
        passed = passed.len(),
        modules = module_ids.len(),
        course_complete = outcome.course_complete,
        "Completion recomputed",
    );

    let mut certificate = None;
    if outcome.course_complete && EnrollmentRepo::exists(pool, user_id, course_id).await? {
        EnrollmentRepo::mark_completed(pool, user_id, course_id).await?;
        let url = config.certificate_url(course_id, user_id);
        certificate = CertificateRepo::issue_if_absent(pool, user_id, course_id, &url).await?;
        if let Some(cert) = &certificate {
            tracing::info!(
                user_id,
                course_id,
                certificate_id = cert.id,
                "Course completed, certificate issued",
            );
        }
    }

    Ok(CompletionUpdate {
        modules: outcome.modules,
        course_complete: outcome.course_complete,
        certificate,
    })
}
