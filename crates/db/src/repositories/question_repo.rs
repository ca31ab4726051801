//! Repository for `questions` and their `question_options`.

use std::collections::HashMap;

use lms_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::question::{
    CreateQuestion, CreateQuestionOption, Question, QuestionOption, QuestionWithOptions,
    UpdateQuestion,
};

const COLUMNS: &str =
    "id, quiz_id, question_text, question_type, answer, sort_order, created_at, updated_at";

const OPTION_COLUMNS: &str = "id, question_id, option_text, is_correct, sort_order";

/// Provides CRUD operations for questions. Options are always written
/// together with their question inside one transaction.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question and its options.
    pub async fn create(
        pool: &PgPool,
        quiz_id: DbId,
        input: &CreateQuestion,
    ) -> Result<QuestionWithOptions, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (quiz_id, question_text, question_type, answer, sort_order)
             VALUES ($1, $2, $3, $4,
                COALESCE($5, (SELECT COALESCE(MAX(sort_order) + 1, 0)
                              FROM questions WHERE quiz_id = $1)))
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(quiz_id)
            .bind(&input.question_text)
            .bind(&input.question_type)
            .bind(&input.answer)
            .bind(input.sort_order)
            .fetch_one(&mut *tx)
            .await?;

        let options = insert_options(&mut tx, question.id, &input.options).await?;
        tx.commit().await?;

        Ok(QuestionWithOptions { question, options })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a question with its options.
    pub async fn find_with_options(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionWithOptions>, sqlx::Error> {
        let Some(question) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let query = format!(
            "SELECT {OPTION_COLUMNS} FROM question_options
             WHERE question_id = $1 ORDER BY sort_order, id"
        );
        let options = sqlx::query_as::<_, QuestionOption>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(Some(QuestionWithOptions { question, options }))
    }

    /// Load every question of a quiz with its options, in display order.
    ///
    /// Two queries: one for questions, one for all their options.
    pub async fn list_with_options_by_quiz(
        pool: &PgPool,
        quiz_id: DbId,
    ) -> Result<Vec<QuestionWithOptions>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE quiz_id = $1 ORDER BY sort_order, id"
        );
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(quiz_id)
            .fetch_all(pool)
            .await?;

        let all_options = sqlx::query_as::<_, QuestionOption>(
            "SELECT o.id, o.question_id, o.option_text, o.is_correct, o.sort_order
             FROM question_options o
             JOIN questions q ON q.id = o.question_id
             WHERE q.quiz_id = $1
             ORDER BY o.sort_order, o.id",
        )
            .bind(quiz_id)
            .fetch_all(pool)
            .await?;

        let mut by_question: HashMap<DbId, Vec<QuestionOption>> = HashMap::new();
        for option in all_options {
            by_question.entry(option.question_id).or_default().push(option);
        }

        Ok(questions
            .into_iter()
            .map(|question| {
                let options = by_question.remove(&question.id).unwrap_or_default();
                QuestionWithOptions { question, options }
            })
            .collect())
    }

    /// Update a question; replaces its options when `input.options` is set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<QuestionWithOptions>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE questions SET
                question_text = COALESCE($2, question_text),
                question_type = COALESCE($3, question_type),
                answer = COALESCE($4, answer),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(question) = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.question_text)
            .bind(&input.question_type)
            .bind(&input.answer)
            .bind(input.sort_order)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let options = match &input.options {
            Some(new_options) => {
                sqlx::query("DELETE FROM question_options WHERE question_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                insert_options(&mut tx, id, new_options).await?
            }
            None => {
                let option_query = format!(
                    "SELECT {OPTION_COLUMNS} FROM question_options
                     WHERE question_id = $1 ORDER BY sort_order, id"
                );
                sqlx::query_as::<_, QuestionOption>(&option_query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(QuestionWithOptions { question, options }))
    }

    /// Delete a question and its options. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Insert options in the order given; `sort_order` is the list position.
async fn insert_options(
    conn: &mut PgConnection,
    question_id: DbId,
    options: &[CreateQuestionOption],
) -> Result<Vec<QuestionOption>, sqlx::Error> {
    let query = format!(
        "INSERT INTO question_options (question_id, option_text, is_correct, sort_order)
         VALUES ($1, $2, $3, $4)
         RETURNING {OPTION_COLUMNS}"
    );
    let mut inserted = Vec::with_capacity(options.len());
    for (index, option) in options.iter().enumerate() {
        let row = sqlx::query_as::<_, QuestionOption>(&query)
            .bind(question_id)
            .bind(&option.option_text)
            .bind(option.is_correct)
            .bind(index as i32)
            .fetch_one(&mut *conn)
            .await?;
        inserted.push(row);
    }
    Ok(inserted)
}
