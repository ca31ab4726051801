//! HTTP-level integration tests for quiz grading and the completion cascade.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, CERT_BASE};
use lms_core::question::QUESTION_TRUE_FALSE;
use lms_core::roles::{ROLE_INSTRUCTOR, ROLE_STUDENT};
use lms_core::types::DbId;
use lms_db::models::course::Course;
use lms_db::models::module::CreateModule;
use lms_db::models::question::CreateQuestion;
use lms_db::models::quiz::{CreateQuiz, Quiz};
use lms_db::repositories::{EnrollmentRepo, ModuleRepo, QuestionRepo, QuizRepo};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Create a quiz of `count` true/false questions whose answer is always "true".
async fn true_false_quiz(
    pool: &PgPool,
    course: &Course,
    module_id: Option<DbId>,
    count: usize,
) -> (Quiz, Vec<DbId>) {
    let quiz = QuizRepo::create(
        pool,
        course.id,
        &CreateQuiz {
            title: format!("Quiz of {count}"),
            description: None,
            module_id,
        },
    )
    .await
    .unwrap();

    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let question = QuestionRepo::create(
            pool,
            quiz.id,
            &CreateQuestion {
                question_text: format!("Statement {i}"),
                question_type: QUESTION_TRUE_FALSE.to_string(),
                answer: Some("true".to_string()),
                sort_order: None,
                options: vec![],
            },
        )
        .await
        .unwrap();
        ids.push(question.question.id);
    }
    (quiz, ids)
}

/// Answer the first `correct` questions right and the rest wrong.
fn answers(question_ids: &[DbId], correct: usize) -> Value {
    let answers: Vec<Value> = question_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let answer = if i < correct { "true" } else { "false" };
            json!({ "question_id": id, "answer": answer })
        })
        .collect();
    json!({ "answers": answers })
}

async fn submit(
    app: axum::Router,
    quiz: &Quiz,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    let response = post_json_auth(
        app,
        &format!("/api/v1/quizzes/{}/attempts", quiz.id),
        body,
        token,
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_correct_scores_100_excellent(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Graded").await;
    common::enroll(&pool, &student, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 3).await;
    let app = common::build_test_app(pool);

    let (status, json) = submit(app, &quiz, answers(&ids, 3), &common::token_for(&student)).await;
    assert_eq!(status, StatusCode::CREATED);
    let data = &json["data"];
    assert_eq!(data["attempt"]["score"], 100);
    assert_eq!(data["attempt"]["passed"], true);
    assert_eq!(data["correct_count"], 3);
    assert_eq!(data["total_questions"], 3);
    assert_eq!(data["passed"], true);
    assert_eq!(data["band"], "excellent");
    assert_eq!(data["feedback"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_correct_fails(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Graded").await;
    common::enroll(&pool, &student, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 4).await;
    let app = common::build_test_app(pool);

    let (status, json) = submit(app, &quiz, answers(&ids, 0), &common::token_for(&student)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["attempt"]["score"], 0);
    assert_eq!(json["data"]["passed"], false);
    assert_eq!(json["data"]["band"], "fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_forty_percent_is_a_pass(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Boundary").await;
    common::enroll(&pool, &student, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 5).await;
    let app = common::build_test_app(pool);

    let (_, json) = submit(app, &quiz, answers(&ids, 2), &common::token_for(&student)).await;
    assert_eq!(json["data"]["attempt"]["score"], 40);
    assert_eq!(json["data"]["passed"], true);
    assert_eq!(json["data"]["band"], "pass");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_band_gap_renders_empty_label(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Gap").await;
    common::enroll(&pool, &student, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 20).await;
    let app = common::build_test_app(pool);

    let (_, json) = submit(app, &quiz, answers(&ids, 9), &common::token_for(&student)).await;
    assert_eq!(json["data"]["attempt"]["score"], 45);
    assert_eq!(json["data"]["passed"], true);
    assert_eq!(json["data"]["band"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unanswered_questions_count_as_wrong(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Partial").await;
    common::enroll(&pool, &student, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 4).await;
    let app = common::build_test_app(pool);

    let body = json!({ "answers": [{ "questionId": ids[0], "answer": "true" }] });
    let (_, json) = submit(app, &quiz, body, &common::token_for(&student)).await;
    assert_eq!(json["data"]["correct_count"], 1);
    assert_eq!(json["data"]["total_questions"], 4);
    assert_eq!(json["data"]["attempt"]["score"], 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answers_are_case_sensitive(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Exact").await;
    common::enroll(&pool, &student, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 1).await;
    let app = common::build_test_app(pool);

    let body = json!({ "answers": [{ "question_id": ids[0], "answer": "True" }] });
    let (_, json) = submit(app, &quiz, body, &common::token_for(&student)).await;
    assert_eq!(json["data"]["correct_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_enrolled_student_cannot_attempt(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Closed").await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 2).await;
    let app = common::build_test_app(pool);

    let (status, json) = submit(app, &quiz, answers(&ids, 2), &common::token_for(&student)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attempt_history_is_scoped(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let alice = common::create_user(&pool, "alice", ROLE_STUDENT).await;
    let bob = common::create_user(&pool, "bob", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "History").await;
    common::enroll(&pool, &alice, &course).await;
    common::enroll(&pool, &bob, &course).await;
    let (quiz, ids) = true_false_quiz(&pool, &course, None, 2).await;
    let app = common::build_test_app(pool);

    let alice_token = common::token_for(&alice);
    submit(app.clone(), &quiz, answers(&ids, 1), &alice_token).await;
    submit(app.clone(), &quiz, answers(&ids, 2), &alice_token).await;
    submit(app.clone(), &quiz, answers(&ids, 0), &common::token_for(&bob)).await;

    let uri = format!("/api/v1/quizzes/{}/attempts", quiz.id);
    let mine = body_json(get_auth(app.clone(), &uri, &alice_token).await).await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0]["score"], 100, "newest first");

    let all = body_json(get_auth(app, &uri, &common::token_for(&instructor)).await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Completion cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_passing_every_quiz_completes_course_and_issues_certificate(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Full").await;
    let enrollment = common::enroll(&pool, &student, &course).await;

    let mut module_ids = Vec::new();
    for title in ["One", "Two"] {
        let module = ModuleRepo::create(
            &pool,
            course.id,
            &CreateModule {
                title: title.to_string(),
                description: None,
                sort_order: None,
            },
        )
        .await
        .unwrap();
        module_ids.push(module.id);
    }
    let (first, first_ids) = true_false_quiz(&pool, &course, Some(module_ids[0]), 2).await;
    let (second, second_ids) = true_false_quiz(&pool, &course, Some(module_ids[1]), 2).await;
    let app = common::build_test_app(pool.clone());
    let token = common::token_for(&student);

    // Passing only the first quiz leaves every module incomplete.
    let (_, json) = submit(app.clone(), &first, answers(&first_ids, 2), &token).await;
    let completion = &json["data"]["completion"];
    assert_eq!(completion["course_complete"], false);
    assert!(completion["modules"]
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["is_completed"] == false));
    assert!(completion["certificate"].is_null());

    // A failed attempt on the second quiz changes nothing.
    let (_, json) = submit(app.clone(), &second, answers(&second_ids, 0), &token).await;
    assert_eq!(json["data"]["completion"]["course_complete"], false);

    let (_, json) = submit(app.clone(), &second, answers(&second_ids, 1), &token).await;
    let completion = &json["data"]["completion"];
    assert_eq!(completion["course_complete"], true);
    assert_eq!(completion["modules"].as_array().unwrap().len(), 2);
    assert!(completion["modules"]
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["is_completed"] == true));
    let expected_url = format!("{CERT_BASE}/{}/{}", course.id, student.id);
    assert_eq!(completion["certificate"]["certificate_url"], expected_url);

    let enrollment = EnrollmentRepo::find_by_id(&pool, enrollment.id)
        .await
        .unwrap()
        .unwrap();
    assert!(enrollment.completed_at.is_some());

    // The completion endpoint reflects the stored flags.
    let response = get_auth(
        app.clone(),
        &format!("/api/v1/courses/{}/completion", course.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["course_complete"], true);
    assert_eq!(json["data"]["modules"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["certificate"]["certificate_url"], expected_url);

    // Passing again does not issue a second certificate.
    submit(app.clone(), &first, answers(&first_ids, 2), &token).await;
    let certificates = body_json(get_auth(app, "/api/v1/certificates", &token).await).await;
    let certificates = certificates.as_array().unwrap();
    assert_eq!(certificates.len(), 1);
    assert_eq!(certificates[0]["course_id"], course.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completion_before_any_attempt_is_empty(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Fresh").await;
    common::enroll(&pool, &student, &course).await;
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        &format!("/api/v1/courses/{}/completion", course.id),
        &common::token_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["course_complete"], false);
    assert!(json["data"]["certificate"].is_null());
}
