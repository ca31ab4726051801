//! HTTP-level integration tests for enrollment, lesson progress, reviews and
//! course analytics.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use lms_core::lesson::LESSON_TEXT;
use lms_core::roles::{ROLE_ADMIN, ROLE_INSTRUCTOR, ROLE_STUDENT};
use lms_core::types::DbId;
use lms_db::models::course::{Course, CreateCourse};
use lms_db::models::lesson::CreateLesson;
use lms_db::models::module::CreateModule;
use lms_db::repositories::{CourseRepo, LessonRepo, ModuleRepo};
use serde_json::json;
use sqlx::PgPool;

/// Add one module holding `count` text lessons; returns the lesson ids.
async fn add_lessons(pool: &PgPool, course: &Course, count: usize) -> Vec<DbId> {
    let module = ModuleRepo::create(
        pool,
        course.id,
        &CreateModule {
            title: "Module".to_string(),
            description: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();

    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let lesson = LessonRepo::create(
            pool,
            module.id,
            &CreateLesson {
                title: format!("Lesson {i}"),
                lesson_type: LESSON_TEXT.to_string(),
                content: Some("body".to_string()),
                content_url: None,
                duration_minutes: None,
                sort_order: None,
            },
        )
        .await
        .unwrap();
        ids.push(lesson.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Enrollment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_once(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Open").await;
    let app = common::build_test_app(pool);
    let token = common::token_for(&student);
    let uri = format!("/api/v1/courses/{}/enroll", course.id);

    let response = post_json_auth(app.clone(), &uri, json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], student.id);
    assert!(json["completed_at"].is_null());

    let response = post_json_auth(app.clone(), &uri, json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let mine = body_json(get_auth(app, "/api/v1/enrollments", &token).await).await;
    assert_eq!(mine.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_course_rejects_students(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let draft = CourseRepo::create(
        &pool,
        instructor.id,
        &CreateCourse {
            title: "Draft".to_string(),
            description: None,
            category: None,
            level: None,
            thumbnail_url: None,
            is_published: None,
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/courses/{}/enroll", draft.id);

    let student_token = common::token_for(&student);
    let response = post_json_auth(app.clone(), &uri, json!({}), &student_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(app, &uri, json!({}), &common::token_for(&instructor)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unenroll_self_only(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let alice = common::create_user(&pool, "alice", ROLE_STUDENT).await;
    let bob = common::create_user(&pool, "bob", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Leaving").await;
    let enrollment = common::enroll(&pool, &alice, &course).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/enrollments/{}", enrollment.id);

    let response = delete_auth(app.clone(), &uri, &common::token_for(&bob)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &uri, &common::token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &uri, &common::token_for(&alice)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lesson progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_without_lessons_is_zero_percent(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Empty").await;
    let enrollment = common::enroll(&pool, &student, &course).await;
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        &format!("/api/v1/enrollments/{}/progress", enrollment.id),
        &common::token_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_lessons"], 0);
    assert_eq!(json["data"]["percentage"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lesson_progress_percentage(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Three").await;
    let lessons = add_lessons(&pool, &course, 3).await;
    let enrollment = common::enroll(&pool, &student, &course).await;
    let app = common::build_test_app(pool);
    let token = common::token_for(&student);

    let lesson_uri =
        |lesson: DbId| format!("/api/v1/enrollments/{}/lessons/{lesson}", enrollment.id);

    let response = put_json_auth(app.clone(), &lesson_uri(lessons[0]), json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["progress"]["is_completed"], true);
    assert_eq!(json["data"]["percentage"], 33);

    // Marking the same lesson again is idempotent.
    let response = put_json_auth(app.clone(), &lesson_uri(lessons[0]), json!({}), &token).await;
    assert_eq!(body_json(response).await["data"]["percentage"], 33);

    let response = put_json_auth(app.clone(), &lesson_uri(lessons[1]), json!({}), &token).await;
    assert_eq!(body_json(response).await["data"]["percentage"], 67);

    let response = put_json_auth(
        app.clone(),
        &lesson_uri(lessons[1]),
        json!({ "is_completed": false }),
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["percentage"], 33);

    // The instructor can read the learner's progress.
    let response = get_auth(
        app,
        &format!("/api/v1/enrollments/{}/progress", enrollment.id),
        &common::token_for(&instructor),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["completed_lessons"], 1);
    assert_eq!(json["data"]["total_lessons"], 3);
    assert_eq!(json["data"]["lessons"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lesson_from_other_course_is_rejected(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Mine").await;
    let other = common::create_course(&pool, &instructor, "Other").await;
    let foreign = add_lessons(&pool, &other, 1).await;
    let enrollment = common::enroll(&pool, &student, &course).await;
    let app = common::build_test_app(pool);
    let token = common::token_for(&student);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/enrollments/{}/lessons/{}", enrollment.id, foreign[0]),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        &format!("/api/v1/enrollments/{}/lessons/999999", enrollment.id),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_of_another_user_is_forbidden(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let alice = common::create_user(&pool, "alice", ROLE_STUDENT).await;
    let bob = common::create_user(&pool, "bob", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Private").await;
    let lessons = add_lessons(&pool, &course, 1).await;
    let enrollment = common::enroll(&pool, &alice, &course).await;
    let app = common::build_test_app(pool);
    let bob_token = common::token_for(&bob);

    let response = get_auth(
        app.clone(),
        &format!("/api/v1/enrollments/{}/progress", enrollment.id),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        app,
        &format!("/api/v1/enrollments/{}/lessons/{}", enrollment.id, lessons[0]),
        json!({}),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Reviews and analytics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reviews_require_enrollment_and_replace(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let alice = common::create_user(&pool, "alice", ROLE_STUDENT).await;
    let bob = common::create_user(&pool, "bob", ROLE_STUDENT).await;
    let admin = common::create_user(&pool, "root", ROLE_ADMIN).await;
    let course = common::create_course(&pool, &instructor, "Rated").await;
    common::enroll(&pool, &alice, &course).await;
    common::enroll(&pool, &bob, &course).await;
    let outsider = common::create_user(&pool, "eve", ROLE_STUDENT).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/courses/{}/reviews", course.id);

    let response = post_json_auth(
        app.clone(),
        &uri,
        json!({ "rating": 5 }),
        &common::token_for(&outsider),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let alice_token = common::token_for(&alice);
    for rating in [0, 6] {
        let response =
            post_json_auth(app.clone(), &uri, json!({ "rating": rating }), &alice_token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = post_json_auth(app.clone(), &uri, json!({ "rating": 2 }), &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = post_json_auth(
        app.clone(),
        &uri,
        json!({ "rating": 4, "comment": "Better on a second look" }),
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let bob_review = body_json(
        post_json_auth(app.clone(), &uri, json!({ "rating": 5 }), &common::token_for(&bob)).await,
    )
    .await;

    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["reviews"].as_array().unwrap().len(), 2);
    assert_eq!(json["average_rating"], 4.5);

    let review_uri = format!("/api/v1/reviews/{}", bob_review["id"]);
    let response = delete_auth(app.clone(), &review_uri, &alice_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = delete_auth(app.clone(), &review_uri, &common::token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["average_rating"], 4.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_analytics_for_owner_only(pool: PgPool) {
    let instructor = common::create_user(&pool, "prof", ROLE_INSTRUCTOR).await;
    let student = common::create_user(&pool, "stu", ROLE_STUDENT).await;
    let course = common::create_course(&pool, &instructor, "Measured").await;
    common::enroll(&pool, &student, &course).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/courses/{}/analytics", course.id);

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/courses/{}/reviews", course.id),
        json!({ "rating": 3 }),
        &common::token_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), &uri, &common::token_for(&student)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, &uri, &common::token_for(&instructor)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = &body_json(response).await["data"];
    assert_eq!(data["course_id"], course.id);
    assert_eq!(data["enrollment_count"], 1);
    assert_eq!(data["completed_enrollment_count"], 0);
    assert_eq!(data["completion_rate"], 0.0);
    assert_eq!(data["review_count"], 1);
    assert_eq!(data["average_rating"], 3.0);
    assert_eq!(data["attempt_count"], 0);
    assert!(data["average_attempt_score"].is_null());
}
