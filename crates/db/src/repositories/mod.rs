//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod certificate_repo;
pub mod completion_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod lesson_repo;
pub mod module_repo;
pub mod progress_repo;
pub mod question_repo;
pub mod quiz_attempt_repo;
pub mod quiz_repo;
pub mod review_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use certificate_repo::CertificateRepo;
pub use completion_repo::CompletionRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_repo::LessonRepo;
pub use module_repo::ModuleRepo;
pub use progress_repo::ProgressRepo;
pub use question_repo::QuestionRepo;
pub use quiz_attempt_repo::QuizAttemptRepo;
pub use quiz_repo::QuizRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
