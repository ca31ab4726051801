//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (validated with `validator`)
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod analytics;
pub mod certificate;
pub mod completion;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod module;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod review;
pub mod user;
