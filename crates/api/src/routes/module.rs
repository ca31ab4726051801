//! Route definitions for the `/modules` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{lesson, module};
use crate::state::AppState;

/// Routes mounted at `/modules`.
///
/// ```text
/// GET    /{module_id}           -> get_by_id
/// PUT    /{module_id}           -> update
/// DELETE /{module_id}           -> delete
/// GET    /{module_id}/lessons   -> lesson::list_by_module
/// POST   /{module_id}/lessons   -> lesson::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{module_id}",
            get(module::get_by_id)
                .put(module::update)
                .delete(module::delete),
        )
        .route(
            "/{module_id}/lessons",
            get(lesson::list_by_module).post(lesson::create),
        )
}
