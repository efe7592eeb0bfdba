//! Route definitions for the content collection, registered under `/content`.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes.
///
/// ```text
/// GET    /       list_contents
/// POST   /       create_content
/// GET    /{id}   get_content
/// PUT    /{id}   update_content
/// DELETE /{id}   delete_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(content::list_contents).post(content::create_content),
        )
        .route(
            "/{id}",
            get(content::get_content)
                .put(content::update_content)
                .delete(content::delete_content),
        )
}
