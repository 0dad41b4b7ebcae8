//! Users Router

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, UsersAppState};
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::sync::Arc;

/// Create the users router over a shared repository
///
/// `/users` and `/users/` are the same collection. A known path with an
/// unsupported method answers 404 like an unknown path, never 405. HEAD is
/// routed explicitly since `get` would otherwise answer it.
pub fn users_router<R>(repo: Arc<R>, config: &UsersConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = UsersAppState { repo };

    let collection = get(handlers::list_users::<R>)
        .post(handlers::create_user::<R>)
        .head(handlers::resource_not_found)
        .fallback(handlers::resource_not_found);

    Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route(
            "/users/{id}",
            get(handlers::get_user::<R>)
                .head(handlers::resource_not_found)
                .fallback(handlers::resource_not_found),
        )
        .fallback(handlers::resource_not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}
