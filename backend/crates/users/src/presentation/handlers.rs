//! HTTP Handlers

use crate::application::create_user::{CreateUserInput, CreateUserUseCase};
use crate::application::get_user::GetUserUseCase;
use crate::application::list_users::ListUsersUseCase;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::UserId;
use crate::error::{UsersError, UsersResult};
use crate::presentation::dto::{CreateUserRequest, UserResponse};
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;

/// Shared state for users handlers
pub struct UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /users
pub async fn list_users<R>(State(state): State<UsersAppState<R>>) -> UsersResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users: Vec<UserResponse> = use_case
        .execute()
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect();

    json_ok(&users)
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> UsersResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    // Only digit identifiers are addressable; anything else is not a route.
    let id = path
        .ok()
        .and_then(|Path(raw)| UserId::new(raw).ok())
        .filter(UserId::is_numeric)
        .ok_or(UsersError::RouteNotFound)?;

    let use_case = GetUserUseCase::new(state.repo.clone());

    let user = use_case.execute(&id).await?;

    json_ok(&UserResponse::from(user))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    body: Result<Bytes, BytesRejection>,
) -> UsersResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UsersError::PayloadTooLarge
        } else {
            UsersError::InvalidRequest(rejection.body_text())
        }
    })?;

    let req: CreateUserRequest = serde_json::from_slice(&body).map_err(UsersError::Decode)?;

    let use_case = CreateUserUseCase::new(state.repo.clone());

    let input = CreateUserInput {
        id: req.id,
        name: req.name,
    };

    let user = use_case.execute(input).await?;

    json_ok(&UserResponse::from(user))
}

/// Fallback for every unmatched method or path
pub async fn resource_not_found() -> UsersError {
    UsersError::RouteNotFound
}

/// Serialize `body` into a 200 response. Encoding happens before any part of
/// the response is built, so a failure still yields exactly one response.
fn json_ok<T: Serialize>(body: &T) -> UsersResult<Response> {
    let bytes = serde_json::to_vec(body).map_err(UsersError::Encode)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}
