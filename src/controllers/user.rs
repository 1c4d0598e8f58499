//! Controllers for [`User`]s
//!
//! Failures are written as plain text bodies.

use ::user::User;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, NoContent};
use common::{DbPool, OrPlain, PlainError};
use validator::Validate;

use crate::schemas::user::{
	CreateUserRequest,
	UserResponse,
	UpdateUserRequest,
};

const INVALID_ID: &str = "Invalid user ID";
const INVALID_PAYLOAD: &str = "Invalid request payload";
const NOT_FOUND: &str = "User not found";

#[instrument(skip(pool))]
pub(crate) async fn get_users(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, PlainError> {
	let conn = pool.get().await.or_plain("Failed to get users")?;

	let users =
		User::get_all(&conn).await.or_plain("Failed to get users")?;

	let response: Vec<UserResponse> =
		users.into_iter().map(UserResponse::from).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub(crate) async fn create_user(
	State(pool): State<DbPool>,
	request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Json(request) =
		request.map_err(|_| PlainError::bad_request(INVALID_PAYLOAD))?;

	request.validate().or_plain(INVALID_PAYLOAD)?;

	let conn = pool.get().await.or_plain("Failed to create user")?;

	let user = request
		.to_insertable()
		.insert(&conn)
		.await
		.or_plain("Failed to create user")?;

	Ok((StatusCode::OK, Json(UserResponse::from(user))))
}

#[instrument(skip(pool))]
pub(crate) async fn get_user(
	State(pool): State<DbPool>,
	id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Path(id) = id.map_err(|_| PlainError::bad_request(INVALID_ID))?;

	let conn = pool.get().await.or_plain("Failed to get user")?;

	let user = User::get_by_id(id, &conn)
		.await
		.or_plain_not_found(NOT_FOUND, "Failed to get user")?;

	Ok((StatusCode::OK, Json(UserResponse::from(user))))
}

#[instrument(skip(pool))]
pub(crate) async fn update_user(
	State(pool): State<DbPool>,
	id: Result<Path<i32>, PathRejection>,
	request: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Path(id) = id.map_err(|_| PlainError::bad_request(INVALID_ID))?;
	let Json(request) =
		request.map_err(|_| PlainError::bad_request(INVALID_PAYLOAD))?;

	request.validate().or_plain(INVALID_PAYLOAD)?;

	let conn = pool.get().await.or_plain("Failed to update user")?;

	let user = request
		.to_insertable()
		.apply_to(id, &conn)
		.await
		.or_plain_not_found(NOT_FOUND, "Failed to update user")?;

	Ok((StatusCode::OK, Json(UserResponse::from(user))))
}

#[instrument(skip(pool))]
pub(crate) async fn delete_user(
	State(pool): State<DbPool>,
	id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Path(id) = id.map_err(|_| PlainError::bad_request(INVALID_ID))?;

	let conn = pool.get().await.or_plain("Failed to delete user")?;

	User::delete_by_id(id, &conn)
		.await
		.or_plain("Failed to delete user")?;

	Ok(NoContent)
}
