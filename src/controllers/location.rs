//! Controllers for [`Location`]s
//!
//! Failures are written as plain text bodies.

use ::location::Location;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, NoContent};
use common::{DbPool, OrPlain, PlainError};
use validator::Validate;

use crate::schemas::location::{
	CreateLocationRequest,
	LocationResponse,
	UpdateLocationRequest,
};

const INVALID_ID: &str = "Invalid location ID";
const INVALID_PAYLOAD: &str = "Invalid request payload";
const NOT_FOUND: &str = "Location not found";

#[instrument(skip(pool))]
pub(crate) async fn get_locations(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, PlainError> {
	let conn = pool.get().await.or_plain("Failed to get locations")?;

	let locations =
		Location::get_all(&conn).await.or_plain("Failed to get locations")?;

	let response: Vec<LocationResponse> =
		locations.into_iter().map(LocationResponse::from).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub(crate) async fn create_location(
	State(pool): State<DbPool>,
	request: Result<Json<CreateLocationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Json(request) =
		request.map_err(|_| PlainError::bad_request(INVALID_PAYLOAD))?;

	request.validate().or_plain(INVALID_PAYLOAD)?;

	let conn = pool.get().await.or_plain("Failed to create location")?;

	let location = request
		.to_insertable()
		.insert(&conn)
		.await
		.or_plain("Failed to create location")?;

	Ok((StatusCode::OK, Json(LocationResponse::from(location))))
}

#[instrument(skip(pool))]
pub(crate) async fn get_location(
	State(pool): State<DbPool>,
	id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Path(id) = id.map_err(|_| PlainError::bad_request(INVALID_ID))?;

	let conn = pool.get().await.or_plain("Failed to get location")?;

	let location = Location::get_by_id(id, &conn)
		.await
		.or_plain_not_found(NOT_FOUND, "Failed to get location")?;

	Ok((StatusCode::OK, Json(LocationResponse::from(location))))
}

#[instrument(skip(pool))]
pub(crate) async fn update_location(
	State(pool): State<DbPool>,
	id: Result<Path<i32>, PathRejection>,
	request: Result<Json<UpdateLocationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Path(id) = id.map_err(|_| PlainError::bad_request(INVALID_ID))?;
	let Json(request) =
		request.map_err(|_| PlainError::bad_request(INVALID_PAYLOAD))?;

	request.validate().or_plain(INVALID_PAYLOAD)?;

	let conn = pool.get().await.or_plain("Failed to update location")?;

	let location = request
		.to_insertable()
		.apply_to(id, &conn)
		.await
		.or_plain_not_found(NOT_FOUND, "Failed to update location")?;

	Ok((StatusCode::OK, Json(LocationResponse::from(location))))
}

#[instrument(skip(pool))]
pub(crate) async fn delete_location(
	State(pool): State<DbPool>,
	id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, PlainError> {
	let Path(id) = id.map_err(|_| PlainError::bad_request(INVALID_ID))?;

	let conn = pool.get().await.or_plain("Failed to delete location")?;

	Location::delete_by_id(id, &conn)
		.await
		.or_plain("Failed to delete location")?;

	Ok(NoContent)
}
