//! Controllers for [`Spot`]s

use ::spot::Spot;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, NoContent};
use common::{DbPool, Error};
use uuid::Uuid;
use validator::Validate;

use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::schemas::spot::{
	CreateSpotRequest,
	NearbySpotResponse,
	NearbySpotsRequest,
	SpotResponse,
	UpdateSpotRequest,
};

/// Get all spots from the database.
#[instrument(skip(pool))]
pub(crate) async fn get_spots(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let spots = Spot::get_all(&conn).await?;

	let response: Vec<SpotResponse> =
		spots.into_iter().map(SpotResponse::from).collect();

	Ok((StatusCode::OK, Json(response)))
}

/// Create a new spot in the database.
#[instrument(skip(pool))]
pub(crate) async fn create_spot(
	State(pool): State<DbPool>,
	JsonBody(request): JsonBody<CreateSpotRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let spot = request.to_insertable().insert(&conn).await?;

	Ok((StatusCode::CREATED, Json(SpotResponse::from(spot))))
}

/// Get a spot from the database.
#[instrument(skip(pool))]
pub(crate) async fn get_spot(
	State(pool): State<DbPool>,
	PathParam(id): PathParam<Uuid>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let spot = Spot::get_by_id(id, &conn).await?;

	Ok((StatusCode::OK, Json(SpotResponse::from(spot))))
}

/// Update the fields of a spot that are present in the request.
#[instrument(skip(pool))]
pub(crate) async fn update_spot(
	State(pool): State<DbPool>,
	PathParam(id): PathParam<Uuid>,
	JsonBody(request): JsonBody<UpdateSpotRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let spot = request.to_insertable().apply_to(id, &conn).await?;

	Ok((StatusCode::OK, Json(SpotResponse::from(spot))))
}

/// Delete a spot from the database.
#[instrument(skip(pool))]
pub(crate) async fn delete_spot(
	State(pool): State<DbPool>,
	PathParam(id): PathParam<Uuid>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	Spot::delete_by_id(id, &conn).await?;

	Ok(NoContent)
}

/// Get all spots within `distance` meters of (`lng`, `lat`), nearest first.
///
/// The query string is validated before a connection is acquired.
#[instrument(skip(pool))]
pub(crate) async fn get_nearby_spots(
	State(pool): State<DbPool>,
	QueryParams(request): QueryParams<NearbySpotsRequest>,
) -> Result<impl IntoResponse, Error> {
	let query = request.parse()?;

	let conn = pool.get().await?;

	let spots = Spot::find_nearby(query, &conn).await?;

	let response: Vec<NearbySpotResponse> =
		spots.into_iter().map(NearbySpotResponse::from).collect();

	Ok((StatusCode::OK, Json(response)))
}
