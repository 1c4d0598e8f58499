use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::controllers::healthcheck;
use crate::controllers::location::{
	create_location,
	delete_location,
	get_location,
	get_locations,
	update_location,
};
use crate::controllers::spot::{
	create_spot,
	delete_spot,
	get_nearby_spots,
	get_spot,
	get_spots,
	update_spot,
};
use crate::controllers::user::{
	create_user,
	delete_user,
	get_user,
	get_users,
	update_user,
};

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let api_routes = Router::new()
		.route("/healthcheck", get(healthcheck))
		.nest("/spots", spot_routes())
		.nest("/locations", location_routes())
		.nest("/users", user_routes());

	Router::new()
		.merge(api_routes)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(TimeoutLayer::with_status_code(
					StatusCode::REQUEST_TIMEOUT,
					state.config.request_timeout,
				))
				.layer(CompressionLayer::new())
				.layer(state.config.cors_layer()),
		)
		.with_state(state)
}

/// Spot routes
fn spot_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_spots).post(create_spot))
		.route("/nearby", get(get_nearby_spots))
		.route("/{id}", get(get_spot).put(update_spot).delete(delete_spot))
}

/// Location routes
fn location_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_locations).post(create_location))
		.route(
			"/{id}",
			get(get_location).put(update_location).delete(delete_location),
		)
}

/// User routes
fn user_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_users).post(create_user))
		.route("/{id}", get(get_user).put(update_user).delete(delete_user))
}
