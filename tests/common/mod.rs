use axum_test::TestServer;
use spotmap::{AppState, Config, routes};

mod mock_db;

use mock_db::{DATABASE_PROVIDER, DatabaseGuard};

/// Mean earth radius in meters
const EARTH_RADIUS: f64 = 6_371_008.8;

#[allow(dead_code)]
pub struct TestEnv {
	pub app:      TestServer,
	pub db_guard: DatabaseGuard,
}

impl TestEnv {
	/// Get a test environment backed by a fresh, migrated database
	///
	/// # Panics
	/// Panics if building a test server fails
	pub async fn new() -> Self {
		let config = Config::from_env();

		let test_pool_guard = (*DATABASE_PROVIDER).acquire().await;
		let test_pool = test_pool_guard.create_pool();

		let state = AppState { config, database_pool: test_pool };
		let app = routes::get_app_router(state);

		let test_server = TestServer::builder().build(app).unwrap();

		TestEnv { app: test_server, db_guard: test_pool_guard }
	}
}

/// Great circle distance in meters between two (lng, lat) points
#[allow(dead_code)]
#[must_use]
pub fn haversine(from: (f64, f64), to: (f64, f64)) -> f64 {
	let (lng1, lat1) = (from.0.to_radians(), from.1.to_radians());
	let (lng2, lat2) = (to.0.to_radians(), to.1.to_radians());

	let a = ((lat2 - lat1) / 2.0).sin().powi(2)
		+ lat1.cos() * lat2.cos() * ((lng2 - lng1) / 2.0).sin().powi(2);

	2.0 * EARTH_RADIUS * a.sqrt().asin()
}
