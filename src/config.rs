use std::time::Duration;

use axum::http::{HeaderValue, Method};
use common::DbPool;
use deadpool_diesel::postgres::{Manager, Pool};
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
	pub database_url:       String,
	pub database_pool_size: usize,

	pub bind_address:    String,
	pub cors_origin:     String,
	pub request_timeout: Duration,
	pub log_level:       Level,
}

impl Config {
	fn get_env_var(var: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"))
	}

	fn get_env_var_or(var: &str, default: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| default.to_string())
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if `DATABASE_URL` is missing or a numeric variable does not
	/// parse
	#[must_use]
	pub fn from_env() -> Self {
		let database_url = Self::get_env_var("DATABASE_URL");
		let database_pool_size = Self::get_env_var_or("DATABASE_POOL_SIZE", "16")
			.parse::<usize>()
			.unwrap_or_else(|_| panic!("DATABASE_POOL_SIZE must be a number"));

		let bind_address = Self::get_env_var_or("BIND_ADDRESS", "0.0.0.0:8080");
		let cors_origin =
			Self::get_env_var_or("CORS_ORIGIN", "http://localhost:3000");

		let request_timeout = Duration::from_secs(
			Self::get_env_var_or("REQUEST_TIMEOUT_SECONDS", "10")
				.parse::<u64>()
				.unwrap_or_else(|_| {
					panic!("REQUEST_TIMEOUT_SECONDS must be a number")
				}),
		);

		let log_level = Self::get_env_var_or("LOG_LEVEL", "info")
			.parse::<Level>()
			.unwrap_or(Level::INFO);

		Self {
			database_url,
			database_pool_size,
			bind_address,
			cors_origin,
			request_timeout,
			log_level,
		}
	}

	/// Create a database pool for the given config
	///
	/// # Panics
	/// Panics if creating the pool fails
	#[must_use]
	pub fn create_database_pool(&self) -> DbPool {
		let manager = Manager::new(
			self.database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		Pool::builder(manager)
			.max_size(self.database_pool_size)
			.build()
			.unwrap()
	}

	/// Create the CORS layer allowing the configured frontend origin
	///
	/// # Panics
	/// Panics if `CORS_ORIGIN` is not a valid header value
	#[must_use]
	pub fn cors_layer(&self) -> CorsLayer {
		let origin = HeaderValue::from_str(&self.cors_origin)
			.unwrap_or_else(|_| panic!("CORS_ORIGIN must be a valid origin"));

		CorsLayer::new()
			.allow_origin(origin)
			.allow_credentials(true)
			.allow_methods([
				Method::GET,
				Method::POST,
				Method::PUT,
				Method::DELETE,
				Method::OPTIONS,
			])
			.allow_headers(AllowHeaders::mirror_request())
	}
}
