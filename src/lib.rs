//! # Spotmap backend library

#[macro_use]
extern crate serde_with;
#[macro_use]
extern crate tracing;

use axum::extract::FromRef;
use common::{DbPool, Error, InternalServerError};
use diesel_migrations::{
	EmbeddedMigrations,
	MigrationHarness,
	embed_migrations,
};

mod config;

pub mod controllers;
pub mod extract;
pub mod routes;
pub mod schemas;

pub use config::*;

/// Every migration under `migrations/`, compiled into the binary
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub config:        Config,
	pub database_pool: DbPool,
}

impl FromRef<AppState> for Config {
	fn from_ref(input: &AppState) -> Self { input.config.clone() }
}

impl FromRef<AppState> for DbPool {
	fn from_ref(input: &AppState) -> Self { input.database_pool.clone() }
}

/// Make sure every table exists by running all pending migrations
///
/// # Errors
/// Errors if no connection can be acquired or a migration fails
pub async fn run_migrations(pool: &DbPool) -> Result<(), Error> {
	let conn = pool.get().await?;

	let applied = conn
		.interact(|conn| {
			conn.run_pending_migrations(MIGRATIONS)
				.map(|versions| versions.len())
				.map_err(|e| e.to_string())
		})
		.await?
		.map_err(InternalServerError::MigrationError)?;

	info!("applied {applied} pending migration(s)");

	Ok(())
}
