#[macro_use]
extern crate tracing;

use spotmap::routes::get_app_router;
use spotmap::{AppState, Config, run_migrations};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::signal::unix::SignalKind;

#[tokio::main]
async fn main() {
	// Set up the configuration.
	let config = Config::from_env();

	tracing_subscriber::fmt()
		.pretty()
		.with_thread_names(true)
		.with_max_level(config.log_level)
		.init();

	// Set up the database connection pool.
	let database_pool = config.create_database_pool();

	run_migrations(&database_pool)
		.await
		.expect("COULD NOT RUN DATABASE MIGRATIONS");

	let listener = TcpListener::bind(&config.bind_address)
		.await
		.expect("COULD NOT BIND TO ADDRESS");

	let state = AppState { config, database_pool };
	let app = get_app_router(state);

	info!("listening on {}", listener.local_addr().unwrap());

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_handler())
		.await
		.unwrap();
}

async fn shutdown_handler() {
	let ctrl_c = async {
		signal::ctrl_c().await.expect("COULD NOT INSTALL CTRL+C HANDLER");
	};

	let terminate = async {
		signal::unix::signal(SignalKind::terminate())
			.expect("COULD NOT INSTALL TERMINATE SIGNAL HANDLER")
			.recv()
			.await;
	};

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}
}
