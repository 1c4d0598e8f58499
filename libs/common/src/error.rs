//! Library-wide error types and [`From`] impls

use std::collections::HashMap;
use std::sync::LazyLock;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Top level application error, can be converted into a [`Response`]
#[derive(Debug, Error)]
pub enum Error {
	/// Malformed request body, path or query string
	#[error("{0}")]
	BadRequest(String),
	/// Duplicate resource created
	#[error("{0}")]
	Duplicate(String),
	/// Store or connection failure, the message is passed through as is
	#[error("{0}")]
	InternalServerError(String),
	/// Resource not found
	#[error("not found - {0}")]
	NotFound(String),
	/// Resource could not be validated
	#[error("{0}")]
	ValidationError(String),
}

impl Error {
	/// Return a unique identifying code for this error
	///
	/// Codes are never reused once assigned
	fn code(&self) -> i32 {
		match self {
			Self::BadRequest(_) => 1,
			Self::NotFound(_) => 2,
			Self::ValidationError(_) => 3,
			Self::Duplicate(_) => 4,
			Self::InternalServerError(_) => 5,
		}
	}

	/// The HTTP status this error is reported with
	#[must_use]
	pub fn status(&self) -> StatusCode {
		match self {
			Self::BadRequest(_) | Self::ValidationError(_) => {
				StatusCode::BAD_REQUEST
			},
			Self::Duplicate(_) => StatusCode::CONFLICT,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
			Self::NotFound(_) => StatusCode::NOT_FOUND,
		}
	}
}

/// Convert an error into a JSON [`Response`]
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		debug!("{self:?}");

		let data = serde_json::json!({
			"error": self.to_string(),
			"code": self.code(),
		});

		(self.status(), axum::Json(data)).into_response()
	}
}

/// A list of possible internal errors
#[derive(Debug, Error)]
pub enum InternalServerError {
	/// Unknown database constraint violation
	#[error("constraint error -- {0}")]
	ConstraintError(String),
	/// Error executing some database operation
	#[error(transparent)]
	DatabaseError(diesel::result::Error),
	/// Error interacting with a database connection
	#[error("database interaction error -- {0}")]
	DatabaseInteractionError(deadpool_diesel::InteractError),
	/// Error running the embedded migrations
	#[error("migration error -- {0}")]
	MigrationError(String),
	/// Error acquiring database pool connection
	#[error("database pool error -- {0}")]
	PoolError(deadpool_diesel::PoolError),
}

// Map internal server errors to application errors
impl From<InternalServerError> for Error {
	fn from(value: InternalServerError) -> Self {
		error!("internal server error -- {value:?}");

		Self::InternalServerError(value.to_string())
	}
}

/// Map validation errors to application errors
impl From<validator::ValidationErrors> for Error {
	fn from(err: validator::ValidationErrors) -> Self {
		let errs = err.field_errors();
		let repr = errs
			.values()
			.map(|v| {
				v.iter()
					.map(ToString::to_string)
					.collect::<Vec<String>>()
					.join("\n")
			})
			.collect::<Vec<String>>()
			.join("\n");

		Self::ValidationError(repr)
	}
}

/// Map database interaction errors to application errors
impl From<deadpool_diesel::InteractError> for Error {
	fn from(value: deadpool_diesel::InteractError) -> Self {
		InternalServerError::DatabaseInteractionError(value).into()
	}
}

impl From<deadpool_diesel::PoolError> for Error {
	fn from(value: deadpool_diesel::PoolError) -> Self {
		InternalServerError::PoolError(value).into()
	}
}

/// Map of constraint names to column names.
static CONSTRAINT_TO_COLUMN: LazyLock<HashMap<&str, &str>> =
	LazyLock::new(|| HashMap::from([("users_email_key", "email")]));

/// Map database result errors to application errors.
impl From<diesel::result::Error> for Error {
	fn from(err: diesel::result::Error) -> Self {
		match &err {
			// No rows returned by query that expected at least one
			diesel::result::Error::NotFound => {
				Self::NotFound("no context provided".to_string())
			},
			// Unique constraint violation
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::UniqueViolation,
				info,
			) => {
				let Some(constraint_name) = info.constraint_name() else {
					return InternalServerError::DatabaseError(err).into();
				};

				match CONSTRAINT_TO_COLUMN.get(constraint_name) {
					Some(field) => {
						Self::Duplicate(format!("{field} is already in use"))
					},
					None => {
						InternalServerError::ConstraintError(
							constraint_name.to_string(),
						)
						.into()
					},
				}
			},
			// Missing required column or failed check
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::NotNullViolation
				| DatabaseErrorKind::CheckViolation,
				info,
			) => Self::ValidationError(info.message().to_string()),
			_ => InternalServerError::DatabaseError(err).into(),
		}
	}
}

impl From<JsonRejection> for Error {
	fn from(err: JsonRejection) -> Self {
		Self::BadRequest(format!("invalid JSON -- {}", err.body_text()))
	}
}

impl From<PathRejection> for Error {
	fn from(err: PathRejection) -> Self {
		Self::BadRequest(format!("invalid id -- {}", err.body_text()))
	}
}

impl From<QueryRejection> for Error {
	fn from(_: QueryRejection) -> Self {
		Self::BadRequest("invalid query parameters".to_string())
	}
}

/// A bare `text/plain` error, written by the location and user handlers
#[derive(Debug)]
pub struct PlainError {
	pub status:  StatusCode,
	pub message: &'static str,
}

impl PlainError {
	#[must_use]
	pub fn bad_request(message: &'static str) -> Self {
		Self { status: StatusCode::BAD_REQUEST, message }
	}
}

impl IntoResponse for PlainError {
	fn into_response(self) -> Response {
		(self.status, self.message).into_response()
	}
}

/// Replace the body of an error with a fixed plain text message
///
/// The status of the underlying [`Error`] is kept.
pub trait OrPlain<T> {
	/// Map the error of this result into a [`PlainError`]
	///
	/// # Errors
	/// Errors if `self` is an error
	fn or_plain(self, message: &'static str) -> Result<T, PlainError>;

	/// Like [`OrPlain::or_plain`], but answer with `not_found` when the
	/// underlying error is a 404
	///
	/// # Errors
	/// Errors if `self` is an error
	fn or_plain_not_found(
		self,
		not_found: &'static str,
		message: &'static str,
	) -> Result<T, PlainError>;
}

impl<T, E> OrPlain<T> for Result<T, E>
where
	E: Into<Error>,
{
	fn or_plain(self, message: &'static str) -> Result<T, PlainError> {
		self.map_err(|err| {
			let err: Error = err.into();

			debug!("{err:?}");

			PlainError { status: err.status(), message }
		})
	}

	fn or_plain_not_found(
		self,
		not_found: &'static str,
		message: &'static str,
	) -> Result<T, PlainError> {
		self.or_plain(message).map_err(|mut err| {
			if err.status == StatusCode::NOT_FOUND {
				err.message = not_found;
			}

			err
		})
	}
}
