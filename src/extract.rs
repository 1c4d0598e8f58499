//! Extractors that reject with the application [`Error`] envelope

use axum::extract::{FromRequest, FromRequestParts};
use common::Error;

/// A JSON request body, malformed bodies become [`Error::BadRequest`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// A path parameter, unparseable values become [`Error::BadRequest`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
