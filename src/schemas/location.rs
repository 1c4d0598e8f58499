use ::location::{Location, LocationUpdate, NewLocation};
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LocationResponse {
	pub id:        i32,
	pub name:      String,
	pub latitude:  f64,
	pub longitude: f64,
}

impl From<Location> for LocationResponse {
	fn from(value: Location) -> Self {
		Self {
			id:        value.id,
			name:      value.name,
			latitude:  value.latitude,
			longitude: value.longitude,
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateLocationRequest {
	#[validate(length(
		min = 1,
		message = "name must not be empty",
		code = "name-length"
	))]
	pub name:      String,
	pub latitude:  f64,
	pub longitude: f64,
}

impl CreateLocationRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewLocation {
		NewLocation {
			name:      self.name,
			latitude:  self.latitude,
			longitude: self.longitude,
		}
	}
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateLocationRequest {
	#[validate(length(
		min = 1,
		message = "name must not be empty",
		code = "name-length"
	))]
	pub name:      Option<String>,
	pub latitude:  Option<f64>,
	pub longitude: Option<f64>,
}

impl UpdateLocationRequest {
	#[must_use]
	pub fn to_insertable(self) -> LocationUpdate {
		LocationUpdate {
			name:      self.name,
			latitude:  self.latitude,
			longitude: self.longitude,
		}
	}
}
