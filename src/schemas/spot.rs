use ::spot::{NearbyQuery, NearbySpot, NewSpot, Spot, SpotUpdate};
use chrono::NaiveDateTime;
use common::Error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SpotResponse {
	pub id:          Uuid,
	pub name:        String,
	pub description: Option<String>,
	pub category:    String,
	#[serde(rename = "type")]
	pub type_:       String,
	pub latitude:    f64,
	pub longitude:   f64,
	pub address:     Option<String>,
	pub image_url:   Option<String>,
	pub created_at:  NaiveDateTime,
	pub updated_at:  NaiveDateTime,
}

impl From<Spot> for SpotResponse {
	fn from(value: Spot) -> Self {
		Self {
			id:          value.id,
			name:        value.name,
			description: value.description,
			category:    value.category,
			type_:       value.type_,
			latitude:    value.latitude,
			longitude:   value.longitude,
			address:     value.address,
			image_url:   value.image_url,
			created_at:  value.created_at,
			updated_at:  value.updated_at,
		}
	}
}

/// A [`SpotResponse`] with the distance in meters next to its fields
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NearbySpotResponse {
	#[serde(flatten)]
	pub spot:     SpotResponse,
	pub distance: f64,
}

impl From<NearbySpot> for NearbySpotResponse {
	fn from(value: NearbySpot) -> Self {
		Self { spot: value.spot.into(), distance: value.distance }
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateSpotRequest {
	#[validate(length(
		min = 1,
		message = "name must not be empty",
		code = "name-length"
	))]
	pub name:        String,
	pub description: Option<String>,
	#[validate(length(
		min = 1,
		max = 20,
		message = "category must be between 1 and 20 characters long",
		code = "category-length"
	))]
	pub category:    String,
	#[serde(rename = "type")]
	#[validate(length(
		min = 1,
		max = 50,
		message = "type must be between 1 and 50 characters long",
		code = "type-length"
	))]
	pub type_:       String,
	pub latitude:    f64,
	pub longitude:   f64,
	pub address:     Option<String>,
	pub image_url:   Option<String>,
}

impl CreateSpotRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewSpot {
		NewSpot {
			name:        self.name,
			description: self.description,
			category:    self.category,
			type_:       self.type_,
			latitude:    self.latitude,
			longitude:   self.longitude,
			address:     self.address,
			image_url:   self.image_url,
		}
	}
}

/// A partial spot, absent keys keep their stored value
///
/// For the nullable fields an explicit `null` clears the stored value.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateSpotRequest {
	#[validate(length(
		min = 1,
		message = "name must not be empty",
		code = "name-length"
	))]
	pub name:        Option<String>,
	#[serde(default, with = "::serde_with::rust::double_option")]
	pub description: Option<Option<String>>,
	#[validate(length(
		min = 1,
		max = 20,
		message = "category must be between 1 and 20 characters long",
		code = "category-length"
	))]
	pub category:    Option<String>,
	#[serde(rename = "type")]
	#[validate(length(
		min = 1,
		max = 50,
		message = "type must be between 1 and 50 characters long",
		code = "type-length"
	))]
	pub type_:       Option<String>,
	pub latitude:    Option<f64>,
	pub longitude:   Option<f64>,
	#[serde(default, with = "::serde_with::rust::double_option")]
	pub address:     Option<Option<String>>,
	#[serde(default, with = "::serde_with::rust::double_option")]
	pub image_url:   Option<Option<String>>,
}

impl UpdateSpotRequest {
	#[must_use]
	pub fn to_insertable(self) -> SpotUpdate {
		SpotUpdate {
			name:        self.name,
			description: self.description,
			category:    self.category,
			type_:       self.type_,
			latitude:    self.latitude,
			longitude:   self.longitude,
			address:     self.address,
			image_url:   self.image_url,
		}
	}
}

/// The raw `/spots/nearby` query string
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NearbySpotsRequest {
	pub lng:      Option<String>,
	pub lat:      Option<String>,
	pub distance: Option<String>,
}

impl NearbySpotsRequest {
	/// Parse all three parameters, failing as a whole if any one of them is
	/// missing or malformed
	///
	/// # Errors
	/// Errors if a coordinate is not a finite float or the distance is not an
	/// integer
	pub fn parse(self) -> Result<NearbyQuery, Error> {
		let lng = parse_coordinate(self.lng.as_deref());
		let lat = parse_coordinate(self.lat.as_deref());
		let distance = self.distance.as_deref().and_then(|d| d.parse().ok());

		let (Some(lng), Some(lat), Some(distance)) = (lng, lat, distance) else {
			return Err(Error::BadRequest("invalid query parameters".into()));
		};

		Ok(NearbyQuery { lng, lat, distance })
	}
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
	value?.parse::<f64>().ok().filter(|v| v.is_finite())
}
