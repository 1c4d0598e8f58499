#[macro_use]
extern crate tracing;

use chrono::NaiveDateTime;
use common::{DbConn, Error};
use db::spot;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod nearby;

pub use nearby::*;

/// A facility or tourism point of interest
#[derive(
	Clone,
	Debug,
	Deserialize,
	Identifiable,
	PartialEq,
	Queryable,
	Selectable,
	Serialize,
)]
#[diesel(table_name = spot)]
#[diesel(check_for_backend(Pg))]
pub struct Spot {
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

impl Spot {
	/// Get all [`Spot`]s
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let spots = conn
			.interact(|conn| spot::table.select(Self::as_select()).load(conn))
			.await??;

		Ok(spots)
	}

	/// Get a single [`Spot`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(
		spot_id: Uuid,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let spot = conn
			.interact(move |conn| {
				spot::table
					.find(spot_id)
					.select(Self::as_select())
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| Error::NotFound(format!("spot with id {spot_id}")))?;

		Ok(spot)
	}

	/// Delete a [`Spot`] given its id
	///
	/// Deleting an id that does not exist is not an error.
	#[instrument(skip(conn))]
	pub async fn delete_by_id(
		spot_id: Uuid,
		conn: &DbConn,
	) -> Result<(), Error> {
		let count = conn
			.interact(move |conn| {
				diesel::delete(spot::table.find(spot_id)).execute(conn)
			})
			.await??;

		info!("deleted {count} spot(s) with id {spot_id}");

		Ok(())
	}

	/// Overwrite every field that is present in the given [`SpotUpdate`]
	#[must_use]
	pub fn merge(mut self, update: SpotUpdate) -> Self {
		if let Some(name) = update.name {
			self.name = name;
		}

		if let Some(description) = update.description {
			self.description = description;
		}

		if let Some(category) = update.category {
			self.category = category;
		}

		if let Some(type_) = update.type_ {
			self.type_ = type_;
		}

		if let Some(latitude) = update.latitude {
			self.latitude = latitude;
		}

		if let Some(longitude) = update.longitude {
			self.longitude = longitude;
		}

		if let Some(address) = update.address {
			self.address = address;
		}

		if let Some(image_url) = update.image_url {
			self.image_url = image_url;
		}

		self
	}
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = spot)]
pub struct NewSpot {
	pub name:        String,
	pub description: Option<String>,
	pub category:    String,
	pub type_:       String,
	pub latitude:    f64,
	pub longitude:   f64,
	pub address:     Option<String>,
	pub image_url:   Option<String>,
}

impl NewSpot {
	/// Insert this [`NewSpot`], the store assigns the id and timestamps
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<Spot, Error> {
		let spot = conn
			.interact(move |conn| {
				diesel::insert_into(spot::table)
					.values(self)
					.returning(Spot::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("inserted new spot {spot:?}");

		Ok(spot)
	}
}

/// A partial [`Spot`], `None` fields are left untouched
///
/// Nullable fields use a nested option, `Some(None)` clears the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpotUpdate {
	pub name:        Option<String>,
	pub description: Option<Option<String>>,
	pub category:    Option<String>,
	pub type_:       Option<String>,
	pub latitude:    Option<f64>,
	pub longitude:   Option<f64>,
	pub address:     Option<Option<String>>,
	pub image_url:   Option<Option<String>>,
}

/// Every writable column of a [`Spot`]
#[derive(AsChangeset, Debug)]
#[diesel(table_name = spot)]
#[diesel(treat_none_as_null = true)]
struct SpotChangeset {
	name:        String,
	description: Option<String>,
	category:    String,
	type_:       String,
	latitude:    f64,
	longitude:   f64,
	address:     Option<String>,
	image_url:   Option<String>,
}

impl From<Spot> for SpotChangeset {
	fn from(value: Spot) -> Self {
		Self {
			name:        value.name,
			description: value.description,
			category:    value.category,
			type_:       value.type_,
			latitude:    value.latitude,
			longitude:   value.longitude,
			address:     value.address,
			image_url:   value.image_url,
		}
	}
}

impl SpotUpdate {
	/// Load the [`Spot`] with the given id, merge this update into it and
	/// persist the full record
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		spot_id: Uuid,
		conn: &DbConn,
	) -> Result<Spot, Error> {
		let merged = Spot::get_by_id(spot_id, conn).await?.merge(self);
		let changes = SpotChangeset::from(merged);

		let spot = conn
			.interact(move |conn| {
				diesel::update(spot::table.find(spot_id))
					.set(changes)
					.returning(Spot::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("updated spot {spot:?}");

		Ok(spot)
	}
}
