#[macro_use]
extern crate tracing;

use common::{DbConn, Error};
use db::location;
use diesel::pg::Pg;
use diesel::prelude::*;

#[derive(
	AsChangeset,
	Clone,
	Debug,
	Identifiable,
	PartialEq,
	Queryable,
	Selectable,
)]
#[diesel(table_name = location)]
#[diesel(check_for_backend(Pg))]
pub struct Location {
	pub id:        i32,
	pub name:      String,
	pub latitude:  f64,
	pub longitude: f64,
}

impl Location {
	/// Get all [`Location`]s
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let locations = conn
			.interact(|conn| {
				location::table.select(Self::as_select()).load(conn)
			})
			.await??;

		Ok(locations)
	}

	/// Get a single [`Location`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(loc_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let location = conn
			.interact(move |conn| {
				location::table
					.find(loc_id)
					.select(Self::as_select())
					.get_result(conn)
			})
			.await??;

		Ok(location)
	}

	#[instrument(skip(conn))]
	pub async fn delete_by_id(loc_id: i32, conn: &DbConn) -> Result<(), Error> {
		let count = conn
			.interact(move |conn| {
				diesel::delete(location::table.find(loc_id)).execute(conn)
			})
			.await??;

		info!("deleted {count} location(s) with id {loc_id}");

		Ok(())
	}

	#[must_use]
	pub fn merge(mut self, update: LocationUpdate) -> Self {
		if let Some(name) = update.name {
			self.name = name;
		}

		if let Some(latitude) = update.latitude {
			self.latitude = latitude;
		}

		if let Some(longitude) = update.longitude {
			self.longitude = longitude;
		}

		self
	}
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = location)]
pub struct NewLocation {
	pub name:      String,
	pub latitude:  f64,
	pub longitude: f64,
}

impl NewLocation {
	/// Create a new [`Location`]
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<Location, Error> {
		let location = conn
			.interact(move |conn| {
				diesel::insert_into(location::table)
					.values(self)
					.returning(Location::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("inserted new location {location:?}");

		Ok(location)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationUpdate {
	pub name:      Option<String>,
	pub latitude:  Option<f64>,
	pub longitude: Option<f64>,
}

impl LocationUpdate {
	/// Merge this update into the stored [`Location`] and save the result
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		loc_id: i32,
		conn: &DbConn,
	) -> Result<Location, Error> {
		let merged = Location::get_by_id(loc_id, conn).await?.merge(self);

		let location = conn
			.interact(move |conn| {
				diesel::update(location::table.find(loc_id))
					.set(&merged)
					.returning(Location::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("updated location {location:?}");

		Ok(location)
	}
}
