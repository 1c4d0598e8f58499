use common::{DbConn, Error};
use db::spot;
use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Double};

use crate::Spot;

type BoxedDistance =
	Box<dyn BoxableExpression<spot::table, Pg, SqlType = Double>>;
type BoxedCondition =
	Box<dyn BoxableExpression<spot::table, Pg, SqlType = Bool>>;

/// A point in WGS84 decimal degrees and a radius in meters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearbyQuery {
	pub lng:      f64,
	pub lat:      f64,
	pub distance: i32,
}

impl NearbyQuery {
	/// Geographic distance in meters between a spot and the query point
	///
	/// Both sides are cast to `geography` so PostGIS measures along the
	/// spheroid instead of in degrees.
	fn distance_to_spot(self) -> BoxedDistance {
		Box::new(
			sql::<Double>("ST_Distance(location, ST_SetSRID(ST_MakePoint(")
				.bind::<Double, _>(self.lng)
				.sql(", ")
				.bind::<Double, _>(self.lat)
				.sql("), 4326)::geography)"),
		)
	}

	/// Whether a spot lies within `distance` meters of the query point
	fn contains_spot(self) -> BoxedCondition {
		Box::new(
			sql::<Bool>("ST_DWithin(location, ST_SetSRID(ST_MakePoint(")
				.bind::<Double, _>(self.lng)
				.sql(", ")
				.bind::<Double, _>(self.lat)
				.sql("), 4326)::geography, ")
				.bind::<Double, _>(f64::from(self.distance))
				.sql(")"),
		)
	}
}

/// A [`Spot`] together with its distance to a [`NearbyQuery`] point
#[derive(Clone, Debug, PartialEq)]
pub struct NearbySpot {
	pub spot:     Spot,
	pub distance: f64,
}

impl From<(Spot, f64)> for NearbySpot {
	fn from((spot, distance): (Spot, f64)) -> Self { Self { spot, distance } }
}

impl Spot {
	/// Get all [`Spot`]s within the radius of a [`NearbyQuery`], nearest
	/// first
	///
	/// Spots at the same distance are ordered by id.
	#[instrument(skip(conn))]
	pub async fn find_nearby(
		query: NearbyQuery,
		conn: &DbConn,
	) -> Result<Vec<NearbySpot>, Error> {
		let spots: Vec<(Spot, f64)> = conn
			.interact(move |conn| {
				spot::table
					.filter(query.contains_spot())
					.select((Spot::as_select(), query.distance_to_spot()))
					.order((query.distance_to_spot().asc(), spot::id.asc()))
					.load(conn)
			})
			.await??;

		debug!("found {} spot(s) near {query:?}", spots.len());

		Ok(spots.into_iter().map(NearbySpot::from).collect())
	}
}
