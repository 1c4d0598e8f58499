#[macro_use]
extern crate tracing;

use chrono::NaiveDateTime;
use common::{DbConn, Error};
use db::users;
use diesel::pg::Pg;
use diesel::prelude::*;

#[derive(Clone, Debug, Identifiable, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id:         i32,
	pub name:       String,
	pub email:      String,
	pub created_at: NaiveDateTime,
	pub updated_at: NaiveDateTime,
}

impl User {
	/// Get all [`User`]s
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let users = conn
			.interact(|conn| users::table.select(Self::as_select()).load(conn))
			.await??;

		Ok(users)
	}

	/// Get a single [`User`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(user_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let user = conn
			.interact(move |conn| {
				users::table
					.find(user_id)
					.select(Self::as_select())
					.get_result(conn)
			})
			.await??;

		Ok(user)
	}

	/// Delete a [`User`] given its id
	#[instrument(skip(conn))]
	pub async fn delete_by_id(user_id: i32, conn: &DbConn) -> Result<(), Error> {
		let count = conn
			.interact(move |conn| {
				diesel::delete(users::table.find(user_id)).execute(conn)
			})
			.await??;

		info!("deleted {count} user(s) with id {user_id}");

		Ok(())
	}

	#[must_use]
	pub fn merge(mut self, update: UserUpdate) -> Self {
		if let Some(name) = update.name {
			self.name = name;
		}

		if let Some(email) = update.email {
			self.email = email;
		}

		self
	}
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
	pub name:  String,
	pub email: String,
}

impl NewUser {
	/// Create a new [`User`]
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<User, Error> {
		let user = conn
			.interact(move |conn| {
				diesel::insert_into(users::table)
					.values(self)
					.returning(User::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("inserted new user {user:?}");

		Ok(user)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserUpdate {
	pub name:  Option<String>,
	pub email: Option<String>,
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = users)]
struct UserChangeset {
	name:  String,
	email: String,
}

impl UserUpdate {
	/// Merge this update into the stored [`User`] and save the result
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		user_id: i32,
		conn: &DbConn,
	) -> Result<User, Error> {
		let merged = User::get_by_id(user_id, conn).await?.merge(self);
		let changes = UserChangeset { name: merged.name, email: merged.email };

		let user = conn
			.interact(move |conn| {
				diesel::update(users::table.find(user_id))
					.set(changes)
					.returning(User::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("updated user {user:?}");

		Ok(user)
	}
}
