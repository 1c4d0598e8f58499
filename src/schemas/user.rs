use ::user::{NewUser, User, UserUpdate};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserResponse {
	pub id:         i32,
	pub name:       String,
	pub email:      String,
	pub created_at: NaiveDateTime,
	pub updated_at: NaiveDateTime,
}

impl From<User> for UserResponse {
	fn from(value: User) -> Self {
		Self {
			id:         value.id,
			name:       value.name,
			email:      value.email,
			created_at: value.created_at,
			updated_at: value.updated_at,
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateUserRequest {
	#[validate(length(
		min = 1,
		max = 64,
		message = "name must be between 1 and 64 characters long",
		code = "name-length"
	))]
	pub name:  String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email: String,
}

impl CreateUserRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewUser {
		NewUser { name: self.name, email: self.email }
	}
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateUserRequest {
	#[validate(length(
		min = 1,
		max = 64,
		message = "name must be between 1 and 64 characters long",
		code = "name-length"
	))]
	pub name:  Option<String>,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email: Option<String>,
}

impl UpdateUserRequest {
	#[must_use]
	pub fn to_insertable(self) -> UserUpdate {
		UserUpdate { name: self.name, email: self.email }
	}
}
