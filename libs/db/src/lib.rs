//! Diesel table definitions

mod schema;

pub use schema::*;
