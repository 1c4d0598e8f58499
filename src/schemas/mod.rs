//! Request and response shapes of the HTTP API

pub mod location;
pub mod spot;
pub mod user;
