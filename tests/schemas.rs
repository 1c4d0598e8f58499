use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use common::{Error, OrPlain};
use diesel::result::DatabaseErrorKind;
use serde_json::{Value, json};
use spot::{NearbyQuery, Spot, SpotUpdate};
use spotmap::schemas::spot::{
	NearbySpotsRequest,
	SpotResponse,
	UpdateSpotRequest,
};
use uuid::Uuid;

fn nearby_request(lng: &str, lat: &str, distance: &str) -> NearbySpotsRequest {
	NearbySpotsRequest {
		lng:      Some(lng.to_string()),
		lat:      Some(lat.to_string()),
		distance: Some(distance.to_string()),
	}
}

fn test_spot() -> Spot {
	let timestamp = NaiveDate::from_ymd_opt(2025, 3, 2)
		.unwrap()
		.and_hms_micro_opt(10, 15, 12, 123_456)
		.unwrap();

	Spot {
		id:          Uuid::new_v4(),
		name:        "De Krook".to_string(),
		description: Some("Library".to_string()),
		category:    "study".to_string(),
		type_:       "library".to_string(),
		latitude:    51.0478,
		longitude:   3.7271,
		address:     Some("Miriam Makebaplein 1".to_string()),
		image_url:   None,
		created_at:  timestamp,
		updated_at:  timestamp,
	}
}

#[test]
fn parse_nearby_request_test() {
	let query = nearby_request("3.72", "-51.05", "200").parse().unwrap();

	assert_eq!(query, NearbyQuery { lng: 3.72, lat: -51.05, distance: 200 });
}

#[test]
fn parse_nearby_request_invalid_test() {
	let requests = [
		nearby_request("abc", "0", "200"),
		nearby_request("0", "inf", "200"),
		nearby_request("0", "0", "200m"),
		nearby_request("0", "0", "99999999999"),
		NearbySpotsRequest { distance: None, ..nearby_request("0", "0", "1") },
		NearbySpotsRequest::default(),
	];

	for request in requests {
		let err = request.parse().unwrap_err();

		assert!(matches!(err, Error::BadRequest(_)));
	}
}

#[test]
fn parse_nearby_request_negative_distance_test() {
	let query = nearby_request("0", "0", "-5").parse().unwrap();

	assert_eq!(query.distance, -5);
}

#[test]
fn spot_serde_round_trip_test() {
	let spot = test_spot();

	let value = serde_json::to_value(&spot).unwrap();
	assert_eq!(value["type"], "library");
	assert_eq!(value["image_url"], Value::Null);

	let parsed: Spot = serde_json::from_value(value).unwrap();
	assert_eq!(parsed, spot);
}

#[test]
fn spot_response_matches_spot_test() {
	let spot = test_spot();

	let spot_value = serde_json::to_value(&spot).unwrap();
	let response_value = serde_json::to_value(SpotResponse::from(spot)).unwrap();

	assert_eq!(spot_value, response_value);
}

#[test]
fn update_request_absent_and_null_test() {
	let request: UpdateSpotRequest = serde_json::from_value(json!({
		"name": "Renamed",
		"address": null
	}))
	.unwrap();

	let update = request.to_insertable();

	assert_eq!(update.name.as_deref(), Some("Renamed"));
	assert_eq!(update.address, Some(None));
	assert_eq!(update.description, None);
	assert_eq!(update.image_url, None);
}

#[test]
fn merge_keeps_absent_fields_test() {
	let spot = test_spot();

	let merged = spot.clone().merge(SpotUpdate {
		name: Some("Renamed".to_string()),
		latitude: Some(0.0),
		..SpotUpdate::default()
	});

	assert_eq!(merged.name, "Renamed");
	assert!(merged.latitude.abs() < f64::EPSILON);
	assert_eq!(merged.id, spot.id);
	assert_eq!(merged.description, spot.description);
	assert!((merged.longitude - spot.longitude).abs() < f64::EPSILON);
	assert_eq!(merged.address, spot.address);
}

#[test]
fn merge_clears_nullable_fields_test() {
	let spot = test_spot();

	let merged = spot.clone().merge(SpotUpdate {
		description: Some(None),
		..SpotUpdate::default()
	});

	assert_eq!(merged.description, None);
	assert_eq!(merged.address, spot.address);
}

#[test]
fn empty_merge_is_identity_test() {
	let spot = test_spot();

	assert_eq!(spot.clone().merge(SpotUpdate::default()), spot);
}

#[test]
fn error_status_test() {
	let cases = [
		(Error::BadRequest(String::new()), StatusCode::BAD_REQUEST),
		(Error::ValidationError(String::new()), StatusCode::BAD_REQUEST),
		(Error::NotFound(String::new()), StatusCode::NOT_FOUND),
		(Error::Duplicate(String::new()), StatusCode::CONFLICT),
		(
			Error::InternalServerError(String::new()),
			StatusCode::INTERNAL_SERVER_ERROR,
		),
	];

	for (err, status) in cases {
		assert_eq!(err.status(), status);
	}
}

#[test]
fn diesel_not_found_maps_to_not_found_test() {
	let err = Error::from(diesel::result::Error::NotFound);

	assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn store_error_message_is_passed_through_test() {
	let message = "could not find a geography column named location";

	let err = Error::from(diesel::result::Error::DatabaseError(
		DatabaseErrorKind::Unknown,
		Box::new(message.to_string()),
	));

	let Error::InternalServerError(repr) = &err else {
		panic!("expected an internal server error, got {err:?}");
	};
	assert!(repr.contains(message));

	let response = err.into_response();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let body: Value = serde_json::from_slice(&body).unwrap();

	assert_eq!(body, json!({ "error": message, "code": 5 }));
}

#[test]
fn plain_not_found_message_only_for_missing_rows_test() {
	let missing: Result<(), Error> = Err(Error::NotFound(String::new()));
	let err = missing.or_plain_not_found("Gone", "Failed").unwrap_err();

	assert_eq!(err.status, StatusCode::NOT_FOUND);
	assert_eq!(err.message, "Gone");

	let duplicate: Result<(), Error> = Err(Error::Duplicate(String::new()));
	let err = duplicate.or_plain_not_found("Gone", "Failed").unwrap_err();

	assert_eq!(err.status, StatusCode::CONFLICT);
	assert_eq!(err.message, "Failed");
}
