//! Presence checks for incoming person payloads.
//!
//! Payloads arrive as raw JSON so that a missing key can be reported as a
//! validation failure instead of a deserialization error. A key whose value
//! is `null` or of the wrong JSON type counts as missing.

use serde_json::{Map, Value};

use crate::domain::{Location, NewPerson, Person};
use crate::ports::CoreError;

const MISSING_FIELDS: &str = "missing required fields";
const INCOMPLETE_LOCATION: &str = "incomplete location";

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn number(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

fn coordinates(object: &Map<String, Value>) -> Option<Location> {
    Some(Location::new(number(object, "lat")?, number(object, "lng")?))
}

/// Validate a create/update body.
///
/// Requires `name`, `city`, `country` and a `location` object holding both
/// `lat` and `lng`.
///
/// # Examples
///
/// ```rust
/// use roster_core::utils::validation::parse_new_person;
///
/// let body = serde_json::json!({
///     "name": "A", "city": "B", "country": "C",
///     "location": { "lat": 1.0, "lng": 2.0 }
/// });
/// let person = parse_new_person(&body).unwrap();
/// assert_eq!(person.location.lng, 2.0);
///
/// let missing = serde_json::json!({ "name": "A" });
/// assert!(parse_new_person(&missing).is_err());
/// ```
pub fn parse_new_person(body: &Value) -> Result<NewPerson, CoreError> {
    let missing = || CoreError::Validation(MISSING_FIELDS.to_string());
    let object = body.as_object().ok_or_else(missing)?;

    let (Some(name), Some(city), Some(country), Some(location)) = (
        text(object, "name"),
        text(object, "city"),
        text(object, "country"),
        object.get("location").and_then(Value::as_object),
    ) else {
        return Err(missing());
    };

    let location = coordinates(location)
        .ok_or_else(|| CoreError::Validation(INCOMPLETE_LOCATION.to_string()))?;

    Ok(NewPerson {
        name,
        city,
        country,
        location,
    })
}

/// Validate one element of a batch upsert body.
///
/// Requires an integer `id` plus `name`, `city` and `country`. Coordinates
/// come from a complete nested `location` object when there is one, and from
/// top-level `lat`/`lng` otherwise. The error is a human-readable detail
/// that embeds the offending element.
pub fn parse_batch_entry(entry: &Value) -> Result<Person, String> {
    let missing = || format!("{MISSING_FIELDS}: {entry}");
    let object = entry.as_object().ok_or_else(missing)?;

    let (Some(id), Some(name), Some(city), Some(country)) = (
        object.get("id").and_then(Value::as_i64),
        text(object, "name"),
        text(object, "city"),
        text(object, "country"),
    ) else {
        return Err(missing());
    };

    let location = object
        .get("location")
        .and_then(Value::as_object)
        .and_then(coordinates)
        .or_else(|| coordinates(object))
        .ok_or_else(|| format!("{INCOMPLETE_LOCATION}: {entry}"))?;

    Ok(Person {
        id,
        name,
        city,
        country,
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_person_requires_every_key() {
        for key in ["name", "city", "country", "location"] {
            let mut body = json!({
                "name": "A", "city": "B", "country": "C",
                "location": { "lat": 1.0, "lng": 2.0 }
            });
            body.as_object_mut().unwrap().remove(key);

            let err = parse_new_person(&body).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "missing {key}");
        }
    }

    #[test]
    fn new_person_requires_both_coordinates() {
        let body = json!({
            "name": "A", "city": "B", "country": "C",
            "location": { "lat": 1.0 }
        });
        let err = parse_new_person(&body).unwrap_err();
        assert!(err.to_string().contains(INCOMPLETE_LOCATION));
    }

    #[test]
    fn new_person_treats_null_as_missing() {
        let body = json!({
            "name": null, "city": "B", "country": "C",
            "location": { "lat": 1.0, "lng": 2.0 }
        });
        assert!(parse_new_person(&body).is_err());
    }

    #[test]
    fn new_person_rejects_non_object_body() {
        assert!(parse_new_person(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn new_person_ignores_flat_coordinates() {
        let body = json!({
            "name": "A", "city": "B", "country": "C",
            "lat": 1.0, "lng": 2.0
        });
        assert!(parse_new_person(&body).is_err());
    }

    #[test]
    fn batch_entry_accepts_nested_location() {
        let entry = json!({
            "id": 3, "name": "A", "city": "B", "country": "C",
            "location": { "lat": 1.5, "lng": 2.5 }
        });
        let person = parse_batch_entry(&entry).unwrap();
        assert_eq!(person.id, 3);
        assert_eq!(person.location, Location::new(1.5, 2.5));
    }

    #[test]
    fn batch_entry_accepts_flat_coordinates() {
        let entry = json!({
            "id": 3, "name": "A", "city": "B", "country": "C",
            "lat": 10, "lng": 20
        });
        let person = parse_batch_entry(&entry).unwrap();
        assert_eq!(person.location, Location::new(10.0, 20.0));
    }

    #[test]
    fn batch_entry_prefers_complete_nested_location() {
        let entry = json!({
            "id": 3, "name": "A", "city": "B", "country": "C",
            "location": { "lat": 1.0, "lng": 2.0 },
            "lat": 10.0, "lng": 20.0
        });
        let person = parse_batch_entry(&entry).unwrap();
        assert_eq!(person.location, Location::new(1.0, 2.0));
    }

    #[test]
    fn batch_entry_falls_back_when_nested_is_incomplete() {
        let entry = json!({
            "id": 3, "name": "A", "city": "B", "country": "C",
            "location": { "lat": 1.0 },
            "lat": 10.0, "lng": 20.0
        });
        let person = parse_batch_entry(&entry).unwrap();
        assert_eq!(person.location, Location::new(10.0, 20.0));
    }

    #[test]
    fn batch_entry_reports_missing_city_with_element() {
        let entry = json!({ "id": 3, "name": "A", "country": "C", "lat": 1.0, "lng": 2.0 });
        let detail = parse_batch_entry(&entry).unwrap_err();
        assert!(detail.starts_with(MISSING_FIELDS));
        assert!(detail.contains("\"name\":\"A\""));
    }

    #[test]
    fn batch_entry_requires_integer_id() {
        let entry = json!({ "id": "3", "name": "A", "city": "B", "country": "C", "lat": 1.0, "lng": 2.0 });
        assert!(parse_batch_entry(&entry).is_err());
    }

    #[test]
    fn batch_entry_without_any_coordinates_is_incomplete() {
        let entry = json!({ "id": 3, "name": "A", "city": "B", "country": "C" });
        let detail = parse_batch_entry(&entry).unwrap_err();
        assert!(detail.starts_with(INCOMPLETE_LOCATION));
    }
}
