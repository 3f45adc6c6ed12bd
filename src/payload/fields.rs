// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed field extraction from untyped JSON objects.
//!
//! A key that is absent or holds a value of the wrong JSON type is reported
//! as [`ParseError::MissingField`]. An integer of the right type that does
//! not fit the target type is [`ParseError::InvalidField`].

use serde_json::{Map, Value};

use crate::error::ParseError;

pub(super) type Object = Map<String, Value>;

pub(super) fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::UnexpectedFormat(format!("{what} must be a JSON object")))
}

pub(super) fn object<'a>(map: &'a Object, key: &str) -> Result<&'a Object, ParseError> {
    map.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| missing(key))
}

pub(super) fn string<'a>(map: &'a Object, key: &str) -> Result<&'a str, ParseError> {
    map.get(key).and_then(Value::as_str).ok_or_else(|| missing(key))
}

pub(super) fn raw_integer(map: &Object, key: &str) -> Result<i64, ParseError> {
    map.get(key).and_then(Value::as_i64).ok_or_else(|| missing(key))
}

/// Extracts an array whose elements are all integers.
pub(super) fn raw_integer_array(map: &Object, key: &str) -> Result<Vec<i64>, ParseError> {
    let items = map.get(key).and_then(Value::as_array).ok_or_else(|| missing(key))?;
    items
        .iter()
        .map(Value::as_i64)
        .collect::<Option<_>>()
        .ok_or_else(|| missing(key))
}

pub(super) fn missing(key: &str) -> ParseError {
    ParseError::MissingField(key.to_string())
}

pub(super) fn narrow<T: TryFrom<i64>>(key: &str, value: i64) -> Result<T, ParseError> {
    T::try_from(value).map_err(|_| ParseError::InvalidField {
        field: key.to_string(),
        message: format!("value {value} is out of range"),
    })
}

pub(super) fn narrow_array<T: TryFrom<i64>>(key: &str, values: &[i64]) -> Result<Vec<T>, ParseError> {
    values.iter().map(|&value| narrow(key, value)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Object {
        match json!({
            "obj": {"a": 1},
            "text": "SCHED_SS",
            "num": 30,
            "neg": -4,
            "float": 1.5,
            "arr": [1, 2, 3],
            "mixed": [1, "two"],
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn object_field() {
        let map = sample();
        assert!(object(&map, "obj").is_ok());
        assert!(matches!(object(&map, "text"), Err(ParseError::MissingField(k)) if k == "text"));
        assert!(matches!(object(&map, "nope"), Err(ParseError::MissingField(k)) if k == "nope"));
    }

    #[test]
    fn string_field() {
        let map = sample();
        assert_eq!(string(&map, "text").unwrap(), "SCHED_SS");
        assert!(string(&map, "num").is_err());
    }

    #[test]
    fn raw_integer_field() {
        let map = sample();
        assert_eq!(raw_integer(&map, "num").unwrap(), 30);
        assert_eq!(raw_integer(&map, "neg").unwrap(), -4);
        assert!(matches!(
            raw_integer(&map, "float"),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn raw_integer_array_field() {
        let map = sample();
        assert_eq!(raw_integer_array(&map, "arr").unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            raw_integer_array(&map, "mixed"),
            Err(ParseError::MissingField(k)) if k == "mixed"
        ));
        assert!(matches!(
            raw_integer_array(&map, "num"),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn narrow_values() {
        assert_eq!(narrow::<u32>("dur", 30).unwrap(), 30);
        assert!(matches!(
            narrow::<u32>("dur", -4),
            Err(ParseError::InvalidField { ref field, .. }) if field == "dur"
        ));
        assert_eq!(narrow_array::<u16>("day", &[10, 100]).unwrap(), vec![10, 100]);
        assert!(narrow_array::<u16>("day", &[10, 70_000]).is_err());
    }

    #[test]
    fn root_must_be_object() {
        assert!(as_object(&json!([1, 2]), "payload").is_err());
        assert!(as_object(&json!({}), "payload").is_ok());
    }
}
