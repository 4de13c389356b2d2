//! Response envelope normalization.
//!
//! Some backend endpoints wrap their payload as `{ "success": bool, "data": T }`,
//! others return `T` directly. Everything that reads a response body goes
//! through [`unwrap_envelope`] so callers only ever see the bare payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

/// Returns `true` if `value` is an object carrying a boolean `success` member.
pub fn is_envelope(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|obj| obj.get("success"))
        .is_some_and(Value::is_boolean)
}

/// Strip the envelope from a response body.
///
/// Envelopes yield their `data` member (`null` when it is missing); any
/// other value is returned unchanged.
pub fn unwrap_envelope(value: Value) -> Value {
    if !is_envelope(&value) {
        return value;
    }

    if let Some(message) = envelope_message(&value) {
        log::debug!("Envelope reported failure: {message}");
    }

    match value {
        Value::Object(mut obj) => obj.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

/// The server's message for an envelope with `success: false`.
///
/// Looks at `message` first, then `error`. Returns `None` for successful
/// envelopes and for non-envelope values.
pub fn envelope_message(value: &Value) -> Option<&str> {
    let obj = value.as_object()?;
    if obj.get("success")?.as_bool()? {
        return None;
    }
    obj.get("message")
        .or_else(|| obj.get("error"))
        .and_then(Value::as_str)
}

/// Whether an unwrapped payload counts as "no data".
pub fn is_empty_payload(value: &Value) -> bool {
    value.is_null()
}

/// Unwrap and decode a payload, mapping an empty payload to `None`.
pub fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    let payload = unwrap_envelope(value);
    if is_empty_payload(&payload) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(payload)?))
}

/// Extract the item array from an unwrapped list payload.
///
/// Accepts a bare array or a paginated object `{ "items": [...] }`.
/// Anything else yields `None`.
pub fn list_items(payload: Value) -> Option<Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(mut obj) => match obj.remove("items") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_unwrap_success_envelope() {
        let body = json!({"success": true, "data": {"id": 7, "name": "Acme"}});
        assert_eq!(unwrap_envelope(body), json!({"id": 7, "name": "Acme"}));
    }

    #[test]
    fn test_unwrap_bare_value_unchanged() {
        let body = json!({"id": 7, "name": "Acme"});
        assert_eq!(unwrap_envelope(body.clone()), body);

        let list = json!([1, 2, 3]);
        assert_eq!(unwrap_envelope(list.clone()), list);
    }

    #[test]
    fn test_unwrap_failed_envelope_still_returns_data() {
        let body = json!({"success": false, "data": null, "message": "boom"});
        assert_eq!(unwrap_envelope(body), Value::Null);
    }

    #[test]
    fn test_unwrap_envelope_without_data_is_null() {
        assert_eq!(unwrap_envelope(json!({"success": true})), Value::Null);
    }

    #[test]
    fn test_non_boolean_success_is_not_an_envelope() {
        let body = json!({"success": "yes", "data": 1});
        assert!(!is_envelope(&body));
        assert_eq!(unwrap_envelope(body.clone()), body);
    }

    #[test]
    fn test_envelope_message() {
        let failed = json!({"success": false, "error": "quota exceeded"});
        assert_eq!(envelope_message(&failed), Some("quota exceeded"));

        let ok = json!({"success": true, "message": "fine"});
        assert_eq!(envelope_message(&ok), None);

        assert_eq!(envelope_message(&json!("plain")), None);
    }

    #[test]
    fn test_decode_payload_empty() {
        #[derive(Debug, Deserialize)]
        struct Thing {
            #[allow(dead_code)]
            id: u32,
        }
        let decoded: Option<Thing> =
            decode_payload(json!({"success": true, "data": null})).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_list_items_shapes() {
        assert_eq!(list_items(json!([1, 2])), Some(vec![json!(1), json!(2)]));
        assert_eq!(
            list_items(json!({"items": [1], "total": 1})),
            Some(vec![json!(1)])
        );
        assert_eq!(list_items(json!({"total": 0})), None);
        assert_eq!(list_items(Value::Null), None);
        assert_eq!(list_items(json!("nope")), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn test_envelope_roundtrip(n in any::<i64>(), s in "\\PC*", ok in any::<bool>()) {
            let payload = json!({"n": n, "s": s});
            let wrapped = json!({"success": ok, "data": payload.clone()});
            prop_assert_eq!(unwrap_envelope(wrapped), payload);
        }

        #[test]
        fn test_bare_payload_passthrough(n in any::<i64>(), s in "\\PC*") {
            let payload = json!({"n": n, "s": s});
            prop_assert_eq!(unwrap_envelope(payload.clone()), payload);
        }
    }
}
