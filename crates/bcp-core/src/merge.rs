//! Forward-compatible decoding of stored drafts.
//!
//! A stored draft may have been written by an older, narrower form. Rather
//! than requiring every key, the stored object is laid over the default
//! record key by key, so fields introduced later keep their defaults.

use serde_json::{Map, Value};

use crate::{
    error::{CaptureError, Result},
    models::DraftRecord,
};

/// Parse stored draft text and merge it over [`DraftRecord::default`].
///
/// # Errors
///
/// Returns an error if the text is not JSON, is not a JSON object, or if a
/// present key does not have the shape of the corresponding field.
pub fn merge_onto_default(stored: &str) -> Result<DraftRecord> {
    let value: Value = serde_json::from_str(stored)?;
    merge_value_onto_default(value)
}

/// Merge an already parsed value over [`DraftRecord::default`].
///
/// Stored keys win; keys the record does not know about are dropped.
///
/// # Errors
///
/// See [`merge_onto_default`].
pub fn merge_value_onto_default(value: Value) -> Result<DraftRecord> {
    let Value::Object(stored) = value else {
        return Err(CaptureError::invalid_input("draft").with_reason("stored draft is not an object"));
    };

    let mut merged = default_object()?;
    for (key, field) in stored {
        if merged.contains_key(&key) {
            merged.insert(key, field);
        }
    }

    Ok(serde_json::from_value(Value::Object(merged))?)
}

fn default_object() -> Result<Map<String, Value>> {
    match serde_json::to_value(DraftRecord::default())? {
        Value::Object(map) => Ok(map),
        _ => Err(CaptureError::Configuration {
            message: "default draft did not serialize to an object".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CriticalityUnit, OwnerRole};

    #[test]
    fn test_partial_draft_keeps_defaults_for_missing_keys() {
        let record = merge_onto_default(r#"{"name":"Payroll BCP"}"#).unwrap();
        assert_eq!(record.name, "Payroll BCP");
        assert_eq!(record.criticality_value, 1.0);
        assert_eq!(record.criticality_unit, CriticalityUnit::Days);
        assert!(record.notifications.is_empty());
    }

    #[test]
    fn test_stored_value_wins_per_key() {
        let record = merge_onto_default(
            r#"{"criticality_value":2,"criticality_unit":"hours","owners":[{"role":"backup","name":"Bob","email":"b@x.com"}]}"#,
        )
        .unwrap();
        assert_eq!(record.criticality_value, 2.0);
        assert_eq!(record.criticality_unit, CriticalityUnit::Hours);
        assert_eq!(record.owners.len(), 1);
        assert_eq!(record.owners[0].role, OwnerRole::Backup);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record = merge_onto_default(r#"{"service_name":"Payroll","legacy_flag":true}"#).unwrap();
        assert_eq!(record.service_name, "Payroll");
    }

    #[test]
    fn test_nested_entries_fill_missing_fields() {
        let record = merge_onto_default(r#"{"processes":[{"name":"Billing"}]}"#).unwrap();
        assert_eq!(record.processes[0].name, "Billing");
        assert!(record.processes[0].sites.is_empty());
    }

    #[test]
    fn test_malformed_text_is_an_error() {
        assert!(merge_onto_default("{not json").is_err());
        assert!(merge_onto_default("").is_err());
    }

    #[test]
    fn test_non_object_is_an_error() {
        assert!(matches!(
            merge_onto_default("[1,2,3]"),
            Err(CaptureError::InvalidInput { .. })
        ));
        assert!(merge_onto_default("\"draft\"").is_err());
        assert!(merge_onto_default("null").is_err());
    }

    #[test]
    fn test_wrong_shape_for_known_key_is_an_error() {
        assert!(merge_onto_default(r#"{"processes":"none"}"#).is_err());
        assert!(merge_onto_default(r#"{"criticality_unit":"weeks"}"#).is_err());
        assert!(merge_onto_default(r#"{"name":null}"#).is_err());
    }

    #[test]
    fn test_empty_object_is_the_default_record() {
        assert_eq!(merge_onto_default("{}").unwrap(), DraftRecord::default());
    }
}
