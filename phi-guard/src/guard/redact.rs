//! Shallow, key-name-based redaction of records for list views.
//!
//! These operations are pure transformations over [`serde_json::Value`]. They
//! do not traverse nested objects, never remove a key, and are total: any
//! input shape, including non-objects, produces a well-defined result rather
//! than an error. They also perform zero I/O; not even matched key names are
//! logged, so guard execution can never be correlated with values in other
//! log lines.

use serde_json::{Map, Value};

use crate::classification::ProtectedKeySet;

/// Sentinel written over protected values in list views.
pub const REDACTED_SENTINEL: &str = "[redacted]";

/// Returns `true` when a protected key's value should be overwritten.
///
/// `null` and the empty string are left untouched: there is nothing to leak,
/// and overwriting them would hide "field absent" from the rendering layer.
fn needs_sentinel(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn sentinel() -> Value {
    Value::String(REDACTED_SENTINEL.to_owned())
}

impl ProtectedKeySet {
    /// Returns `true` iff `record` is an object and at least one of its own
    /// top-level keys is a member of this set.
    ///
    /// `null`, scalars, and arrays are never protected.
    #[must_use]
    pub fn has_protected_keys(&self, record: &Value) -> bool {
        match record {
            Value::Object(fields) => fields.keys().any(|key| self.contains(key)),
            _ => false,
        }
    }

    /// Produces a redacted copy of `record` for list-view display.
    ///
    /// The output has exactly the same key set as the input. Protected keys
    /// whose value is non-null and not the empty string are overwritten with
    /// [`REDACTED_SENTINEL`]; everything else is carried over unchanged. The
    /// input is never mutated and the output is always a distinct value.
    ///
    /// Non-object input is returned as an equal value.
    #[must_use]
    pub fn redact_for_list(&self, record: &Value) -> Value {
        match record {
            Value::Object(fields) => {
                let mut out = Map::with_capacity(fields.len());
                for (key, value) in fields {
                    if self.contains(key) && needs_sentinel(value) {
                        out.insert(key.clone(), sentinel());
                    } else {
                        out.insert(key.clone(), value.clone());
                    }
                }
                Value::Object(out)
            }
            other => other.clone(),
        }
    }

    /// Guards a single row bound for a list view.
    ///
    /// Rows without protected keys are returned as-is, with no copy: by
    /// contract with the backend, clean rows are the common case, and this
    /// guard is defense in depth rather than the primary enforcement. Rows
    /// with protected keys have those values overwritten in the owned map, so
    /// unprotected values are moved rather than cloned.
    #[must_use]
    pub fn guard_list_row(&self, record: Value) -> Value {
        if !self.has_protected_keys(&record) {
            return record;
        }
        match record {
            Value::Object(mut fields) => {
                for (key, value) in fields.iter_mut() {
                    if self.contains(key) && needs_sentinel(value) {
                        *value = sentinel();
                    }
                }
                Value::Object(fields)
            }
            // has_protected_keys only matches objects
            other => other,
        }
    }

    /// Guards every row of a fetched page.
    #[must_use]
    pub fn guard_list(&self, rows: Vec<Value>) -> Vec<Value> {
        rows.into_iter().map(|row| self.guard_list_row(row)).collect()
    }
}

/// [`ProtectedKeySet::has_protected_keys`] against the standard set.
#[must_use]
pub fn has_protected_keys(record: &Value) -> bool {
    ProtectedKeySet::global().has_protected_keys(record)
}

/// [`ProtectedKeySet::redact_for_list`] against the standard set.
#[must_use]
pub fn redact_for_list(record: &Value) -> Value {
    ProtectedKeySet::global().redact_for_list(record)
}

/// [`ProtectedKeySet::guard_list_row`] against the standard set.
#[must_use]
pub fn guard_list_row(record: Value) -> Value {
    ProtectedKeySet::global().guard_list_row(record)
}

/// [`ProtectedKeySet::guard_list`] against the standard set.
#[must_use]
pub fn guard_list(rows: Vec<Value>) -> Vec<Value> {
    ProtectedKeySet::global().guard_list(rows)
}
