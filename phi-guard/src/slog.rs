//! Adapters for emitting guarded rows through `slog`.
//!
//! This module connects the list-view guard with `slog` by providing a
//! `slog::Value` implementation that serializes the *guarded* form of a row
//! as structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from
//!   [`guard_list_row`](crate::guard_list_row), never from the raw row.
//! - Avoiding fallible logging APIs: the payload is already a JSON value, so
//!   nothing here can fail or panic in a log call.
//!
//! It does not configure `slog`, decide which keys are protected, or log
//! anything on its own.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::classification::ProtectedKeySet;

/// A `slog::Value` that emits a guarded row as structured JSON.
///
/// Construction goes through [`IntoGuardedRow`] or
/// [`GuardedRow::with_set`], both of which apply the guard before the value
/// can reach a drain; the raw row is consumed and never stored.
pub struct GuardedRow {
    row: JsonValue,
}

impl GuardedRow {
    /// Guards `row` with an explicit key set instead of the standard one.
    #[must_use]
    pub fn with_set(set: &ProtectedKeySet, row: JsonValue) -> Self {
        Self {
            row: set.guard_list_row(row),
        }
    }
}

impl SlogValue for GuardedRow {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.row.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts a row into a `slog::Value` that logs its guarded form.
///
/// ## Example
/// ```ignore
/// use phi_guard::slog::IntoGuardedRow;
///
/// info!(logger, "client row fetched"; "row" => row.into_guarded_row());
/// ```
pub trait IntoGuardedRow: Sized {
    /// Guards `self` against the standard key set and returns a `slog::Value`
    /// that serializes as structured JSON.
    fn into_guarded_row(self) -> GuardedRow;
}

impl IntoGuardedRow for JsonValue {
    fn into_guarded_row(self) -> GuardedRow {
        GuardedRow {
            row: crate::guard::guard_list_row(self),
        }
    }
}
