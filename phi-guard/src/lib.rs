//! Key-name-based PHI guarding for JSON records.
//!
//! This crate separates:
//! - **Classification**: which field names carry protected health information.
//! - **Guarding**: producing a safe copy of a record for list-view display.
//!
//! Records are dynamic [`serde_json::Value`] payloads as they arrive from a
//! backend API. The guard looks only at a record's own top-level key names;
//! it never inspects nested object contents and never removes a key. A
//! protected key keeps its value only when that value is `null` or the empty
//! string; otherwise the value is overwritten with the [`REDACTED_SENTINEL`]
//! literal `"[redacted]"`.
//!
//! Key rules:
//! - [`has_protected_keys`] is a pure membership check over top-level keys.
//! - [`redact_for_list`] always returns a new value and never mutates input.
//! - [`guard_list_row`] takes ownership and returns the row untouched when no
//!   protected key is present, so the common clean-row path allocates nothing.
//! - Every operation is total: `null`, scalars, and arrays degrade to safe
//!   defaults (`false` / passthrough) instead of erroring. A guard that can
//!   crash the render path is worse than no guard.
//!
//! What this crate does:
//! - defines the [`ProtectedKeySet`] classification type and its standard,
//!   process-wide field list
//! - defines the list-view guard operations
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform I/O or logging (the core does not even log matched key names)
//! - deep redaction or value-content scanning
//! - keep the field list in sync with a backend (a deployment concern)
//!
//! This guard is defense in depth for list and summary views; the primary PHI
//! enforcement belongs server-side.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
#[cfg(feature = "classification")]
mod classification;
#[cfg(feature = "guard")]
mod guard;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
#[cfg(feature = "classification")]
pub use classification::ProtectedKeySet;
#[cfg(feature = "guard")]
pub use guard::{
    guard_list, guard_list_row, has_protected_keys, redact_for_list, REDACTED_SENTINEL,
};
