//! List-view guard operations over JSON records.
//!
//! This module ties the pieces together:
//!
//! - **`classification`** (in the crate root): which key names are protected
//! - **`redact`**: the guard operations (`has_protected_keys`,
//!   `redact_for_list`, `guard_list_row`, `guard_list`)

mod redact;

pub use redact::{
    guard_list, guard_list_row, has_protected_keys, redact_for_list, REDACTED_SENTINEL,
};
