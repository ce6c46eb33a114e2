//! Classification of record keys: which field names carry PHI.
//!
//! The standard key list is a static enumeration mirroring the backend's PHI
//! field list. Backends are inconsistent about casing, so the snake_case and
//! camelCase spellings of each logical field are both members. Matching is
//! exact string comparison; there is no normalization at lookup time.

use std::{borrow::Cow, collections::HashSet, sync::OnceLock};

/// Field names known to carry protected health information.
///
/// `due_date` is here deliberately: in this domain it is an expected-delivery
/// date, not a billing deadline.
const STANDARD_PROTECTED_KEYS: &[&str] = &[
    "phone_number",
    "phoneNumber",
    "email",
    "address",
    "date_of_birth",
    "dateOfBirth",
    "due_date",
    "dueDate",
    "ssn",
    "insurance_id",
    "insuranceId",
    "medical_record_number",
    "medicalRecordNumber",
    "diagnosis",
    "emergency_contact",
    "emergencyContact",
    "health_notes",
    "healthNotes",
];

static GLOBAL_SET: OnceLock<ProtectedKeySet> = OnceLock::new();

/// An immutable set of field names classified as protected.
///
/// The [`standard`](Self::standard) set is what the free functions in this
/// crate consult; [`from_keys`](Self::from_keys) exists for callers whose
/// backend exposes a different field list. Sets are never mutated after
/// construction.
#[derive(Clone, Debug)]
pub struct ProtectedKeySet {
    keys: HashSet<Cow<'static, str>>,
}

impl ProtectedKeySet {
    /// Builds a set from arbitrary key names.
    #[must_use]
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Cow<'static, str>>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the standard care-coordination set.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_keys(STANDARD_PROTECTED_KEYS.iter().copied())
    }

    /// Returns the process-wide standard set.
    ///
    /// Constructed on first access and read-only afterwards, so it can be
    /// consulted from any thread without coordination.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_SET.get_or_init(Self::standard)
    }

    /// Returns `true` when `key` is classified as protected.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when the set classifies nothing as protected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the member key names in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|key| key.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::{ProtectedKeySet, STANDARD_PROTECTED_KEYS};

    #[test]
    fn standard_set_contains_both_case_variants() {
        let set = ProtectedKeySet::standard();
        assert!(set.contains("phone_number"));
        assert!(set.contains("phoneNumber"));
        assert!(set.contains("due_date"));
        assert!(set.contains("dueDate"));
        assert!(set.contains("date_of_birth"));
        assert!(set.contains("dateOfBirth"));
    }

    #[test]
    fn standard_set_excludes_plain_identity_fields() {
        let set = ProtectedKeySet::standard();
        assert!(!set.contains("id"));
        assert!(!set.contains("firstName"));
        assert!(!set.contains("first_name"));
        assert!(!set.contains("status"));
    }

    #[test]
    fn matching_is_exact_not_normalized() {
        let set = ProtectedKeySet::standard();
        assert!(!set.contains("PHONE_NUMBER"));
        assert!(!set.contains("Phone_Number"));
        assert!(!set.contains("phone_number "));
    }

    #[test]
    fn standard_set_has_no_duplicate_entries() {
        let set = ProtectedKeySet::standard();
        assert_eq!(set.len(), STANDARD_PROTECTED_KEYS.len());
    }

    #[test]
    fn global_set_is_the_standard_set() {
        let global = ProtectedKeySet::global();
        let standard = ProtectedKeySet::standard();
        assert_eq!(global.len(), standard.len());
        assert!(standard.iter().all(|key| global.contains(key)));
    }

    #[test]
    fn custom_set_from_owned_and_static_keys() {
        let set = ProtectedKeySet::from_keys(["npi", "taxId"]);
        assert!(set.contains("npi"));
        assert!(set.contains("taxId"));
        assert!(!set.contains("email"));

        let owned = ProtectedKeySet::from_keys(vec!["fax".to_string()]);
        assert!(owned.contains("fax"));
    }

    #[test]
    fn empty_set_classifies_nothing() {
        let set = ProtectedKeySet::from_keys(Vec::<String>::new());
        assert!(set.is_empty());
        assert!(!set.contains("email"));
    }
}
