//! The fixed candidate intake form.

use std::collections::HashMap;

/// The six candidate attributes collected before the tech stack, in
/// the order they are asked for.
pub const FIELDS: [&str; 6] = [
    "Full Name",
    "Email Address",
    "Phone Number",
    "Years of Experience",
    "Desired Position(s)",
    "Current Location",
];

/// The label the declared tech stack is recorded under.
pub const TECH_STACK_FIELD: &str = "Tech Stack";

/// The values the candidate has provided, keyed by field label.
///
/// Values are stored verbatim as typed, empty strings included. There
/// is no validation and no coercion.
#[derive(Clone, Default, Debug)]
pub struct CandidateRecord {
    values: HashMap<&'static str, String>,
}

impl CandidateRecord {
    pub(crate) fn insert(
        &mut self,
        field: &'static str,
        value: impl Into<String>,
    ) {
        self.values.insert(field, value.into());
    }

    /// Returns the recorded value for a field label, if any.
    #[inline]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Returns the number of recorded values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
