// SPDX-License-Identifier: MIT OR Apache-2.0

//! When a declared default replaces a looked-up value.

use crate::domain::scalar::ScalarValue;

/// Decides when a property's default replaces the looked-up value.
///
/// With [`FallbackPolicy::Unparseable`] an explicit `false`, `0` or empty
/// string is kept. [`FallbackPolicy::UnparseableOrFalsy`] treats those falsy
/// values like a missing variable whenever a default is declared; without a
/// default the falsy value is still returned.
///
/// # Examples
///
/// ```
/// use envschema::domain::{FallbackPolicy, ScalarValue};
///
/// let explicit_off = ScalarValue::Boolean(false);
/// assert!(!FallbackPolicy::Unparseable.prefers_default(&explicit_off));
/// assert!(FallbackPolicy::UnparseableOrFalsy.prefers_default(&explicit_off));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Use the default only for a missing or malformed value.
    #[default]
    Unparseable,
    /// Also use the default for a parsed falsy value.
    UnparseableOrFalsy,
}

impl FallbackPolicy {
    /// Returns `true` if a successfully parsed value should still give way to
    /// a declared default.
    pub fn prefers_default(&self, parsed: &ScalarValue) -> bool {
        match self {
            FallbackPolicy::Unparseable => false,
            FallbackPolicy::UnparseableOrFalsy => parsed.is_falsy(),
        }
    }
}
