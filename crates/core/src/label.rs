// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient parsing of display labels
//!
//! Roles, statuses and choices can be written as their display label
//! ("Pending Dept. Head"), their variant name ("PendingDeptHead") or a
//! kebab alias ("pending-dept-head"). All of these reduce to the same key.

use thiserror::Error;

/// A label that did not match any variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}' (expected one of: {})", .expected.join(", "))]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Reduce a label to lowercase alphanumerics
pub(crate) fn key(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Find the variant whose label or aliases reduce to the same key as `value`
pub(crate) fn lookup<T: Copy>(
    kind: &'static str,
    value: &str,
    expected: &'static [&'static str],
    table: &[(T, &[&str])],
) -> Result<T, ParseError> {
    let wanted = key(value);
    table
        .iter()
        .find(|(_, names)| !wanted.is_empty() && names.iter().any(|n| key(n) == wanted))
        .map(|(variant, _)| *variant)
        .ok_or_else(|| ParseError {
            kind,
            value: value.to_string(),
            expected,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_strips_punctuation_and_case() {
        assert_eq!(key("Pending Dept. Head"), "pendingdepthead");
        assert_eq!(key("pending-dept-head"), "pendingdepthead");
        assert_eq!(key("PendingDeptHead"), "pendingdepthead");
    }

    #[test]
    fn lookup_rejects_empty_input() {
        let table: &[(u8, &[&str])] = &[(1, &["one"])];
        let err = lookup("number", "  ", &["one"], table).unwrap_err();
        assert_eq!(err.kind, "number");
        assert!(err.to_string().contains("expected one of: one"));
    }
}
