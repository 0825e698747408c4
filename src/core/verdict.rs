// src/core/verdict.rs
// ============================================================================
// Module: Hemogate Eligibility Verdict
// Description: Pass/fail eligibility outcome with itemized violations.
// Purpose: Provide a stable, snapshot-testable verdict structure.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`EligibilityVerdict`] carries the overall pass/fail outcome together
//! with every violated rule, in fixed rule order. Violation strings are
//! display-ready; callers wanting localization map each message to their own
//! stable key at the presentation layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Eligibility Verdict
// ============================================================================

/// Outcome of evaluating a donor candidate against the eligibility rules.
///
/// # Invariants
/// - `is_eligible` is true exactly when `violations` is empty.
/// - Violations appear in fixed rule order; output is stable across calls
///   with equal input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// Whether the candidate passed every applicable rule.
    is_eligible: bool,
    /// Violated rule messages in fixed rule order.
    violations: Vec<String>,
}

impl EligibilityVerdict {
    /// Creates a verdict from the ordered violation list.
    #[must_use]
    pub fn new(violations: Vec<String>) -> Self {
        Self {
            is_eligible: violations.is_empty(),
            violations,
        }
    }

    /// Returns whether the candidate passed every applicable rule.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.is_eligible
    }

    /// Returns the violated rule messages in fixed rule order.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Returns whether registration may be submitted.
    ///
    /// Consent is a separate submission gate owned by the caller; it is
    /// never folded into the violation list or [`Self::is_eligible`].
    #[must_use]
    pub const fn can_submit(&self, consent_given: bool) -> bool {
        self.is_eligible && consent_given
    }
}
