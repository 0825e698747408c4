// src/runtime/eligibility.rs
// ============================================================================
// Module: Hemogate Eligibility Evaluator
// Description: Fixed-order donor eligibility rule evaluation.
// Purpose: Convert a candidate snapshot into a deterministic verdict with itemized violations.
// Dependencies: crate::core, time
// ============================================================================

//! ## Overview
//! The evaluator runs every rule in fixed order without short-circuiting, so
//! multiple violations co-occur in one verdict and output order is stable
//! for snapshot testing. Missing required numeric fields fail closed as
//! violations; nothing here panics or returns `Err`. The current date is an
//! explicit parameter so the function stays pure and replayable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Date;

use crate::core::DonorCandidate;
use crate::core::EligibilityVerdict;
use crate::core::calendar::month_gap;

// ============================================================================
// SECTION: Rule Thresholds
// ============================================================================

/// Minimum donor age in whole years (inclusive).
pub const MIN_AGE_YEARS: i64 = 18;

/// Maximum donor age in whole years (inclusive).
pub const MAX_AGE_YEARS: i64 = 65;

/// Minimum donor weight in kilograms (inclusive).
pub const MIN_WEIGHT_KG: f64 = 50.0;

/// Minimum hemoglobin level in g/dL (inclusive), when reported.
pub const MIN_HEMOGLOBIN_G_DL: f64 = 12.5;

/// Minimum calendar months between donations (inclusive).
pub const MIN_DONATION_GAP_MONTHS: i64 = 3;

// ============================================================================
// SECTION: Rule Messages
// ============================================================================

/// Violation message for the age range rule.
pub const MSG_AGE_RANGE: &str = "Age must be between 18 and 65 years.";

/// Violation message for the minimum weight rule.
pub const MSG_MIN_WEIGHT: &str = "Weight must be at least 50 kg.";

/// Violation message for the minimum hemoglobin rule.
pub const MSG_MIN_HEMOGLOBIN: &str = "Hemoglobin must be at least 12.5 g/dL.";

/// Violation message for fever within the last seven days.
pub const MSG_RECENT_FEVER: &str = "Donors must not have had a fever in the last 7 days.";

/// Violation message for major surgery within the last six months.
pub const MSG_RECENT_SURGERY: &str = "Donors must not have had major surgery in the last 6 months.";

/// Violation message for a tattoo or piercing within the last six months.
pub const MSG_RECENT_TATTOO: &str =
    "Donors must not have gotten a tattoo or piercing in the last 6 months.";

/// Violation message for current antibiotic use.
pub const MSG_ON_ANTIBIOTICS: &str = "Donors must not currently be taking antibiotics.";

/// Violation message for pregnancy or breastfeeding.
pub const MSG_PREGNANT_OR_BREASTFEEDING: &str = "Donors must not be pregnant or breastfeeding.";

/// Violation message for an HIV diagnosis.
pub const MSG_HIV: &str = "Donors must not have HIV.";

/// Violation message for a hepatitis B or C diagnosis.
pub const MSG_HEPATITIS: &str = "Donors must not have hepatitis B or C.";

/// Violation message for a heart disease diagnosis.
pub const MSG_HEART_DISEASE: &str = "Donors must not have heart disease.";

/// Violation message for a diabetes diagnosis.
pub const MSG_DIABETES: &str = "Donors must not have diabetes.";

/// Violation message for a high blood pressure diagnosis.
pub const MSG_HIGH_BLOOD_PRESSURE: &str = "Donors must not have high blood pressure.";

/// Violation message for an insufficient donation gap.
pub const MSG_DONATION_GAP: &str = "At least 3 months must have passed since the last donation.";

// ============================================================================
// SECTION: Eligibility Evaluator
// ============================================================================

/// Evaluates donor candidates against the fixed eligibility rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEvaluator;

impl EligibilityEvaluator {
    /// Creates a new eligibility evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates a candidate snapshot against every rule in fixed order.
    ///
    /// `now` must be supplied by the caller; the evaluator never reads
    /// wall-clock time. Malformed input degrades to violations, never an
    /// error. Consent is not part of the rule list; callers gate submission
    /// on [`EligibilityVerdict::can_submit`] separately.
    #[must_use]
    pub fn evaluate(&self, candidate: &DonorCandidate, now: Date) -> EligibilityVerdict {
        let mut violations = Vec::new();

        // Rule 1: age range. Missing input fails closed.
        let age_ok = candidate
            .age
            .is_some_and(|age| (MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age));
        if !age_ok {
            violations.push(MSG_AGE_RANGE.to_string());
        }

        // Rule 2: minimum weight. Missing input fails closed.
        let weight_ok = candidate.weight_kg.is_some_and(|weight| weight >= MIN_WEIGHT_KG);
        if !weight_ok {
            violations.push(MSG_MIN_WEIGHT.to_string());
        }

        // Rule 3: minimum hemoglobin. Omission disables the rule; this is
        // the one genuine not-applicable state among the numeric rules.
        if let Some(hemoglobin) = candidate.hemoglobin_g_dl
            && hemoglobin < MIN_HEMOGLOBIN_G_DL
        {
            violations.push(MSG_MIN_HEMOGLOBIN.to_string());
        }

        // Rules 4-8: health condition exclusions, each checked independently.
        if candidate.health.fever_in_last_7_days {
            violations.push(MSG_RECENT_FEVER.to_string());
        }
        if candidate.health.major_surgery_in_last_6_months {
            violations.push(MSG_RECENT_SURGERY.to_string());
        }
        if candidate.health.tattoo_or_piercing_in_last_6_months {
            violations.push(MSG_RECENT_TATTOO.to_string());
        }
        if candidate.health.currently_on_antibiotics {
            violations.push(MSG_ON_ANTIBIOTICS.to_string());
        }
        if candidate.health.pregnant_or_breastfeeding {
            violations.push(MSG_PREGNANT_OR_BREASTFEEDING.to_string());
        }

        // Rules 9-13: medical history exclusions, same pattern.
        if candidate.medical_history.hiv {
            violations.push(MSG_HIV.to_string());
        }
        if candidate.medical_history.hepatitis_b_or_c {
            violations.push(MSG_HEPATITIS.to_string());
        }
        if candidate.medical_history.heart_disease {
            violations.push(MSG_HEART_DISEASE.to_string());
        }
        if candidate.medical_history.diabetes {
            violations.push(MSG_DIABETES.to_string());
        }
        if candidate.medical_history.high_blood_pressure {
            violations.push(MSG_HIGH_BLOOD_PRESSURE.to_string());
        }

        // Rule 14: donation interval, from year/month fields only. A prior
        // donation with no recorded date skips the rule.
        if candidate.donation_history.ever_donated
            && let Some(last) = candidate.donation_history.last_donation_date
            && month_gap(last, now) < MIN_DONATION_GAP_MONTHS
        {
            violations.push(MSG_DONATION_GAP.to_string());
        }

        EligibilityVerdict::new(violations)
    }
}
