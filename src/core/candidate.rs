// src/core/candidate.rs
// ============================================================================
// Module: Hemogate Donor Candidate
// Description: Self-reported donor attributes consumed by eligibility rules.
// Purpose: Provide the canonical candidate snapshot rebuilt per form session.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! A [`DonorCandidate`] is a point-in-time snapshot of a registration form.
//! The registration collaborator rebuilds it on every field mutation and
//! re-evaluates it in full; no state is carried between evaluations.
//!
//! Required numeric fields use `Option` so that missing or non-numeric form
//! input degrades to `None` and fails closed at evaluation time. Hemoglobin
//! is the one genuinely optional field: `None` disables its rule entirely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::Date;

// ============================================================================
// SECTION: Candidate Snapshot
// ============================================================================

/// Self-reported donor attributes evaluated by the eligibility rule set.
///
/// # Invariants
/// - Snapshots are read-only inputs; evaluation never mutates them.
/// - `consent_given` is a submission gate enforced by the caller and is not
///   part of the violation rule list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DonorCandidate {
    /// Age in whole years, derived externally from date of birth.
    /// `None` covers both missing and non-numeric form input.
    pub age: Option<i64>,
    /// Body weight in kilograms. `None` covers missing and non-numeric input.
    pub weight_kg: Option<f64>,
    /// Hemoglobin level in g/dL. `None` means the field was omitted and the
    /// hemoglobin rule is not applicable.
    pub hemoglobin_g_dl: Option<f64>,
    /// Recent health condition flags.
    pub health: HealthFlags,
    /// Chronic medical history flags.
    pub medical_history: MedicalHistoryFlags,
    /// Prior donation record.
    pub donation_history: DonationHistory,
    /// Whether the candidate consented to donation terms.
    pub consent_given: bool,
}

// ============================================================================
// SECTION: Exclusion Flags
// ============================================================================

/// Recent health conditions that each independently exclude donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthFlags {
    /// Fever within the last seven days.
    pub fever_in_last_7_days: bool,
    /// Major surgery within the last six months.
    pub major_surgery_in_last_6_months: bool,
    /// Tattoo or piercing within the last six months.
    pub tattoo_or_piercing_in_last_6_months: bool,
    /// Currently taking antibiotics.
    pub currently_on_antibiotics: bool,
    /// Currently pregnant or breastfeeding.
    pub pregnant_or_breastfeeding: bool,
}

/// Medical history conditions that each independently exclude donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedicalHistoryFlags {
    /// HIV diagnosis.
    pub hiv: bool,
    /// Hepatitis B or C diagnosis.
    pub hepatitis_b_or_c: bool,
    /// Heart disease diagnosis.
    pub heart_disease: bool,
    /// Diabetes diagnosis.
    pub diabetes: bool,
    /// High blood pressure diagnosis.
    pub high_blood_pressure: bool,
}

// ============================================================================
// SECTION: Donation History
// ============================================================================

/// Prior donation record used by the donation-interval rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DonationHistory {
    /// Whether the candidate has donated before.
    pub ever_donated: bool,
    /// Date of the most recent donation, when recorded.
    pub last_donation_date: Option<Date>,
}
