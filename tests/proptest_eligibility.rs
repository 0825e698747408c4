// tests/proptest_eligibility.rs
// ============================================================================
// Module: Eligibility Property-Based Tests
// Description: Property tests for verdict invariants across wide input ranges.
// Purpose: Detect invariant violations and instability under arbitrary candidates.
// ============================================================================

//! Property-based tests for eligibility evaluation invariants.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions and helpers are permitted."
)]

use hemogate_core::DonationHistory;
use hemogate_core::DonorCandidate;
use hemogate_core::EligibilityEvaluator;
use hemogate_core::HealthFlags;
use hemogate_core::MedicalHistoryFlags;
use hemogate_core::runtime::eligibility::MSG_AGE_RANGE;
use hemogate_core::runtime::eligibility::MSG_DIABETES;
use hemogate_core::runtime::eligibility::MSG_DONATION_GAP;
use hemogate_core::runtime::eligibility::MSG_HEART_DISEASE;
use hemogate_core::runtime::eligibility::MSG_HEPATITIS;
use hemogate_core::runtime::eligibility::MSG_HIGH_BLOOD_PRESSURE;
use hemogate_core::runtime::eligibility::MSG_HIV;
use hemogate_core::runtime::eligibility::MSG_MIN_HEMOGLOBIN;
use hemogate_core::runtime::eligibility::MSG_MIN_WEIGHT;
use hemogate_core::runtime::eligibility::MSG_ON_ANTIBIOTICS;
use hemogate_core::runtime::eligibility::MSG_PREGNANT_OR_BREASTFEEDING;
use hemogate_core::runtime::eligibility::MSG_RECENT_FEVER;
use hemogate_core::runtime::eligibility::MSG_RECENT_SURGERY;
use hemogate_core::runtime::eligibility::MSG_RECENT_TATTOO;
use proptest::prelude::*;
use time::Date;
use time::macros::date;

/// Fixed evaluation date shared by every case.
const NOW: Date = date!(2026 - 08 - 24);

/// Every rule message in canonical rule order.
const RULE_ORDER: [&str; 14] = [
    MSG_AGE_RANGE,
    MSG_MIN_WEIGHT,
    MSG_MIN_HEMOGLOBIN,
    MSG_RECENT_FEVER,
    MSG_RECENT_SURGERY,
    MSG_RECENT_TATTOO,
    MSG_ON_ANTIBIOTICS,
    MSG_PREGNANT_OR_BREASTFEEDING,
    MSG_HIV,
    MSG_HEPATITIS,
    MSG_HEART_DISEASE,
    MSG_DIABETES,
    MSG_HIGH_BLOOD_PRESSURE,
    MSG_DONATION_GAP,
];

/// Builds health flags from a boolean array.
const fn health_flags(flags: [bool; 5]) -> HealthFlags {
    HealthFlags {
        fever_in_last_7_days: flags[0],
        major_surgery_in_last_6_months: flags[1],
        tattoo_or_piercing_in_last_6_months: flags[2],
        currently_on_antibiotics: flags[3],
        pregnant_or_breastfeeding: flags[4],
    }
}

/// Builds medical history flags from a boolean array.
const fn history_flags(flags: [bool; 5]) -> MedicalHistoryFlags {
    MedicalHistoryFlags {
        hiv: flags[0],
        hepatitis_b_or_c: flags[1],
        heart_disease: flags[2],
        diabetes: flags[3],
        high_blood_pressure: flags[4],
    }
}

/// Strategy over donation dates within a few decades of the fixed now.
fn donation_date_strategy() -> impl Strategy<Value = Date> {
    // Julian day range covering roughly 1995 through 2050.
    (2_450_000_i32..2_470_000).prop_map(|day| Date::from_julian_day(day).unwrap())
}

/// Strategy over arbitrary candidate snapshots, malformed input included.
fn candidate_strategy() -> impl Strategy<Value = DonorCandidate> {
    (
        proptest::option::of(-200_i64..200),
        proptest::option::of(0.0_f64..500.0),
        proptest::option::of(0.0_f64..30.0),
        any::<[bool; 5]>(),
        any::<[bool; 5]>(),
        any::<bool>(),
        proptest::option::of(donation_date_strategy()),
        any::<bool>(),
    )
        .prop_map(
            |(age, weight_kg, hemoglobin_g_dl, health, history, ever_donated, last, consent)| {
                DonorCandidate {
                    age,
                    weight_kg,
                    hemoglobin_g_dl,
                    health: health_flags(health),
                    medical_history: history_flags(history),
                    donation_history: DonationHistory {
                        ever_donated,
                        last_donation_date: last,
                    },
                    consent_given: consent,
                }
            },
        )
}

proptest! {
    #[test]
    fn eligible_region_always_passes(
        age in 18_i64..=65,
        weight in 50.0_f64..300.0,
        hemoglobin in proptest::option::of(12.5_f64..25.0),
        consent in any::<bool>(),
    ) {
        let candidate = DonorCandidate {
            age: Some(age),
            weight_kg: Some(weight),
            hemoglobin_g_dl: hemoglobin,
            consent_given: consent,
            ..DonorCandidate::default()
        };
        let verdict = EligibilityEvaluator::new().evaluate(&candidate, NOW);

        prop_assert!(verdict.is_eligible());
        prop_assert!(verdict.violations().is_empty());
    }

    #[test]
    fn violation_count_equals_true_flag_count(
        health in any::<[bool; 5]>(),
        history in any::<[bool; 5]>(),
    ) {
        let candidate = DonorCandidate {
            age: Some(30),
            weight_kg: Some(70.0),
            health: health_flags(health),
            medical_history: history_flags(history),
            ..DonorCandidate::default()
        };
        let verdict = EligibilityEvaluator::new().evaluate(&candidate, NOW);

        let true_flags =
            health.iter().filter(|flag| **flag).count()
                + history.iter().filter(|flag| **flag).count();
        prop_assert_eq!(verdict.violations().len(), true_flags);
        prop_assert_eq!(verdict.is_eligible(), true_flags == 0);
    }

    #[test]
    fn verdict_invariant_holds_for_arbitrary_input(candidate in candidate_strategy()) {
        let verdict = EligibilityEvaluator::new().evaluate(&candidate, NOW);

        prop_assert_eq!(verdict.is_eligible(), verdict.violations().is_empty());
    }

    #[test]
    fn violations_follow_canonical_rule_order(candidate in candidate_strategy()) {
        let verdict = EligibilityEvaluator::new().evaluate(&candidate, NOW);

        let mut last_index = None;
        for violation in verdict.violations() {
            let index = RULE_ORDER
                .iter()
                .position(|message| message == violation)
                .expect("violation must match a known rule message");
            if let Some(previous) = last_index {
                prop_assert!(index > previous, "violations out of rule order");
            }
            last_index = Some(index);
        }
    }

    #[test]
    fn evaluation_is_idempotent(candidate in candidate_strategy()) {
        let evaluator = EligibilityEvaluator::new();

        prop_assert_eq!(
            evaluator.evaluate(&candidate, NOW),
            evaluator.evaluate(&candidate, NOW)
        );
    }

    #[test]
    fn consent_never_changes_the_verdict(candidate in candidate_strategy()) {
        let evaluator = EligibilityEvaluator::new();
        let mut flipped = candidate;
        flipped.consent_given = !candidate.consent_given;

        prop_assert_eq!(evaluator.evaluate(&candidate, NOW), evaluator.evaluate(&flipped, NOW));
    }
}
