// src/core/calendar.rs
// ============================================================================
// Module: Hemogate Calendar Arithmetic
// Description: Age derivation and calendar month gap computation.
// Purpose: Provide deterministic date arithmetic matching the platform's derivations.
// Dependencies: time
// ============================================================================

//! ## Overview
//! The core never reads wall-clock time; callers inject `now` explicitly.
//! Both helpers replicate the platform's exact derivations: age decrements
//! the naive year difference when the current month/day precedes the birth
//! month/day, and the donation gap counts whole calendar months from
//! year/month fields only, ignoring day-of-month.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Date;

// ============================================================================
// SECTION: Age Derivation
// ============================================================================

/// Returns the age in whole years on the given date.
///
/// Computed as the year difference, decremented when `now`'s month/day
/// precedes the birth month/day. Dates of birth in the future yield a
/// negative age; the eligibility range check fails such values closed.
#[must_use]
pub fn age_on(birth: Date, now: Date) -> i64 {
    let mut age = i64::from(now.year()) - i64::from(birth.year());
    let now_month_day = (u8::from(now.month()), now.day());
    let birth_month_day = (u8::from(birth.month()), birth.day());
    if now_month_day < birth_month_day {
        age -= 1;
    }
    age
}

// ============================================================================
// SECTION: Month Gap
// ============================================================================

/// Returns the calendar month gap between two dates.
///
/// Computed from year and month fields only: a gap straddling part of a
/// month boundary still counts as a full month difference. Negative when
/// `last` is after `now`.
#[must_use]
pub fn month_gap(last: Date, now: Date) -> i64 {
    let years = i64::from(now.year()) - i64::from(last.year());
    let months = i64::from(u8::from(now.month())) - i64::from(u8::from(last.month()));
    years * 12 + months
}
