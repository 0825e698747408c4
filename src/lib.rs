// src/lib.rs
// ============================================================================
// Module: Hemogate Core Library
// Description: Public API surface for the Hemogate decision core.
// Purpose: Expose donor eligibility and access gating types and evaluators.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Hemogate core provides the two deterministic decision components of the
//! donor/hospital/blood-bank coordination platform: donor eligibility rule
//! evaluation and verification-gated access control. Both are pure,
//! stateless functions over caller-supplied snapshots; rendering, session
//! ownership, and navigation remain host responsibilities.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::AccessDecision;
pub use self::core::DonationHistory;
pub use self::core::DonorCandidate;
pub use self::core::EligibilityVerdict;
pub use self::core::HealthFlags;
pub use self::core::MedicalHistoryFlags;
pub use self::core::Principal;
pub use self::core::Role;
pub use self::core::RoleParseError;
pub use self::core::RoutePath;
pub use self::core::RoutePathError;
pub use self::core::VerificationStatus;
pub use self::core::VerificationStatusParseError;
pub use self::core::role_dashboard_path;
pub use runtime::AccessGate;
pub use runtime::EligibilityEvaluator;
pub use runtime::RouteTable;
