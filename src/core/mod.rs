// src/core/mod.rs
// ============================================================================
// Module: Hemogate Core Types
// Description: Canonical donor, principal, and routing decision structures.
// Purpose: Provide stable, serializable types for eligibility and access decisions.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Hemogate core types define the donor candidate snapshot, the eligibility
//! verdict, the session principal, and routing decision values. These types
//! are the canonical contract between the decision core and the surrounding
//! registration and routing collaborators.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod calendar;
pub mod candidate;
pub mod principal;
pub mod routing;
pub mod verdict;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use candidate::DonationHistory;
pub use candidate::DonorCandidate;
pub use candidate::HealthFlags;
pub use candidate::MedicalHistoryFlags;
pub use principal::Principal;
pub use principal::Role;
pub use principal::RoleParseError;
pub use principal::VerificationStatus;
pub use principal::VerificationStatusParseError;
pub use routing::AccessDecision;
pub use routing::RoutePath;
pub use routing::RoutePathError;
pub use routing::role_dashboard_path;
pub use verdict::EligibilityVerdict;
