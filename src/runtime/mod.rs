// src/runtime/mod.rs
// ============================================================================
// Module: Hemogate Runtime
// Description: Eligibility and access gate evaluators.
// Purpose: Evaluate core snapshots into verdicts and access decisions deterministically.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime holds the two decision functions. Both are synchronous,
//! allocation-light, and stateless: every call derives its result entirely
//! from the supplied snapshot.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod access;
pub mod eligibility;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use access::AccessGate;
pub use access::RouteTable;
pub use eligibility::EligibilityEvaluator;
