// src/core/principal.rs
// ============================================================================
// Module: Hemogate Principal Model
// Description: Session principal, role, and verification status types.
// Purpose: Provide the read-only identity snapshot consumed per navigation attempt.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`Principal`] is the identity snapshot the session collaborator supplies
//! for one navigation attempt. The access gate reads it and never mutates or
//! caches it; the session collaborator is the sole writer.
//!
//! Roles and verification statuses have stable string forms matching the
//! remote service layer's payloads, exposed through `Display`, `FromStr`,
//! and serde.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Roles
// ============================================================================

/// Principal role within the coordination platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Individual donor account.
    Donor,
    /// Hospital organization account.
    Hospital,
    /// Blood bank organization account.
    BloodBank,
    /// Platform administrator account.
    Admin,
}

impl Role {
    /// Returns whether this role is subject to organization verification.
    #[must_use]
    pub const fn requires_verification(&self) -> bool {
        matches!(self, Self::Hospital | Self::BloodBank)
    }

    /// Returns the stable string form of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Hospital => "hospital",
            Self::BloodBank => "blood-bank",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "donor" => Ok(Self::Donor),
            "hospital" => Ok(Self::Hospital),
            "blood-bank" => Ok(Self::BloodBank),
            "admin" => Ok(Self::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Error returned when a role string is unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role `{0}`")]
pub struct RoleParseError(pub String);

// ============================================================================
// SECTION: Verification Status
// ============================================================================

/// Per-organization approval state gating dashboard access.
///
/// Meaningful only for [`Role::Hospital`] and [`Role::BloodBank`]; the gate
/// ignores it for other roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Verification submitted and awaiting review.
    Pending,
    /// Verification approved; dashboards are reachable.
    Approved,
    /// Verification rejected.
    Rejected,
}

impl VerificationStatus {
    /// Returns the stable string form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = VerificationStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(VerificationStatusParseError(other.to_string())),
        }
    }
}

/// Error returned when a verification status string is unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized verification status `{0}`")]
pub struct VerificationStatusParseError(pub String);

// ============================================================================
// SECTION: Principal Snapshot
// ============================================================================

/// Identity snapshot consumed by the access gate for one navigation attempt.
///
/// # Invariants
/// - Owned and mutated only by the session collaborator; the gate treats it
///   as read-only and caches nothing between calls.
/// - `verification_status` is meaningful only when
///   [`Role::requires_verification`] is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Whether session resolution has completed.
    pub resolved: bool,
    /// Whether the principal is authenticated.
    pub authenticated: bool,
    /// Principal role.
    pub role: Role,
    /// Organization verification state.
    pub verification_status: VerificationStatus,
}
