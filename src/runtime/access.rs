// src/runtime/access.rs
// ============================================================================
// Module: Hemogate Access Gate
// Description: Verification-gated access control decision chain.
// Purpose: Decide allow/redirect for every navigation attempt deterministically.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The gate evaluates an ordered decision chain over a read-only principal
//! snapshot; the first matching rule wins. There is no stored state: every
//! navigation attempt re-derives the outcome from the snapshot and the
//! requested path. Anything not explicitly allowed redirects, never falls
//! through to access.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::AccessDecision;
use crate::core::Principal;
use crate::core::Role;
use crate::core::RoutePath;
use crate::core::VerificationStatus;
use crate::core::role_dashboard_path;

// ============================================================================
// SECTION: Route Table
// ============================================================================

/// Well-known redirect targets used by the decision chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    /// Login screen for unauthenticated principals.
    pub login: RoutePath,
    /// Home screen for role mismatches.
    pub home: RoutePath,
    /// Holding screen for unverified organizations.
    pub verification_pending: RoutePath,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            login: RoutePath::new("/login"),
            home: RoutePath::new("/"),
            verification_pending: RoutePath::new("/verification-pending"),
        }
    }
}

// ============================================================================
// SECTION: Access Gate
// ============================================================================

/// Decides access for navigation attempts using an ordered rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessGate {
    /// Redirect targets consulted by the decision chain.
    routes: RouteTable,
}

impl AccessGate {
    /// Creates a new access gate with the provided route table.
    #[must_use]
    pub const fn new(routes: RouteTable) -> Self {
        Self {
            routes,
        }
    }

    /// Returns the active route table.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decides the outcome of one navigation attempt.
    ///
    /// Rules are evaluated top to bottom; the first match wins:
    ///
    /// 1. Unresolved session: hold ([`AccessDecision::Pending`]).
    /// 2. Unauthenticated: redirect to login.
    /// 3. Organization roles: unverified principals are pinned to the
    ///    pending screen; verified principals are bounced off it to their
    ///    dashboard.
    /// 4. Required role mismatch: redirect home. Runs strictly after the
    ///    verification gate.
    /// 5. Otherwise: allow.
    #[must_use]
    pub fn decide(
        &self,
        principal: &Principal,
        requested: &RoutePath,
        required_role: Option<Role>,
    ) -> AccessDecision {
        if !principal.resolved {
            return AccessDecision::Pending;
        }

        if !principal.authenticated {
            return AccessDecision::Redirect(self.routes.login.clone());
        }

        if principal.role.requires_verification() {
            let approved = principal.verification_status == VerificationStatus::Approved;
            let at_pending_screen = requested == &self.routes.verification_pending;

            if !approved && !at_pending_screen {
                return AccessDecision::Redirect(self.routes.verification_pending.clone());
            }
            if approved && at_pending_screen {
                return AccessDecision::Redirect(role_dashboard_path(principal.role));
            }
        }

        if let Some(required) = required_role
            && principal.role != required
        {
            return AccessDecision::Redirect(self.routes.home.clone());
        }

        AccessDecision::Allow
    }
}
