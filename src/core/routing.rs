// src/core/routing.rs
// ============================================================================
// Module: Hemogate Routing Types
// Description: Route paths and tagged access decisions.
// Purpose: Provide the decision contract between the gate and the routing collaborator.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Route paths are opaque string identifiers; the routing collaborator owns
//! their meaning. An [`AccessDecision`] is the gate's verdict for a single
//! navigation attempt: render, redirect, or hold while the session resolves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::principal::Role;

// ============================================================================
// SECTION: Route Path
// ============================================================================

/// Opaque route path identifier.
///
/// Paths are not validated at construction; [`FromStr`] validates untrusted
/// strings at ingestion boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// Creates a new route path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RoutePath {
    type Err = RoutePathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(RoutePathError::Empty);
        }
        if !value.starts_with('/') {
            return Err(RoutePathError::MissingLeadingSlash(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }
}

/// Error returned when parsing a route path from an untrusted string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePathError {
    /// The path string was empty.
    #[error("route path is empty")]
    Empty,
    /// The path did not start with `/`.
    #[error("route path `{0}` does not start with `/`")]
    MissingLeadingSlash(String),
}

// ============================================================================
// SECTION: Access Decision
// ============================================================================

/// Gate verdict for a single navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Session resolution is still in flight; render neither protected
    /// content nor a redirect.
    Pending,
    /// Render the requested destination.
    Allow,
    /// Navigate to the target path instead.
    Redirect(RoutePath),
}

impl AccessDecision {
    /// Returns whether the decision grants access to the requested path.
    #[must_use]
    pub const fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target when the decision is a redirect.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<&RoutePath> {
        match self {
            Self::Redirect(target) => Some(target),
            Self::Pending | Self::Allow => None,
        }
    }
}

// ============================================================================
// SECTION: Role Dashboards
// ============================================================================

/// Returns the dashboard path for a role.
///
/// The gate consults only the organization entries; the donor and admin
/// dashboards are provided for the routing collaborator's default landing.
#[must_use]
pub fn role_dashboard_path(role: Role) -> RoutePath {
    match role {
        Role::Donor => RoutePath::new("/donor/dashboard"),
        Role::Hospital => RoutePath::new("/hospital/dashboard"),
        Role::BloodBank => RoutePath::new("/blood-bank/dashboard"),
        Role::Admin => RoutePath::new("/admin/dashboard"),
    }
}
