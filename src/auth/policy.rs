//! Path-pattern access policy.
//!
//! An ordered list of request guards evaluated ahead of routing dispatch.
//! The first rule whose pattern matches the request path decides; later
//! rules are never consulted, so specific patterns must precede the
//! catch-all.

use crate::auth::session::Principal;
use crate::member::Role;

/// Outcome of evaluating the policy for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Continue to the routing layer.
    Permit,
    /// Anonymous request against a protected path; send to login.
    RequireLogin,
    /// Authenticated but the role is insufficient.
    Forbidden,
}

/// A single path-pattern rule.
#[derive(Debug, Clone)]
struct AccessRule {
    pattern: String,
    /// `None` permits unauthenticated access.
    required: Option<Role>,
}

impl AccessRule {
    /// Match a request path against this rule's pattern.
    ///
    /// A trailing `/**` matches the prefix and everything below it;
    /// any other pattern must match exactly.
    fn matches(&self, path: &str) -> bool {
        if let Some(prefix) = self.pattern.strip_suffix("/**") {
            prefix.is_empty() || path == prefix || path.starts_with(&format!("{prefix}/"))
        } else {
            self.pattern == path
        }
    }
}

/// Ordered path-pattern access policy.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    /// Create an empty policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule permitting unauthenticated access to the pattern.
    pub fn permit(mut self, pattern: impl Into<String>) -> Self {
        self.rules.push(AccessRule {
            pattern: pattern.into(),
            required: None,
        });
        self
    }

    /// Append a rule requiring at least the given role for the pattern.
    pub fn require(mut self, pattern: impl Into<String>, role: Role) -> Self {
        self.rules.push(AccessRule {
            pattern: pattern.into(),
            required: Some(role),
        });
        self
    }

    /// The deployed policy: the post-detail read page needs an
    /// authenticated member, everything else defaults to open.
    pub fn standard() -> Self {
        Self::new()
            .require("/board/read", Role::User)
            .permit("/**")
    }

    /// Evaluate the policy for a path and the resolved principal.
    ///
    /// Paths matched by no rule require authentication.
    pub fn evaluate(&self, path: &str, principal: Option<&Principal>) -> AccessDecision {
        for rule in &self.rules {
            if !rule.matches(path) {
                continue;
            }
            return match rule.required {
                None => AccessDecision::Permit,
                Some(required) => match principal {
                    None => AccessDecision::RequireLogin,
                    Some(p) if p.role.can_access(required) => AccessDecision::Permit,
                    Some(_) => AccessDecision::Forbidden,
                },
            };
        }
        AccessDecision::RequireLogin
    }
}
