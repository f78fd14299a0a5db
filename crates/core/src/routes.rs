//! Static route classification.

use crate::role::Role;

/// Login route for unauthenticated callers.
pub const LOGIN_PATH: &str = "/auth/login";

/// Destination for authenticated callers lacking the required role.
/// Distinct from [`LOGIN_PATH`] by contract: the caller is a valid, known
/// identity, just not permitted here.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Access required by a route subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No check and no backend call.
    Public,
    /// Only callers resolving to this role may view the subtree.
    Requires(Role),
}

/// Mapping from path prefix to required access, fixed before the guard
/// runs. The first matching prefix wins; prefixes match on whole path
/// segments, and unmatched paths are public.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<(&'static str, Access)>,
}

impl RouteTable {
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = (&'static str, Access)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Classify `path` against the table.
    #[must_use]
    pub fn classify(&self, path: &str) -> Access {
        self.rules
            .iter()
            .find(|(prefix, _)| prefix_matches(prefix, path))
            .map_or(Access::Public, |(_, access)| *access)
    }
}

impl Default for RouteTable {
    /// The Ward route map: the preceptor and facilitator subtrees are
    /// role-gated, everything else (landing, auth and error pages) is
    /// public.
    fn default() -> Self {
        Self::new([
            ("/preceptor", Access::Requires(Role::Preceptor)),
            ("/facilitator", Access::Requires(Role::Facilitator)),
        ])
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
