//! Ordered route table with first-match-wins dispatch.
//!
//! Patterns are either exact paths (`/dashboard`) or module prefixes
//! (`/discovery/*`). A prefix pattern claims its base path and everything
//! below it at a segment boundary, and hands the rest of the path to the
//! page as `remainder` so module pages can do their own sub-routing.
//!
//! The builder rejects tables whose declaration order would make an entry
//! unreachable, so in any table that builds, a literal path that is also
//! covered by a wildcard resolves to the literal.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Maximum number of redirects followed while resolving one path.
pub const MAX_REDIRECTS: usize = 8;

/// Normalize a URL path: leading slash added, trailing slashes dropped.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// Whether `path` equals `base` or lies below it at a segment boundary.
///
/// Both arguments are expected to be normalized.
#[must_use]
pub fn is_under(path: &str, base: &str) -> bool {
    if base == "/" {
        return path.starts_with('/');
    }
    path.strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// A route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches one path exactly.
    Exact(String),
    /// Matches a base path and every path below it (`/base/*`).
    Prefix(String),
}

impl RoutePattern {
    /// Parse a pattern such as `/dashboard` or `/discovery/*`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let raw = pattern.trim();
        if !raw.starts_with('/') {
            return Err(Error::InvalidRoutePattern(format!(
                "'{raw}' must start with '/'"
            )));
        }

        if let Some(base) = raw.strip_suffix("/*") {
            if base.contains('*') {
                return Err(Error::InvalidRoutePattern(format!(
                    "'{raw}' may only contain a trailing wildcard"
                )));
            }
            return Ok(Self::Prefix(normalize_path(base)));
        }

        if raw.contains('*') {
            return Err(Error::InvalidRoutePattern(format!(
                "'{raw}' may only contain a trailing wildcard"
            )));
        }

        Ok(Self::Exact(normalize_path(raw)))
    }

    /// Match a normalized path, returning the unmatched remainder.
    ///
    /// The remainder is empty for exact matches and for a prefix pattern
    /// matched at its own base path.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<String> {
        match self {
            Self::Exact(exact) => (exact == path).then(String::new),
            Self::Prefix(base) => {
                if !is_under(path, base) {
                    return None;
                }
                let rest = if base == "/" {
                    path
                } else {
                    &path[base.len()..]
                };
                Some(rest.trim_start_matches('/').to_string())
            }
        }
    }

    /// Whether every path this pattern matches is also matched by `self`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Exact(_), Self::Prefix(_)) => false,
            (Self::Prefix(base), Self::Exact(path) | Self::Prefix(path)) => is_under(path, base),
        }
    }

    /// Whether this is the exact root pattern `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Exact(path) if path == "/")
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => write!(f, "{path}"),
            Self::Prefix(base) if base == "/" => write!(f, "/*"),
            Self::Prefix(base) => write!(f, "{base}/*"),
        }
    }
}

impl FromStr for RoutePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// What a matched route leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget<P> {
    /// Render a page.
    Page(P),
    /// Resolve another path instead.
    Redirect(String),
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<P> {
    /// The pattern to match.
    pub pattern: RoutePattern,
    /// Where a match leads.
    pub target: RouteTarget<P>,
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<P> {
    /// A page was found.
    Found {
        /// The page to render.
        page: P,
        /// Final path after redirects.
        path: String,
        /// Sub-path below a prefix pattern, empty for exact matches.
        remainder: String,
        /// Whether at least one redirect was followed.
        redirected: bool,
    },
    /// Nothing matches the path.
    NotFound {
        /// The normalized path that failed to match.
        path: String,
    },
}

impl<P> RouteMatch<P> {
    /// The matched page, if any.
    #[must_use]
    pub const fn page(&self) -> Option<&P> {
        match self {
            Self::Found { page, .. } => Some(page),
            Self::NotFound { .. } => None,
        }
    }

    /// The resolved path (or the unmatched one).
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Found { path, .. } | Self::NotFound { path } => path,
        }
    }

    /// Whether a page was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Builder for [`RouteTable`]. Entries keep their declaration order.
#[derive(Debug)]
pub struct RouteTableBuilder<P> {
    entries: Vec<(String, RouteTarget<P>)>,
}

impl<P> Default for RouteTableBuilder<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P: Clone> RouteTableBuilder<P> {
    /// Add a page route.
    #[must_use]
    pub fn page(mut self, pattern: impl Into<String>, page: P) -> Self {
        self.entries.push((pattern.into(), RouteTarget::Page(page)));
        self
    }

    /// Add a redirect.
    #[must_use]
    pub fn redirect(mut self, pattern: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries
            .push((pattern.into(), RouteTarget::Redirect(normalize_path(&to.into()))));
        self
    }

    /// Validate the declarations and build the table.
    pub fn build(self) -> Result<RouteTable<P>> {
        let mut entries: Vec<RouteEntry<P>> = Vec::with_capacity(self.entries.len());

        for (raw, target) in self.entries {
            let pattern = RoutePattern::parse(&raw)?;

            if pattern.is_root() && entries.iter().any(|e| e.pattern.is_root()) {
                return Err(Error::DuplicateRootRoute);
            }
            if let Some(earlier) = entries.iter().find(|e| e.pattern.covers(&pattern)) {
                return Err(Error::ShadowedRoute {
                    pattern: pattern.to_string(),
                    shadowed_by: earlier.pattern.to_string(),
                });
            }

            entries.push(RouteEntry { pattern, target });
        }

        let table = RouteTable { entries };
        for entry in &table.entries {
            if let RouteTarget::Redirect(to) = &entry.target
                && table.follow(to, 1).is_none()
            {
                return Err(Error::RedirectLoop(entry.pattern.to_string()));
            }
        }

        debug!("Built route table with {} entries", table.entries.len());
        Ok(table)
    }
}

/// Ordered route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
}

impl<P: Clone> RouteTable<P> {
    /// Start building a route table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder::default()
    }

    /// Resolve a path to a page, following redirects.
    pub fn resolve(&self, path: &str) -> RouteMatch<P> {
        let requested = normalize_path(path);
        if let Some(found) = self.follow(&requested, 0) {
            if let RouteMatch::NotFound { path } = &found {
                warn!("No route matches '{}'", path);
            }
            found
        } else {
            warn!("Redirect chain from '{}' did not terminate", requested);
            RouteMatch::NotFound { path: requested }
        }
    }

    /// The entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry<P>] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn first_match(&self, path: &str) -> Option<(&RouteEntry<P>, String)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|rest| (entry, rest)))
    }

    /// Follow matches and redirects from `path`. `None` means the chain
    /// exceeded [`MAX_REDIRECTS`].
    fn follow(&self, path: &str, already_followed: usize) -> Option<RouteMatch<P>> {
        let mut current = normalize_path(path);
        for hops in already_followed..=MAX_REDIRECTS {
            let Some((entry, remainder)) = self.first_match(&current) else {
                return Some(RouteMatch::NotFound { path: current });
            };
            match &entry.target {
                RouteTarget::Page(page) => {
                    debug!("Resolved '{}' via '{}'", current, entry.pattern);
                    return Some(RouteMatch::Found {
                        page: page.clone(),
                        path: current,
                        remainder,
                        redirected: hops > 0,
                    });
                }
                RouteTarget::Redirect(to) => {
                    debug!("Redirecting '{}' to '{}'", current, to);
                    current.clone_from(to);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Dashboard,
        Library,
        Discovery,
    }

    fn table() -> RouteTable<View> {
        RouteTable::builder()
            .redirect("/", "/dashboard")
            .page("/dashboard", View::Dashboard)
            .page("/discovery/library", View::Library)
            .page("/discovery/*", View::Discovery)
            .build()
            .expect("valid table")
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("dashboard"), "/dashboard");
        assert_eq!(normalize_path("/twin/qc/"), "/twin/qc");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_is_under_respects_segments() {
        assert!(is_under("/discovery", "/discovery"));
        assert!(is_under("/discovery/bgc", "/discovery"));
        assert!(!is_under("/discoveryx", "/discovery"));
        assert!(is_under("/anything", "/"));
    }

    #[test]
    fn test_parse_patterns() {
        assert_eq!(
            RoutePattern::parse("/dashboard").expect("valid"),
            RoutePattern::Exact("/dashboard".to_string())
        );
        assert_eq!(
            RoutePattern::parse("/discovery/*").expect("valid"),
            RoutePattern::Prefix("/discovery".to_string())
        );
        assert_eq!(
            RoutePattern::parse("/*").expect("valid"),
            RoutePattern::Prefix("/".to_string())
        );
        assert!(RoutePattern::parse("dashboard").is_err());
        assert!(RoutePattern::parse("/a/*/b").is_err());
        assert!(RoutePattern::parse("/a*").is_err());
    }

    #[test]
    fn test_pattern_display_round_trips() {
        for raw in ["/", "/dashboard", "/discovery/*", "/*"] {
            let pattern: RoutePattern = raw.parse().expect("valid");
            assert_eq!(pattern.to_string(), raw);
        }
    }

    #[test]
    fn test_literal_wins_over_wildcard() {
        let routes = table();
        assert_eq!(
            routes.resolve("/discovery/library").page(),
            Some(&View::Library)
        );
        assert_eq!(routes.resolve("/discovery/bgc").page(), Some(&View::Discovery));
    }

    #[test]
    fn test_root_redirects_to_dashboard() {
        let routes = table();
        let root = routes.resolve("/");
        let dashboard = routes.resolve("/dashboard");
        assert_eq!(root.page(), dashboard.page());
        assert_eq!(root.path(), "/dashboard");
        assert!(matches!(root, RouteMatch::Found { redirected: true, .. }));
        assert!(matches!(
            dashboard,
            RouteMatch::Found {
                redirected: false,
                ..
            }
        ));
    }

    #[test]
    fn test_prefix_remainder() {
        let routes = table();
        match routes.resolve("/discovery/bgc/cluster-7/") {
            RouteMatch::Found {
                page, remainder, ..
            } => {
                assert_eq!(page, View::Discovery);
                assert_eq!(remainder, "bgc/cluster-7");
            }
            RouteMatch::NotFound { .. } => panic!("expected a match"),
        }
        match routes.resolve("/discovery") {
            RouteMatch::Found { remainder, .. } => assert!(remainder.is_empty()),
            RouteMatch::NotFound { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        let routes = table();
        let result = routes.resolve("/executive/finance");
        assert_eq!(
            result,
            RouteMatch::NotFound {
                path: "/executive/finance".to_string()
            }
        );
        assert!(!routes.resolve("/discoveryx").is_found());
    }

    #[test]
    fn test_shadowed_literal_is_rejected() {
        let result = RouteTable::builder()
            .page("/discovery/*", View::Discovery)
            .page("/discovery/library", View::Library)
            .build();
        assert!(matches!(result, Err(Error::ShadowedRoute { .. })));
    }

    #[test]
    fn test_duplicate_root_is_rejected() {
        let result = RouteTable::builder()
            .redirect("/", "/dashboard")
            .page("/", View::Dashboard)
            .page("/dashboard", View::Dashboard)
            .build();
        assert!(matches!(result, Err(Error::DuplicateRootRoute)));
    }

    #[test]
    fn test_redirect_loop_is_rejected() {
        let result = RouteTable::<View>::builder()
            .redirect("/a", "/b")
            .redirect("/b", "/a")
            .build();
        assert!(matches!(result, Err(Error::RedirectLoop(_))));
    }

    fn redirect_chain(hops: usize) -> Result<RouteTable<View>> {
        (0..hops)
            .fold(RouteTable::builder(), |builder, hop| {
                builder.redirect(format!("/r{hop}"), format!("/r{}", hop + 1))
            })
            .page(format!("/r{hops}"), View::Dashboard)
            .build()
    }

    #[test]
    fn test_redirect_chain_at_limit_resolves() {
        let routes = redirect_chain(MAX_REDIRECTS).expect("chain within limit");
        match routes.resolve("/r0") {
            RouteMatch::Found {
                page,
                path,
                redirected,
                ..
            } => {
                assert_eq!(page, View::Dashboard);
                assert_eq!(path, format!("/r{MAX_REDIRECTS}"));
                assert!(redirected);
            }
            RouteMatch::NotFound { path } => panic!("expected a match, got not found at {path}"),
        }
    }

    #[test]
    fn test_redirect_chain_over_limit_is_rejected() {
        let result = redirect_chain(MAX_REDIRECTS + 1);
        assert!(matches!(result, Err(Error::RedirectLoop(pattern)) if pattern == "/r0"));
    }

    #[test]
    fn test_redirect_to_missing_target_builds_and_reports_not_found() {
        let routes = RouteTable::<View>::builder()
            .redirect("/", "/nowhere")
            .build()
            .expect("dangling redirects are allowed");
        assert_eq!(
            routes.resolve("/"),
            RouteMatch::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_catch_all_after_specific_routes() {
        let routes = RouteTable::builder()
            .page("/dashboard", View::Dashboard)
            .page("/*", View::Discovery)
            .build()
            .expect("valid table");
        assert_eq!(routes.resolve("/dashboard").page(), Some(&View::Dashboard));
        assert_eq!(routes.resolve("/whatever/else").page(), Some(&View::Discovery));
    }
}
