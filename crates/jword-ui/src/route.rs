//! Page identifiers for the top-level navigation surface.
//!
//! Navigation is a page-level signal holding one [`Route`]; switching
//! routes unmounts the old page component, which resets its transient
//! state. No route carries parameters or server-fetched data.

use std::fmt;

/// Identifier for one page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Marketing landing page.
    #[default]
    Home,
    /// Resume analysis flow.
    Analyzer,
    /// Resume optimization flow.
    Optimizer,
    /// Cover letter generator (placeholder).
    CoverGen,
    /// Login (placeholder).
    Login,
}

impl Route {
    /// All routes in navbar order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Analyzer,
        Self::Optimizer,
        Self::CoverGen,
        Self::Login,
    ];

    /// Routes shown as centered navbar links. Login is rendered as a
    /// separate button on desktop.
    pub const NAV_LINKS: [Self; 4] = [Self::Home, Self::Analyzer, Self::Optimizer, Self::CoverGen];

    /// Display label for navigation links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Analyzer => "Analyzer",
            Self::Optimizer => "Optimizer",
            Self::CoverGen => "CoverGen",
            Self::Login => "Log In",
        }
    }

    /// Canonical path for the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Analyzer => "/analyzer",
            Self::Optimizer => "/optimizer",
            Self::CoverGen => "/covergen",
            Self::Login => "/login",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_variant() {
        // If you add a Route variant, update ALL and this count.
        assert_eq!(Route::ALL.len(), 5, "Route::ALL length must match variant count");
        let mut seen = std::collections::HashSet::new();
        for route in Route::ALL {
            assert!(seen.insert(route), "Duplicate route in ALL: {route}");
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for route in Route::ALL {
            assert!(seen.insert(route.path()), "Duplicate path: {}", route.path());
        }
    }

    #[test]
    fn nav_links_exclude_login() {
        assert!(!Route::NAV_LINKS.contains(&Route::Login));
        for link in Route::NAV_LINKS {
            assert!(Route::ALL.contains(&link));
        }
    }

    #[test]
    fn default_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
        assert_eq!(Route::Home.path(), "/");
    }
}
