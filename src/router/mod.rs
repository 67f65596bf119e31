//! Router
//!
//! Route table and the global pre-navigation guard.
//!
//! Each navigation resolves the requested path, follows redirect routes,
//! and runs the guard on every hop: a route that requires auth redirects
//! to `/login` while no token is stored. The guard is synchronous and never
//! checks token validity with the backend.

mod routes;

pub use routes::{
    find_route, normalize_path, RouteDescriptor, RouteMeta, RouteTarget, View, EXPENSES_PATH,
    HOME_PATH, LOGIN_PATH, PERSONS_PATH, REGISTER_PATH, ROUTES,
};

use crate::session::TokenStore;
use thiserror::Error;

/// Redirect hops allowed before giving up
const MAX_REDIRECTS: usize = 8;

/// Outcome of the guard for one route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Redirected(&'static str),
}

/// Run the auth guard against a target route
pub fn guard(route: &RouteDescriptor, store: &TokenStore) -> GuardDecision {
    if route.requires_auth() && !store.is_logged_in() {
        GuardDecision::Redirected(LOGIN_PATH)
    } else {
        GuardDecision::Allowed
    }
}

/// A completed navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path as requested (normalized)
    pub requested: String,
    /// Route finally shown
    pub route: &'static RouteDescriptor,
    /// Whether the guard sent us elsewhere
    pub redirected: bool,
}

impl Navigation {
    pub fn view(&self) -> Option<View> {
        self.route.view()
    }

    pub fn path(&self) -> &'static str {
        self.route.path
    }
}

/// Routing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Too many redirects while resolving {0}")]
    RedirectLoop(String),
}

/// Router with the auth guard installed
#[derive(Debug, Clone)]
pub struct Router {
    routes: &'static [RouteDescriptor],
    store: TokenStore,
    current: Option<&'static RouteDescriptor>,
}

impl Router {
    /// Router over the application route table
    pub fn new(store: TokenStore) -> Self {
        Self::with_routes(ROUTES, store)
    }

    pub fn with_routes(routes: &'static [RouteDescriptor], store: TokenStore) -> Self {
        Self {
            routes,
            store,
            current: None,
        }
    }

    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Route shown after the last successful navigation
    pub fn current(&self) -> Option<&'static RouteDescriptor> {
        self.current
    }

    /// Resolve a path without changing the current location
    pub fn resolve(&self, path: &str) -> Result<Navigation, RouteError> {
        let requested = normalize_path(path);
        let mut target = requested.clone();
        let mut redirected = false;

        for _ in 0..MAX_REDIRECTS {
            let route = find_route(self.routes, &target)
                .ok_or_else(|| RouteError::NotFound(target.clone()))?;

            if let GuardDecision::Redirected(to) = guard(route, &self.store) {
                tracing::debug!(from = %target, to, "Navigation guard redirect");
                target = to.to_string();
                redirected = true;
                continue;
            }

            match route.target {
                RouteTarget::Redirect(to) => {
                    target = to.to_string();
                }
                RouteTarget::View(_) => {
                    return Ok(Navigation {
                        requested,
                        route,
                        redirected,
                    });
                }
            }
        }

        Err(RouteError::RedirectLoop(requested))
    }

    /// Navigate to a path, recording the route shown
    pub fn navigate(&mut self, path: &str) -> Result<Navigation, RouteError> {
        let navigation = self.resolve(path)?;
        self.current = Some(navigation.route);
        Ok(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes_redirect_without_token() {
        let router = Router::new(TokenStore::in_memory());

        for path in [EXPENSES_PATH, PERSONS_PATH] {
            let nav = router.resolve(path).unwrap();
            assert!(nav.redirected, "{} should redirect", path);
            assert_eq!(nav.path(), LOGIN_PATH);
            assert_eq!(nav.view(), Some(View::Login));
            assert_eq!(nav.requested, path);
        }
    }

    #[test]
    fn test_protected_routes_allowed_with_token() {
        let store = TokenStore::in_memory();
        store.set("any-token", "alice");
        let router = Router::new(store);

        let nav = router.resolve(EXPENSES_PATH).unwrap();
        assert!(!nav.redirected);
        assert_eq!(nav.view(), Some(View::ExpenseList));

        let nav = router.resolve(PERSONS_PATH).unwrap();
        assert_eq!(nav.view(), Some(View::PersonList));
    }

    #[test]
    fn test_public_routes_always_allowed() {
        let router = Router::new(TokenStore::in_memory());

        assert_eq!(router.resolve(LOGIN_PATH).unwrap().view(), Some(View::Login));
        let nav = router.resolve(REGISTER_PATH).unwrap();
        assert_eq!(nav.view(), Some(View::Register));
        assert!(!nav.redirected);
    }

    #[test]
    fn test_home_redirects_through_guard() {
        let store = TokenStore::in_memory();
        let router = Router::new(store.clone());

        let nav = router.resolve("/").unwrap();
        assert_eq!(nav.path(), LOGIN_PATH);
        assert!(nav.redirected);

        store.set("t", "u");
        let nav = router.resolve("/").unwrap();
        assert_eq!(nav.path(), EXPENSES_PATH);
        assert!(!nav.redirected);
    }

    #[test]
    fn test_guard_reacts_to_logout() {
        let store = TokenStore::in_memory();
        store.set("t", "u");
        let mut router = Router::new(store.clone());

        router.navigate("/persons").unwrap();
        assert_eq!(router.current().unwrap().path, PERSONS_PATH);

        store.clear();
        let nav = router.navigate("/persons").unwrap();
        assert!(nav.redirected);
        assert_eq!(router.current().unwrap().path, LOGIN_PATH);
    }

    #[test]
    fn test_unknown_path() {
        let mut router = Router::new(TokenStore::in_memory());
        assert_eq!(
            router.navigate("/nowhere"),
            Err(RouteError::NotFound("/nowhere".to_string()))
        );
        assert!(router.current().is_none());
    }

    #[test]
    fn test_redirect_loop_detected() {
        static LOOPING: &[RouteDescriptor] = &[
            RouteDescriptor {
                path: "/a",
                name: "A",
                target: RouteTarget::Redirect("/b"),
                meta: RouteMeta { requires_auth: false },
            },
            RouteDescriptor {
                path: "/b",
                name: "B",
                target: RouteTarget::Redirect("/a"),
                meta: RouteMeta { requires_auth: false },
            },
        ];

        let router = Router::with_routes(LOOPING, TokenStore::in_memory());
        assert_eq!(
            router.resolve("/a"),
            Err(RouteError::RedirectLoop("/a".to_string()))
        );
    }

    #[test]
    fn test_guard_decision() {
        let store = TokenStore::in_memory();
        let expenses = find_route(ROUTES, EXPENSES_PATH).unwrap();
        let login = find_route(ROUTES, LOGIN_PATH).unwrap();

        assert_eq!(guard(expenses, &store), GuardDecision::Redirected(LOGIN_PATH));
        assert_eq!(guard(login, &store), GuardDecision::Allowed);

        store.set("t", "u");
        assert_eq!(guard(expenses, &store), GuardDecision::Allowed);
    }
}
