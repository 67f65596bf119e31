//! Route Table
//!
//! Static path -> view mapping. Immutable at runtime.

/// Views the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    ExpenseList,
    PersonList,
}

/// Where a route leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    /// Another path, resolved in turn
    Redirect(&'static str),
}

/// Per-route metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    pub fn view(&self) -> Option<View> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.meta.requires_auth
    }
}

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const EXPENSES_PATH: &str = "/expenses";
pub const PERSONS_PATH: &str = "/persons";

/// The application's routes
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: HOME_PATH,
        name: "Home",
        target: RouteTarget::Redirect(EXPENSES_PATH),
        meta: RouteMeta { requires_auth: false },
    },
    RouteDescriptor {
        path: LOGIN_PATH,
        name: "Login",
        target: RouteTarget::View(View::Login),
        meta: RouteMeta { requires_auth: false },
    },
    RouteDescriptor {
        path: REGISTER_PATH,
        name: "Register",
        target: RouteTarget::View(View::Register),
        meta: RouteMeta { requires_auth: false },
    },
    RouteDescriptor {
        path: EXPENSES_PATH,
        name: "Expenses",
        target: RouteTarget::View(View::ExpenseList),
        meta: RouteMeta { requires_auth: true },
    },
    RouteDescriptor {
        path: PERSONS_PATH,
        name: "Persons",
        target: RouteTarget::View(View::PersonList),
        meta: RouteMeta { requires_auth: true },
    },
];

/// Find the route for a normalized path
pub fn find_route(routes: &'static [RouteDescriptor], path: &str) -> Option<&'static RouteDescriptor> {
    routes.iter().find(|route| route.path == path)
}

/// Strip query string, fragment and trailing slashes
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        HOME_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        let guarded: Vec<&str> = ROUTES
            .iter()
            .filter(|r| r.requires_auth())
            .map(|r| r.path)
            .collect();
        assert_eq!(guarded, vec![EXPENSES_PATH, PERSONS_PATH]);

        let home = find_route(ROUTES, "/").unwrap();
        assert_eq!(home.target, RouteTarget::Redirect(EXPENSES_PATH));
        assert_eq!(home.view(), None);

        let login = find_route(ROUTES, "/login").unwrap();
        assert_eq!(login.view(), Some(View::Login));
        assert_eq!(login.name, "Login");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/expenses/"), "/expenses");
        assert_eq!(normalize_path("expenses"), "/expenses");
        assert_eq!(normalize_path("/persons?page=2"), "/persons");
        assert_eq!(normalize_path("/login#top"), "/login");
    }
}
