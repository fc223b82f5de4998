//! The static route table.

use anyhow::Result;
use std::collections::HashSet;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

/// One row of the route table. The page itself is bound to the path by the
/// frontend router; the table only carries what the guard needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

impl RouteEntry {
    pub const fn public(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: false,
        }
    }

    pub const fn protected(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
        }
    }
}

/// What the root path `/` does. Both variants ship; which one runs is a
/// configuration choice, never hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootBehavior {
    /// `/` renders a dedicated landing page with no auth requirement.
    Intro,
    /// `/` unconditionally redirects to the login page.
    RedirectToLogin,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    root: RootBehavior,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Builds a table, rejecting duplicate paths, duplicate names, and a
    /// missing root entry.
    pub fn new(root: RootBehavior, entries: Vec<RouteEntry>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &entries {
            if !paths.insert(entry.path) {
                anyhow::bail!("duplicate route path: {}", entry.path);
            }
            if !names.insert(entry.name) {
                anyhow::bail!("duplicate route name: {}", entry.name);
            }
        }

        if !paths.contains(ROOT_PATH) {
            anyhow::bail!("route table has no root entry");
        }

        Ok(Self { root, entries })
    }

    /// The HR Desk table: intro and login are public, every workspace page
    /// requires a session.
    pub fn standard(root: RootBehavior) -> Self {
        let entries = vec![
            RouteEntry::public(ROOT_PATH, "Intro"),
            RouteEntry::public(LOGIN_PATH, "Login"),
            RouteEntry::protected(HOME_PATH, "Home"),
            RouteEntry::protected("/dashboard", "Dashboard"),
            RouteEntry::protected("/employees", "Employees"),
            RouteEntry::protected("/timeoff", "TimeOff"),
            RouteEntry::protected("/payroll", "Payroll"),
            RouteEntry::protected("/performance", "Performance"),
        ];

        // The standard table is statically well-formed.
        Self::new(root, entries).unwrap_or_else(|e| panic!("standard route table invalid: {e}"))
    }

    pub const fn root(&self) -> RootBehavior {
        self.root
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_shape() {
        let table = RouteTable::standard(RootBehavior::Intro);

        assert_eq!(table.entries().len(), 8);
        assert_eq!(
            table.entries().iter().filter(|e| e.path == ROOT_PATH).count(),
            1
        );

        for entry in table.entries() {
            let public = entry.path == ROOT_PATH || entry.path == LOGIN_PATH;
            assert_eq!(entry.requires_auth, !public, "entry {}", entry.path);
        }
    }

    #[test]
    fn find_matches_exact_paths() {
        let table = RouteTable::standard(RootBehavior::Intro);
        assert_eq!(table.find("/payroll").unwrap().name, "Payroll");
        assert!(table.find("/payroll/").is_none());
        assert!(table.find("/missing").is_none());
    }

    #[test]
    fn rejects_duplicate_paths() {
        let err = RouteTable::new(
            RootBehavior::Intro,
            vec![
                RouteEntry::public(ROOT_PATH, "Intro"),
                RouteEntry::protected("/a", "First"),
                RouteEntry::protected("/a", "Second"),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate route path"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RouteTable::new(
            RootBehavior::Intro,
            vec![
                RouteEntry::public(ROOT_PATH, "Intro"),
                RouteEntry::protected("/a", "Page"),
                RouteEntry::protected("/b", "Page"),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate route name"));
    }

    #[test]
    fn rejects_missing_root() {
        let err = RouteTable::new(
            RootBehavior::Intro,
            vec![RouteEntry::protected("/a", "Page")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("no root entry"));
    }
}
