//! The navigation guard.

use crate::backend::routing::table::{HOME_PATH, LOGIN_PATH, ROOT_PATH, RootBehavior, RouteEntry, RouteTable};
use crate::backend::session::SharedSession;

/// Outcome of evaluating one navigation attempt. A redirect is itself a new
/// navigation that re-enters the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Let the requested target through unchanged.
    Allow,
    /// Send the user to the login page; the original destination is dropped.
    RedirectToLogin,
    /// Send an already-logged-in user away from the login page.
    RedirectToHome,
}

impl Resolution {
    pub const fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
        }
    }
}

/// Guard over a route table. Constructed explicitly from the table and a
/// session capability so instances are independent and tests can substitute
/// a fake session.
#[derive(Clone)]
pub struct NavigationGuard {
    table: RouteTable,
    session: SharedSession,
}

impl NavigationGuard {
    pub fn new(table: RouteTable, session: SharedSession) -> Self {
        Self { table, session }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Evaluates one table entry. Session state is read fresh on every call.
    /// First matching branch wins:
    /// 1. protected target without a session redirects to login,
    /// 2. the login page with a session redirects to home,
    /// 3. everything else passes through.
    pub fn evaluate(&self, target: &RouteEntry) -> Resolution {
        let logged_in = self.session.is_logged_in();

        if target.requires_auth && !logged_in {
            Resolution::RedirectToLogin
        } else if target.path == LOGIN_PATH && logged_in {
            Resolution::RedirectToHome
        } else {
            Resolution::Allow
        }
    }

    /// Evaluates a raw path. The table-level root redirect (when `/` is
    /// configured as a redirect rather than a landing page) applies before
    /// the guard branches; paths not in the table are none of our business
    /// and pass through.
    pub fn evaluate_path(&self, path: &str) -> Resolution {
        if path == ROOT_PATH && self.table.root() == RootBehavior::RedirectToLogin {
            return Resolution::RedirectToLogin;
        }

        match self.table.find(path) {
            Some(entry) => self.evaluate(entry),
            None => Resolution::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::SessionStatus;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Fake session the tests can flip at will.
    struct FakeSession(AtomicBool);

    impl FakeSession {
        fn new(logged_in: bool) -> Arc<Self> {
            Arc::new(Self(AtomicBool::new(logged_in)))
        }

        fn set(&self, logged_in: bool) {
            self.0.store(logged_in, Ordering::SeqCst);
        }
    }

    impl SessionStatus for FakeSession {
        fn is_logged_in(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn guard(root: RootBehavior, logged_in: bool) -> (NavigationGuard, Arc<FakeSession>) {
        let session = FakeSession::new(logged_in);
        let guard = NavigationGuard::new(RouteTable::standard(root), session.clone());
        (guard, session)
    }

    #[test]
    fn logged_out_protected_pages_redirect_to_login() {
        let (guard, _) = guard(RootBehavior::Intro, false);

        for entry in guard.table().entries() {
            if entry.requires_auth {
                assert_eq!(
                    guard.evaluate(entry),
                    Resolution::RedirectToLogin,
                    "entry {}",
                    entry.path
                );
                assert_eq!(
                    guard.evaluate(entry).redirect_path(),
                    Some(LOGIN_PATH)
                );
            }
        }
    }

    #[test]
    fn logged_in_protected_pages_pass_through() {
        let (guard, _) = guard(RootBehavior::Intro, true);

        for entry in guard.table().entries() {
            if entry.requires_auth {
                assert_eq!(guard.evaluate(entry), Resolution::Allow, "entry {}", entry.path);
            }
        }
    }

    #[test]
    fn login_page_bounces_logged_in_users_home() {
        let (guard, _) = guard(RootBehavior::Intro, true);
        assert_eq!(guard.evaluate_path(LOGIN_PATH), Resolution::RedirectToHome);
        assert_eq!(
            guard.evaluate_path(LOGIN_PATH).redirect_path(),
            Some(HOME_PATH)
        );
    }

    #[test]
    fn login_page_is_reachable_when_logged_out() {
        let (guard, _) = guard(RootBehavior::Intro, false);
        assert_eq!(guard.evaluate_path(LOGIN_PATH), Resolution::Allow);
    }

    #[test]
    fn payroll_redirects_to_login_when_logged_out() {
        let (guard, _) = guard(RootBehavior::Intro, false);
        assert_eq!(guard.evaluate_path("/payroll"), Resolution::RedirectToLogin);
    }

    #[test]
    fn employees_renders_when_logged_in() {
        let (guard, _) = guard(RootBehavior::Intro, true);
        assert_eq!(guard.evaluate_path("/employees"), Resolution::Allow);
    }

    #[test]
    fn intro_root_allows_regardless_of_session() {
        let (guard, session) = guard(RootBehavior::Intro, false);
        assert_eq!(guard.evaluate_path(ROOT_PATH), Resolution::Allow);

        session.set(true);
        assert_eq!(guard.evaluate_path(ROOT_PATH), Resolution::Allow);
    }

    #[test]
    fn redirect_root_always_goes_to_login() {
        let (guard, _) = guard(RootBehavior::RedirectToLogin, false);
        assert_eq!(guard.evaluate_path(ROOT_PATH), Resolution::RedirectToLogin);
    }

    #[test]
    fn redirect_root_chains_to_home_for_logged_in_users() {
        // `/` redirects to `/login`, which re-enters the guard and lands on
        // `/home` because a session exists.
        let (guard, _) = guard(RootBehavior::RedirectToLogin, true);

        let first = guard.evaluate_path(ROOT_PATH);
        assert_eq!(first, Resolution::RedirectToLogin);

        let second = guard.evaluate_path(first.redirect_path().unwrap());
        assert_eq!(second, Resolution::RedirectToHome);

        let third = guard.evaluate_path(second.redirect_path().unwrap());
        assert_eq!(third, Resolution::Allow);
    }

    #[test]
    fn resolution_is_idempotent_for_fixed_session_state() {
        let (guard, _) = guard(RootBehavior::Intro, false);

        for _ in 0..3 {
            assert_eq!(guard.evaluate_path("/timeoff"), Resolution::RedirectToLogin);
            assert_eq!(guard.evaluate_path(ROOT_PATH), Resolution::Allow);
        }
    }

    #[test]
    fn session_state_is_read_fresh_per_evaluation() {
        let (guard, session) = guard(RootBehavior::Intro, false);
        assert_eq!(guard.evaluate_path("/dashboard"), Resolution::RedirectToLogin);

        session.set(true);
        assert_eq!(guard.evaluate_path("/dashboard"), Resolution::Allow);

        session.set(false);
        assert_eq!(guard.evaluate_path("/dashboard"), Resolution::RedirectToLogin);
    }

    #[test]
    fn unknown_paths_pass_through() {
        let (guard, _) = guard(RootBehavior::Intro, false);
        assert_eq!(guard.evaluate_path("/nowhere"), Resolution::Allow);
    }

    #[test]
    fn guards_are_independent_instances() {
        let (intro, _) = guard(RootBehavior::Intro, false);
        let (redirecting, _) = guard(RootBehavior::RedirectToLogin, false);

        assert_eq!(intro.evaluate_path(ROOT_PATH), Resolution::Allow);
        assert_eq!(
            redirecting.evaluate_path(ROOT_PATH),
            Resolution::RedirectToLogin
        );
    }
}
