//! Route guarding: which page a path may show for the current session.

use crate::session::SessionState;

/// Top-level pages addressable by URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Dashboard,
    NotFound,
}

impl Page {
    pub fn requires_session(&self) -> bool {
        matches!(self, Page::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The session is still being restored; show a neutral placeholder.
    Wait,
    Render(Page),
    Redirect(Page),
}

/// Decides what a request for `page` resolves to under `session`.
pub fn resolve(page: Page, session: &SessionState) -> Resolution {
    if !session.is_ready() {
        return Resolution::Wait;
    }

    let authenticated = session.is_authenticated();
    match page {
        Page::Root if authenticated => Resolution::Redirect(Page::Dashboard),
        Page::Root => Resolution::Redirect(Page::Login),
        page if page.requires_session() && !authenticated => Resolution::Redirect(Page::Login),
        page => Resolution::Render(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Credential, Identity};
    use crate::session::AuthenticatedSession;

    fn authenticated() -> SessionState {
        SessionState::Authenticated(AuthenticatedSession {
            identity: Identity {
                id: None,
                username: "ada".to_string(),
                full_name: String::new(),
                email: "ada@example.com".to_string(),
                points: 0,
                streak_days: 0,
            },
            credential: Credential::new("tok"),
        })
    }

    #[test]
    fn waits_while_restoring() {
        for page in [Page::Root, Page::Login, Page::Dashboard, Page::NotFound] {
            assert_eq!(resolve(page, &SessionState::Restoring), Resolution::Wait);
        }
    }

    #[test]
    fn protected_page_redirects_anonymous_users_to_login() {
        assert_eq!(
            resolve(Page::Dashboard, &SessionState::Anonymous),
            Resolution::Redirect(Page::Login)
        );
    }

    #[test]
    fn protected_page_renders_for_authenticated_users() {
        assert_eq!(
            resolve(Page::Dashboard, &authenticated()),
            Resolution::Render(Page::Dashboard)
        );
    }

    #[test]
    fn root_redirects_by_session() {
        assert_eq!(
            resolve(Page::Root, &authenticated()),
            Resolution::Redirect(Page::Dashboard)
        );
        assert_eq!(
            resolve(Page::Root, &SessionState::Anonymous),
            Resolution::Redirect(Page::Login)
        );
    }

    #[test]
    fn login_and_not_found_always_render() {
        for session in [SessionState::Anonymous, authenticated()] {
            assert_eq!(resolve(Page::Login, &session), Resolution::Render(Page::Login));
            assert_eq!(
                resolve(Page::NotFound, &session),
                Resolution::Render(Page::NotFound)
            );
        }
    }
}
