use dioxus::prelude::*;
use shared_types::{Role, SessionUser};

/// Global authentication state.
///
/// Holds the last user resolved by the auth guard or returned by login.
/// Pages read it; only the guard, login and logout write it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn role(&self) -> Role {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.role)
            .unwrap_or_default()
    }

    /// Store a user unless the same record is already cached.
    pub fn set_user(&mut self, user: SessionUser) {
        if self.current_user.peek().as_ref() != Some(&user) {
            self.current_user.set(Some(user));
        }
    }

    pub fn clear_auth(&mut self) {
        if self.current_user.peek().is_some() {
            self.current_user.set(None);
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Signed-in user for pages rendered behind the auth guard.
pub fn use_session_user() -> Option<SessionUser> {
    let auth = use_auth();
    let user = auth.current_user.read().clone();
    user
}
