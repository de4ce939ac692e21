use crate::{Role, SessionUser};

/// What the auth guard knows about the current session at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionStatus<'a> {
    /// `GET users/me` has not resolved yet.
    Pending,
    /// The lookup failed (network or server error).
    Failed,
    /// The lookup resolved without a user.
    Anonymous,
    Authenticated(&'a SessionUser),
}

impl<'a> SessionStatus<'a> {
    /// Collapse a server-function result into a session status.
    pub fn from_lookup<E>(lookup: Option<&'a Result<Option<SessionUser>, E>>) -> Self {
        match lookup {
            None => SessionStatus::Pending,
            Some(Err(_)) => SessionStatus::Failed,
            Some(Ok(None)) => SessionStatus::Anonymous,
            Some(Ok(Some(user))) => SessionStatus::Authenticated(user),
        }
    }
}

/// Outcome of one guard render pass. `Loading` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    RedirectLogin,
    RedirectUnauthorized,
    Authorized,
}

impl GuardDecision {
    /// Decide how a guarded page renders.
    ///
    /// An empty `allowed` list admits any signed-in user. A failed lookup is
    /// treated like a missing session.
    pub fn evaluate(status: SessionStatus<'_>, allowed: &[Role]) -> Self {
        match status {
            SessionStatus::Pending => GuardDecision::Loading,
            SessionStatus::Failed | SessionStatus::Anonymous => GuardDecision::RedirectLogin,
            SessionStatus::Authenticated(user) => {
                if allowed.is_empty() || allowed.contains(&user.role) {
                    GuardDecision::Authorized
                } else {
                    GuardDecision::RedirectUnauthorized
                }
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuardDecision::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: "Test User".into(),
            email: "test@rideshare.dev".into(),
            role,
            phone: None,
            address: None,
            is_approved: true,
            is_blocked: false,
            is_online: false,
            vehicle: None,
        }
    }

    #[test]
    fn matching_role_is_authorized() {
        for role in Role::DASHBOARD_ROLES {
            let u = user(role);
            assert_eq!(
                GuardDecision::evaluate(SessionStatus::Authenticated(&u), &[role]),
                GuardDecision::Authorized
            );
        }
    }

    #[test]
    fn mismatched_role_redirects_to_unauthorized() {
        for have in Role::DASHBOARD_ROLES {
            for need in Role::DASHBOARD_ROLES {
                if have == need {
                    continue;
                }
                let u = user(have);
                assert_eq!(
                    GuardDecision::evaluate(SessionStatus::Authenticated(&u), &[need]),
                    GuardDecision::RedirectUnauthorized,
                    "{have} visiting a {need} route"
                );
            }
        }
    }

    #[test]
    fn driver_visiting_admin_route_is_unauthorized() {
        let u = user(Role::Driver);
        assert_eq!(
            GuardDecision::evaluate(SessionStatus::Authenticated(&u), &[Role::Admin]),
            GuardDecision::RedirectUnauthorized
        );
    }

    #[test]
    fn missing_session_redirects_to_login() {
        for allowed in [vec![], vec![Role::Rider], vec![Role::Admin, Role::Driver]] {
            assert_eq!(
                GuardDecision::evaluate(SessionStatus::Anonymous, &allowed),
                GuardDecision::RedirectLogin
            );
        }
    }

    #[test]
    fn failed_lookup_redirects_to_login() {
        assert_eq!(
            GuardDecision::evaluate(SessionStatus::Failed, &[Role::Rider]),
            GuardDecision::RedirectLogin
        );
    }

    #[test]
    fn pending_lookup_stays_loading_then_resolves() {
        let pending = GuardDecision::evaluate(SessionStatus::Pending, &[Role::Rider]);
        assert_eq!(pending, GuardDecision::Loading);
        assert!(!pending.is_terminal());

        let resolved = GuardDecision::evaluate(SessionStatus::Anonymous, &[Role::Rider]);
        assert_eq!(resolved, GuardDecision::RedirectLogin);
        assert!(resolved.is_terminal());
    }

    #[test]
    fn empty_role_list_admits_any_signed_in_user() {
        let u = user(Role::Guest);
        assert_eq!(
            GuardDecision::evaluate(SessionStatus::Authenticated(&u), &[]),
            GuardDecision::Authorized
        );
    }

    #[test]
    fn role_list_admits_any_listed_role() {
        let u = user(Role::Driver);
        assert_eq!(
            GuardDecision::evaluate(
                SessionStatus::Authenticated(&u),
                &[Role::Admin, Role::Driver]
            ),
            GuardDecision::Authorized
        );
    }

    #[test]
    fn from_lookup_maps_every_resource_state() {
        let none: Option<&Result<Option<SessionUser>, String>> = None;
        assert_eq!(SessionStatus::from_lookup(none), SessionStatus::Pending);

        let failed: Result<Option<SessionUser>, String> = Err("timeout".into());
        assert_eq!(
            SessionStatus::from_lookup(Some(&failed)),
            SessionStatus::Failed
        );

        let anonymous: Result<Option<SessionUser>, String> = Ok(None);
        assert_eq!(
            SessionStatus::from_lookup(Some(&anonymous)),
            SessionStatus::Anonymous
        );

        let signed_in: Result<Option<SessionUser>, String> = Ok(Some(user(Role::Rider)));
        assert!(matches!(
            SessionStatus::from_lookup(Some(&signed_in)),
            SessionStatus::Authenticated(u) if u.role == Role::Rider
        ));
    }
}
