use contracts::system::auth::{AdminInfo, LoginResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::http::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub admin: Option<AdminInfo>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// A missing profile grants nothing.
    pub fn can(&self, permission: &str) -> bool {
        self.is_authenticated() && self.admin.as_ref().is_some_and(|a| a.can(permission))
    }

    pub fn display_name(&self) -> Option<&str> {
        self.admin.as_ref().map(|a| a.name.as_str())
    }
}

/// The signed-in admin, shared by the whole app through context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Reads the stored session and revalidates it against the server in the
    /// background. A rejected token signs the user out.
    pub fn restore() -> Self {
        let state = SessionState {
            access_token: storage::get_access_token(),
            admin: storage::get_admin_info(),
        };
        let has_token = state.is_authenticated();
        let session = Self {
            state: RwSignal::new(state),
        };

        if has_token {
            spawn_local(async move {
                match api::get_current_admin().await {
                    Ok(admin) => {
                        storage::save_admin_info(&admin);
                        session.state.update(|s| s.admin = Some(admin));
                    }
                    Err(ApiError::Unauthorized) => {
                        log::info!("stored token rejected, signing out");
                        session.sign_out();
                    }
                    Err(e) => log::warn!("could not refresh admin profile: {}", e),
                }
            });
        }
        session
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn can(&self, permission: &str) -> bool {
        self.state.with(|s| s.can(permission))
    }

    pub fn sign_in(&self, response: LoginResponse) {
        storage::save_access_token(&response.access_token);
        storage::save_admin_info(&response.admin);
        log::info!("signed in as {}", response.admin.name);
        self.state.set(SessionState {
            access_token: Some(response.access_token),
            admin: Some(response.admin),
        });
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.state.set(SessionState::default());
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::AdminRole;

    fn state(token: Option<&str>, role: AdminRole, permissions: &[&str]) -> SessionState {
        SessionState {
            access_token: token.map(str::to_string),
            admin: Some(AdminInfo {
                id: "7".into(),
                name: "Dana".to_string(),
                email: None,
                role,
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            }),
        }
    }

    #[test]
    fn permissions_require_a_token() {
        let s = state(None, AdminRole::SuperAdmin, &[]);
        assert!(!s.can("banks"));
    }

    #[test]
    fn staff_needs_explicit_permission() {
        let s = state(Some("t"), AdminRole::Staff, &["banks"]);
        assert!(s.can("banks"));
        assert!(!s.can("payments"));
    }

    #[test]
    fn missing_profile_grants_nothing() {
        let s = SessionState {
            access_token: Some("t".to_string()),
            admin: None,
        };
        assert!(s.is_authenticated());
        assert!(!s.can("categories"));
        assert_eq!(s.display_name(), None);
    }
}
