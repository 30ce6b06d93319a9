pub mod storage;

use leptos::prelude::*;

/// Route shown to unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// Session presence, resolved once at application start.
///
/// This is a non-authoritative client-side marker, not a security boundary:
/// the login flow writes the flag, this layer only observes it. The state is
/// built from the raw storage read at the root and handed to the shell via
/// context, so the shell itself never touches the ambient store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    logged_in: bool,
}

impl SessionState {
    /// Build the state from a raw storage read. Presence is all that counts;
    /// the stored value is ignored.
    pub fn from_flag(flag: Option<String>) -> Self {
        Self {
            logged_in: flag.is_some(),
        }
    }

    /// Resolve the session from localStorage.
    pub fn load() -> Self {
        Self::from_flag(storage::get_session_flag())
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }
}

/// Hook to access the session state provided at the application root.
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found in component tree")
}

/// Clear the session flag and return to the login route.
pub fn do_logout() {
    storage::clear_session_flag();
    crate::shared::nav::navigate_to(LOGIN_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flag_is_logged_out() {
        assert!(!SessionState::from_flag(None).logged_in());
    }

    #[test]
    fn test_any_present_value_is_logged_in() {
        assert!(SessionState::from_flag(Some("true".into())).logged_in());
        // Presence-only semantics: even an odd value counts.
        assert!(SessionState::from_flag(Some(String::new())).logged_in());
    }
}
