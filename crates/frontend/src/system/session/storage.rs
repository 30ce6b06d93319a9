use web_sys::window;

const SESSION_FLAG_KEY: &str = "adminLoggedIn";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the session flag from localStorage.
///
/// The flag is written by the login flow; this layer only reads it.
pub fn get_session_flag() -> Option<String> {
    get_local_storage()?.get_item(SESSION_FLAG_KEY).ok()?
}

/// Clear the session flag (logout).
pub fn clear_session_flag() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_FLAG_KEY);
    }
}
