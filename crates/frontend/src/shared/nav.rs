use web_sys::window;

/// Navigate the browser to `path`.
///
/// The only navigation capability this app needs; everything else is
/// in-memory section switching.
pub fn navigate_to(path: &str) {
    if let Some(w) = window() {
        if let Err(err) = w.location().set_href(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }
}
