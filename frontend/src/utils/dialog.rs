use log::warn;

/// Blocking native alert, used for failed mutations.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                warn!("alert could not be shown: {}", message);
            }
        }
        None => warn!("no window for alert: {}", message),
    }
}

pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
