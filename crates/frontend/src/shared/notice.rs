//! Blocking browser notices for failures and destructive confirmations.

/// Show a blocking message.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("could not show notice: {}", message);
        }
    }
}

/// Ask the user to acknowledge a destructive action. Anything but an
/// explicit "OK" counts as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
