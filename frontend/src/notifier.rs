//! Blocking user dialogs.

/// The dialogs the client uses to talk to the user.
pub trait Notifier {
    /// Show `message` and wait for the user to dismiss it.
    fn alert(&self, message: &str);

    /// Ask the user a yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Ask the user for a line of text, `None` if they cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
}

/// [Notifier] using the browser's `alert`, `confirm` and `prompt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if let Err(error) = window.alert_with_message(message) {
            tracing::error!("Could not show alert: {error:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        web_sys::window().and_then(|window| window.prompt_with_message(message).ok().flatten())
    }
}
