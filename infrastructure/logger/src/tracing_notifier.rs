use business::domain::notifier::{NavigationTarget, Notifier};
use tracing::{debug, info};

/// Headless rendition of the storefront's toast system and router: UI
/// feedback is emitted as log events. The API layer carries navigation
/// targets to clients in its responses; this adapter only makes the signals
/// observable.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn toast(&self, title: &str, description: &str) {
        info!(target: "Storefront -- ", "toast: {}: {}", title, description);
    }

    fn navigate(&self, target: NavigationTarget) {
        debug!(target: "Storefront -- ", "navigate: {:?}", target);
    }
}
