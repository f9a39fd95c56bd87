/// Where the UI should take the user after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Home,
    Login,
}

/// Port for UI feedback: transient toasts and navigation signals.
/// The storefront UI is an external collaborator; adapters decide how
/// (or whether) to render these.
pub trait Notifier: Send + Sync {
    fn toast(&self, title: &str, description: &str);
    fn navigate(&self, target: NavigationTarget);
}
