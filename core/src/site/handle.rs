//! A shareable handle to the view router
//!
//! The handle is the single observable state object of the site: the
//! navigation chrome writes through it, pages subscribe to the current
//! [`NavigationTarget`] and react when it changes.

use super::chrome::ChromeState;
use super::router::{NavigationOutcome, ViewRouter, Viewport};
use super::view::{NavigationTarget, View};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle {
    router: Arc<Mutex<ViewRouter>>,
    target_tx: Arc<watch::Sender<NavigationTarget>>,
}

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: ViewRouter) -> Self {
        let (target_tx, _) = watch::channel(router.current().clone());
        Self {
            router: Arc::new(Mutex::new(router)),
            target_tx: Arc::new(target_tx),
        }
    }

    // A panic while holding the lock leaves plain data behind; keep using it.
    fn lock(&self) -> MutexGuard<'_, ViewRouter> {
        self.router
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn publish(&self, target: &NavigationTarget) {
        self.target_tx.send_replace(target.clone());
    }

    /// Navigate to a destination label
    pub fn navigate(&self, label: &str, viewport: &mut dyn Viewport) -> NavigationOutcome {
        let outcome = self.lock().navigate(label, viewport);
        self.publish(outcome.target());
        outcome
    }

    /// Navigate to an explicit target
    pub fn navigate_to(&self, target: NavigationTarget) -> NavigationOutcome {
        let outcome = self.lock().navigate_to(target);
        self.publish(outcome.target());
        outcome
    }

    /// Subscribe to navigation target changes
    pub fn subscribe(&self) -> watch::Receiver<NavigationTarget> {
        self.target_tx.subscribe()
    }

    /// Get the current navigation target
    pub fn current(&self) -> NavigationTarget {
        self.lock().current().clone()
    }

    /// Get the current view
    pub fn view(&self) -> View {
        self.lock().view()
    }

    /// Read the chrome state
    pub fn chrome(&self) -> ChromeState {
        self.lock().chrome().clone()
    }

    /// Mutate the chrome state
    pub fn update_chrome<R>(&self, f: impl FnOnce(&mut ChromeState) -> R) -> R {
        f(self.lock().chrome_mut())
    }

    /// Whether the navbar renders on a solid background
    pub fn solid_mode(&self) -> bool {
        self.lock().solid_mode()
    }
}

impl Default for RouterHandle {
    fn default() -> Self {
        Self::new(ViewRouter::new())
    }
}

impl std::fmt::Debug for RouterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterHandle")
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::router::DetachedViewport;
    use crate::site::taxonomy::MenuKey;

    #[test]
    fn test_router_handle() {
        let handle = RouterHandle::default();
        assert_eq!(handle.view(), View::Home);

        handle.navigate("Leadership", &mut DetachedViewport);
        assert_eq!(
            handle.current(),
            NavigationTarget::section(View::About, "leadership")
        );

        let clone = handle.clone();
        clone.navigate_to(NavigationTarget::top(View::Careers));
        assert_eq!(handle.view(), View::Careers);
    }

    #[test]
    fn test_subscribers_see_every_navigation() {
        let handle = RouterHandle::default();
        let mut rx = handle.subscribe();
        assert!(!rx.has_changed().unwrap());

        handle.navigate("Vedanco Consulting", &mut DetachedViewport);
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            NavigationTarget::section(View::Business, "vedanco-consulting")
        );

        // same target again still notifies; consumers dedupe on their side
        handle.navigate("Vedanco Consulting", &mut DetachedViewport);
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_chrome_updates() {
        let handle = RouterHandle::default();
        handle.update_chrome(|chrome| chrome.open_dropdown(MenuKey::Businesses));
        assert!(handle.solid_mode());
        handle.navigate("Vedanco Air", &mut DetachedViewport);
        assert_eq!(handle.chrome().active_dropdown(), None);
    }
}
