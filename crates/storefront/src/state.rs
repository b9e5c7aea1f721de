//! Application state shared across handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::widget::Storefront;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The widget is single-session: every request
/// sees the same catalog, cart and selection.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    storefront: Mutex<Storefront>,
}

impl AppState {
    /// Create a new application state around an initialized widget.
    #[must_use]
    pub fn new(storefront: Storefront) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                storefront: Mutex::new(storefront),
            }),
        }
    }

    /// Run `f` with exclusive access to the widget.
    ///
    /// Gestures are applied one at a time. The lock is never held across an
    /// await point.
    pub fn with_storefront<T>(&self, f: impl FnOnce(&mut Storefront) -> T) -> T {
        // A panic mid-gesture leaves the widget in a consistent state since
        // every mutation is a single assignment or cart add.
        let mut storefront = self
            .inner
            .storefront
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut storefront)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog_source::demo_catalog;
    use crate::widget::{Gesture, SelectionPolicy};

    #[test]
    fn test_clones_share_one_widget() {
        let state = AppState::new(Storefront::new(
            demo_catalog().unwrap(),
            SelectionPolicy::default(),
        ));
        let other = state.clone();

        other
            .with_storefront(|storefront| storefront.apply(Gesture::AddFeaturedToCart))
            .unwrap();

        assert_eq!(state.with_storefront(|s| s.cart().count()), 1);
        assert!(state.with_storefront(|s| s.drawer().is_open()));
    }
}
