//! Navigation collaborator.

use std::sync::Arc;

/// Destinations the study screen can leave for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Home screen, after a modal is dismissed.
    Home,
    /// One step back, from the header close control.
    Back,
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}
