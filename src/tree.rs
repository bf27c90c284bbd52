//! Locating the breakpoint provider of an element.

use std::fmt::Debug;

use tracing::warn;

use crate::host::ProviderId;

/// Read access to the toolkit's element tree, used to find the breakpoint
/// provider an element belongs to.
pub trait ElementTree {
    type Element: Copy + Debug;

    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// The provider registered on `element`, if it is a breakpoint provider.
    fn provider(&self, element: Self::Element) -> Option<ProviderId>;
}

/// Finds the provider of the nearest ancestor of `element` that is a
/// breakpoint provider. The element itself is not considered.
pub fn find_provider<T: ElementTree>(tree: &T, element: T::Element) -> Option<ProviderId> {
    let mut parent = tree.parent(element);
    while let Some(id) = parent {
        if let Some(provider) = tree.provider(id) {
            return Some(provider);
        }
        parent = tree.parent(id);
    }
    warn!(?element, "no breakpoint provider found");
    None
}
