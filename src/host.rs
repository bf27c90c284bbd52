//! Breakpoint providers and change notifications.
//!
//! A [`BreakpointHost`] owns every provider's [`BreakpointTable`] and current
//! breakpoint. The toolkit reports width changes with
//! [`set_width`](BreakpointHost::set_width); the host resolves the new current
//! breakpoint and, when it changed, notifies the provider's subscribers.
//!
//! Dependents refer to a provider only through its [`ProviderId`], so a
//! provider can be removed while dependents still hold its id. Queries through
//! a stale id behave like an unresolved provider.

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, warn};

use crate::{dependent::BreakpointDependent, resolver::current_breakpoint, table::BreakpointTable};

new_key_type! {
    /// Identifies a breakpoint provider within a [`BreakpointHost`].
    pub struct ProviderId;
    struct SubscriberKey;
}

/// Handle returned by [`BreakpointHost::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    provider: ProviderId,
    key: SubscriberKey,
}

impl Subscription {
    pub fn provider(&self) -> ProviderId {
        self.provider
    }
}

/// Published when the current breakpoint of a provider changes, or when its
/// table is replaced.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointChanged<'a> {
    pub provider: ProviderId,
    pub table: &'a BreakpointTable,
    pub previous: Option<&'a str>,
    pub current: Option<&'a str>,
    pub width: Option<f64>,
}

impl BreakpointChanged<'_> {
    /// Re-evaluates `dependent` against the state carried by this event.
    pub fn resolve<D: BreakpointDependent>(&self, dependent: &mut D) -> D::Output {
        dependent.resolve(Some(self.table), self.current)
    }
}

type Callback = Box<dyn FnMut(&BreakpointChanged<'_>)>;

struct Provider {
    table: BreakpointTable,
    width: Option<f64>,
    current: Option<String>,
    subscribers: SlotMap<SubscriberKey, Callback>,
}

impl Provider {
    fn new(table: BreakpointTable) -> Self {
        Self {
            table,
            width: None,
            current: None,
            subscribers: SlotMap::with_key(),
        }
    }

    /// Recomputes the current breakpoint and notifies subscribers if it
    /// changed, or unconditionally when `force` is set.
    fn refresh(&mut self, id: ProviderId, force: bool) -> bool {
        let next = self
            .width
            .and_then(|width| current_breakpoint(&self.table, width));
        let changed = next != self.current.as_deref();
        if !changed && !force {
            return false;
        }

        let previous = std::mem::replace(&mut self.current, next.map(str::to_string));
        debug!(
            provider = ?id,
            previous = previous.as_deref(),
            current = self.current.as_deref(),
            width = self.width,
            "breakpoint changed"
        );

        let event = BreakpointChanged {
            provider: id,
            table: &self.table,
            previous: previous.as_deref(),
            current: self.current.as_deref(),
            width: self.width,
        };
        for callback in self.subscribers.values_mut() {
            callback(&event);
        }
        changed
    }
}

/// Owns breakpoint providers and dispatches their change notifications.
#[derive(Default)]
pub struct BreakpointHost {
    providers: SlotMap<ProviderId, Provider>,
}

impl BreakpointHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider. Its breakpoint stays unresolved until the first
    /// [`set_width`](Self::set_width).
    pub fn insert_provider(&mut self, table: BreakpointTable) -> ProviderId {
        if table.is_empty() {
            warn!("breakpoint provider registered without breakpoints");
        }
        self.providers.insert(Provider::new(table))
    }

    /// Removes a provider together with its subscriptions.
    pub fn remove_provider(&mut self, id: ProviderId) -> Option<BreakpointTable> {
        self.providers.remove(id).map(|provider| provider.table)
    }

    pub fn contains_provider(&self, id: ProviderId) -> bool {
        self.providers.contains_key(id)
    }

    pub fn table(&self, id: ProviderId) -> Option<&BreakpointTable> {
        self.providers.get(id).map(|provider| &provider.table)
    }

    pub fn width(&self, id: ProviderId) -> Option<f64> {
        self.providers.get(id).and_then(|provider| provider.width)
    }

    /// The breakpoint currently active for the provider.
    pub fn current_breakpoint(&self, id: ProviderId) -> Option<&str> {
        self.providers
            .get(id)
            .and_then(|provider| provider.current.as_deref())
    }

    /// Reports a new width for the provider.
    ///
    /// Returns whether the current breakpoint changed. Subscribers are only
    /// notified when it did.
    pub fn set_width(&mut self, id: ProviderId, width: f64) -> bool {
        let Some(provider) = self.providers.get_mut(id) else {
            warn!(provider = ?id, "width reported for an unknown breakpoint provider");
            return false;
        };
        if width.is_nan() {
            warn!(provider = ?id, "ignoring NaN width");
            return false;
        }
        provider.width = Some(width);
        provider.refresh(id, false)
    }

    /// Replaces the provider's breakpoints and notifies its subscribers.
    ///
    /// Returns whether the current breakpoint changed, or `None` for an
    /// unknown provider.
    pub fn set_table(&mut self, id: ProviderId, table: BreakpointTable) -> Option<bool> {
        let Some(provider) = self.providers.get_mut(id) else {
            warn!(provider = ?id, "breakpoints set on an unknown breakpoint provider");
            return None;
        };
        if table.is_empty() {
            warn!(provider = ?id, "breakpoint provider has no breakpoints");
        }
        provider.table = table;
        Some(provider.refresh(id, true))
    }

    /// Calls `callback` whenever the provider's breakpoint changes.
    ///
    /// Returns `None` for an unknown provider.
    pub fn subscribe(
        &mut self,
        id: ProviderId,
        callback: impl FnMut(&BreakpointChanged<'_>) + 'static,
    ) -> Option<Subscription> {
        let provider = self.providers.get_mut(id)?;
        let key = provider.subscribers.insert(Box::new(callback));
        Some(Subscription { provider: id, key })
    }

    /// Returns whether the subscription was still active.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.providers
            .get_mut(subscription.provider)
            .and_then(|provider| provider.subscribers.remove(subscription.key))
            .is_some()
    }

    pub fn subscriber_count(&self, id: ProviderId) -> usize {
        self.providers
            .get(id)
            .map_or(0, |provider| provider.subscribers.len())
    }

    /// Evaluates `dependent` against the provider it refers to.
    ///
    /// A missing or removed provider is passed to the dependent as unresolved.
    pub fn resolve<D: BreakpointDependent>(
        &self,
        provider: Option<ProviderId>,
        dependent: &mut D,
    ) -> D::Output {
        match provider.and_then(|id| self.providers.get(id)) {
            Some(provider) => dependent.resolve(Some(&provider.table), provider.current.as_deref()),
            None => {
                if let Some(id) = provider {
                    warn!(provider = ?id, "breakpoint provider no longer exists");
                }
                dependent.resolve(None, None)
            }
        }
    }
}
