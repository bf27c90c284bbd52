use crate::{
    error::BreakpointError, resolver::VisibilityQuery, table::BreakpointTable,
};

use super::BreakpointDependent;

/// Shows an element from a breakpoint upwards, within a single band, or
/// within a range of breakpoints.
///
/// ```rust
/// use floem_breakpoints::{BreakpointDependent, BreakpointTable, BreakpointVisibility};
///
/// let table = BreakpointTable::standard();
/// let mut sidebar = BreakpointVisibility::new("M").unwrap().upper_bound("L");
/// assert!(!sidebar.resolve(Some(&table), Some("S")));
/// assert!(sidebar.resolve(Some(&table), Some("L")));
/// assert!(!sidebar.resolve(Some(&table), Some("XL")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointVisibility {
    query: VisibilityQuery,
    enabled: bool,
}

impl BreakpointVisibility {
    pub fn new(target: impl Into<String>) -> Result<Self, BreakpointError> {
        let target = target.into();
        if target.is_empty() {
            return Err(BreakpointError::EmptyBreakpointName);
        }
        Ok(Self {
            query: VisibilityQuery::new(target),
            enabled: true,
        })
    }

    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.query.exclusive = exclusive;
        self
    }

    /// An empty name clears the upper bound.
    pub fn upper_bound(mut self, upper: impl Into<String>) -> Self {
        let upper = upper.into();
        self.query.upper_bound = (!upper.is_empty()).then_some(upper);
        self
    }

    pub fn query(&self) -> &VisibilityQuery {
        &self.query
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled element is hidden regardless of the breakpoint, as long as
    /// it has a provider.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl BreakpointDependent for BreakpointVisibility {
    type Output = bool;

    fn resolve(&mut self, table: Option<&BreakpointTable>, current: Option<&str>) -> bool {
        // Without a provider the element is always shown, even when disabled.
        if table.is_none() {
            return self.query.evaluate(None, current);
        }
        self.enabled && self.query.evaluate(table, current)
    }

    fn resolve_design(&mut self, breakpoint: Option<&str>) -> bool {
        breakpoint.is_none_or(|breakpoint| breakpoint == self.query.target)
    }
}
