//! State of elements that react to the breakpoint of their provider.
//!
//! Dependents never hold their provider. They are re-evaluated by handing them
//! the provider's table and current breakpoint, either through
//! [`BreakpointHost::resolve`](crate::host::BreakpointHost::resolve) or from a
//! [`BreakpointChanged`](crate::host::BreakpointChanged) notification.
//!
//! - [`BreakpointVisibility`] - shows or hides an element
//! - [`BreakpointValue`] - picks a property value per breakpoint
//! - [`BreakpointTemplates`] - switches content per breakpoint

mod templates;
mod value;
mod visibility;

pub use templates::BreakpointTemplates;
pub use value::BreakpointValue;
pub use visibility::BreakpointVisibility;

use crate::table::BreakpointTable;

/// An element whose state is derived from the current breakpoint.
pub trait BreakpointDependent {
    type Output;

    /// Evaluates against a live provider. `None` means the table or the
    /// current breakpoint could not be resolved.
    fn resolve(&mut self, table: Option<&BreakpointTable>, current: Option<&str>) -> Self::Output;

    /// Evaluates against a statically chosen breakpoint name, as used by
    /// design previews where no provider is running. `None` means no preview
    /// breakpoint was chosen.
    fn resolve_design(&mut self, breakpoint: Option<&str>) -> Self::Output;
}
