//! # Floem Breakpoints
//! Responsive width breakpoints for Floem containers.
//!
//! A container, the *provider*, declares a named and ordered set of width
//! thresholds. Elements inside it ask which breakpoint is active to show or
//! hide themselves, to pick a property value, or to switch content.
//!
//! ## Example: Responsive layout
//! ```rust
//! use floem_breakpoints::*;
//!
//! let mut host = BreakpointHost::new();
//! let window = host.insert_provider(BreakpointTable::standard());
//!
//! let mut sidebar = BreakpointVisibility::new("L").unwrap();
//! let mut columns = BreakpointValue::new(TierValues::with_default(1).m(2).xl(3));
//!
//! host.set_width(window, 1050.0);
//! assert_eq!(host.current_breakpoint(window), Some("M"));
//! assert!(!host.resolve(Some(window), &mut sidebar));
//! assert_eq!(host.resolve(Some(window), &mut columns), Some(2));
//!
//! host.set_width(window, 1450.0);
//! assert!(host.resolve(Some(window), &mut sidebar));
//! assert_eq!(host.resolve(Some(window), &mut columns), Some(3));
//! ```
//!
//! ## Breakpoints
//! A [`BreakpointTable`] maps unique names to unique thresholds. The active
//! breakpoint for a width is the one with the largest threshold at or below
//! it; widths below every threshold use the smallest breakpoint. A width equal
//! to a threshold belongs to that threshold's breakpoint.
//!
//! ## Queries
//! - [`should_be_visible`] - shown from a breakpoint upwards, or only within
//!   its band when exclusive
//! - [`is_between`] - shown from a lower up to and including an upper
//!   breakpoint
//! - [`select_value`] - mobile-first cascade over the tiers XS, S, M, L, XL, XXL
//! - [`select_template`] - the same cascade over arbitrary content
//!
//! Queries never hide content because of a configuration problem. An unknown
//! name or an unresolved provider is logged as a warning and the element is
//! shown. The `try_*` variants in [`resolver`] report these cases as errors
//! instead.
//!
//! ## Change notifications
//! The [`BreakpointHost`] receives width changes from the toolkit and notifies
//! subscribers when a provider's breakpoint changes. Dependents hold only a
//! [`ProviderId`], located with [`find_provider`], and are re-evaluated with
//! [`BreakpointHost::resolve`] or [`BreakpointChanged::resolve`].

pub mod cascade;
pub mod dependent;
mod error;
pub mod host;
pub mod resolver;
pub mod table;
mod tree;

pub use cascade::{BreakpointTemplate, Tier, TierValues, select_template, select_value};
pub use dependent::{
    BreakpointDependent, BreakpointTemplates, BreakpointValue, BreakpointVisibility,
};
pub use error::BreakpointError;
pub use host::{BreakpointChanged, BreakpointHost, ProviderId, Subscription};
pub use resolver::{VisibilityQuery, current_breakpoint, is_between, should_be_visible};
pub use table::BreakpointTable;
pub use tree::{ElementTree, find_provider};
