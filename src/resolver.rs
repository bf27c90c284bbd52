//! Classification of widths into breakpoints, and visibility decisions.
//!
//! Every query comes in two flavours. The `try_*` functions are strict and
//! return [`BreakpointError`] when the table, the current breakpoint or a
//! queried name cannot be resolved. The plain functions never fail: they log a
//! warning and answer `true`, so a missing breakpoint definition never hides
//! content.

use tracing::warn;

use crate::{error::BreakpointError, table::BreakpointTable};

/// Resolves the breakpoint that is active at `width`.
///
/// This is the breakpoint with the largest threshold at or below `width`. A
/// width below every threshold resolves to the smallest breakpoint. Returns
/// `None` only for an empty table or a NaN width.
pub fn current_breakpoint(table: &BreakpointTable, width: f64) -> Option<&str> {
    table
        .find_current(width)
        .or_else(|| table.find_previous(width))
        .or_else(|| table.find_next(width))
        .map(|(name, _)| name)
}

/// A visibility rule attached to a dependent element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityQuery {
    /// The breakpoint from which the element is shown.
    pub target: String,
    /// Restricts "from `target` upwards" to the band of `target` alone.
    pub exclusive: bool,
    /// Makes the rule a range: shown from `target` up to and including this
    /// breakpoint. Takes precedence over `exclusive`.
    pub upper_bound: Option<String>,
}

impl VisibilityQuery {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            exclusive: false,
            upper_bound: None,
        }
    }

    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    pub fn upper_bound(mut self, upper: impl Into<String>) -> Self {
        self.upper_bound = Some(upper.into());
        self
    }

    pub fn try_evaluate(
        &self,
        table: Option<&BreakpointTable>,
        current: Option<&str>,
    ) -> Result<bool, BreakpointError> {
        match &self.upper_bound {
            Some(upper) => try_is_between(table, current, &self.target, upper),
            None => try_should_be_visible(table, current, &self.target, self.exclusive),
        }
    }

    pub fn evaluate(&self, table: Option<&BreakpointTable>, current: Option<&str>) -> bool {
        self.try_evaluate(table, current)
            .unwrap_or_else(|err| visible_on_error(err, &self.target))
    }
}

/// Decides whether an element tagged for `target` is shown while `current` is
/// the active breakpoint.
///
/// Non-exclusive elements are shown from `target` upwards. Exclusive elements
/// are shown only while the active threshold is below the breakpoint that
/// follows `target`.
pub fn try_should_be_visible(
    table: Option<&BreakpointTable>,
    current: Option<&str>,
    target: &str,
    exclusive: bool,
) -> Result<bool, BreakpointError> {
    let (table, current, current_threshold) = resolve_current(table, current)?;
    let target_threshold = threshold_of(table, target)?;

    if current == target {
        return Ok(true);
    }
    if current_threshold <= target_threshold {
        return Ok(false);
    }
    if exclusive {
        return Ok(match table.find_next(target_threshold) {
            Some((_, next)) => current_threshold < next,
            None => true,
        });
    }
    Ok(true)
}

/// Fail-open variant of [`try_should_be_visible`].
pub fn should_be_visible(
    table: Option<&BreakpointTable>,
    current: Option<&str>,
    target: &str,
    exclusive: bool,
) -> bool {
    try_should_be_visible(table, current, target, exclusive)
        .unwrap_or_else(|err| visible_on_error(err, target))
}

/// Decides whether the active breakpoint lies in the band from `lower` up to
/// and including `upper`.
pub fn try_is_between(
    table: Option<&BreakpointTable>,
    current: Option<&str>,
    lower: &str,
    upper: &str,
) -> Result<bool, BreakpointError> {
    let (table, current, current_threshold) = resolve_current(table, current)?;
    let upper_threshold = threshold_of(table, upper)?;

    if !try_should_be_visible(Some(table), Some(current), lower, false)? {
        return Ok(false);
    }
    // The band of the largest breakpoint ends at its own threshold, which the
    // current breakpoint can reach but never pass.
    Ok(match table.find_next(upper_threshold) {
        Some((_, next)) => current_threshold < next,
        None => current_threshold <= upper_threshold,
    })
}

/// Fail-open variant of [`try_is_between`].
pub fn is_between(
    table: Option<&BreakpointTable>,
    current: Option<&str>,
    lower: &str,
    upper: &str,
) -> bool {
    try_is_between(table, current, lower, upper).unwrap_or_else(|err| visible_on_error(err, lower))
}

fn resolve_current<'a>(
    table: Option<&'a BreakpointTable>,
    current: Option<&'a str>,
) -> Result<(&'a BreakpointTable, &'a str, f64), BreakpointError> {
    let table = table.ok_or(BreakpointError::UnresolvedBreakpoint)?;
    let current = current.ok_or(BreakpointError::UnresolvedBreakpoint)?;
    let threshold = table
        .get(current)
        .ok_or(BreakpointError::UnresolvedBreakpoint)?;
    Ok((table, current, threshold))
}

fn threshold_of(table: &BreakpointTable, name: &str) -> Result<f64, BreakpointError> {
    table
        .get(name)
        .ok_or_else(|| BreakpointError::UnknownBreakpointName(name.to_string()))
}

fn visible_on_error(err: BreakpointError, target: &str) -> bool {
    warn!(target_breakpoint = target, "{err}, showing content");
    true
}
