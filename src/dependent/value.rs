use std::{fmt, str::FromStr};

use tracing::{trace, warn};

use crate::{
    cascade::{Tier, TierValues, select_value},
    table::BreakpointTable,
};

use super::BreakpointDependent;

type Converter<T, U> = Box<dyn Fn(&T) -> Option<U>>;

/// A property value that cascades across breakpoints.
///
/// The last resolved breakpoint and its value are memoized, so resolving the
/// same breakpoint again returns the stored value without running the cascade
/// or the converter.
///
/// ```rust
/// use floem_breakpoints::{BreakpointDependent, BreakpointValue, TierValues};
///
/// let mut padding = BreakpointValue::parsed::<f64>(TierValues::with_default("4").m("12"));
/// assert_eq!(padding.resolve(None, Some("XS")), Some(4.0));
/// assert_eq!(padding.resolve(None, Some("XL")), Some(12.0));
/// ```
pub struct BreakpointValue<T, U = T> {
    values: TierValues<T>,
    convert: Converter<T, U>,
    memo: Option<(String, Option<U>)>,
}

impl<T: Clone + 'static> BreakpointValue<T> {
    pub fn new(values: TierValues<T>) -> Self {
        Self {
            values,
            convert: Box::new(|value: &T| Some(value.clone())),
            memo: None,
        }
    }
}

impl<S: AsRef<str> + 'static> BreakpointValue<S> {
    /// Parses the selected text into `U`. Text that fails to parse resolves
    /// to `None` with a warning.
    pub fn parsed<U>(values: TierValues<S>) -> BreakpointValue<S, U>
    where
        U: FromStr + 'static,
        U::Err: fmt::Display,
    {
        BreakpointValue {
            values,
            convert: Box::new(|value: &S| {
                let text = value.as_ref();
                text.parse::<U>()
                    .inspect_err(|err| {
                        warn!(value = text, "cannot convert breakpoint value: {err}");
                    })
                    .ok()
            }),
            memo: None,
        }
    }
}

impl<T, U> BreakpointValue<T, U> {
    /// Replaces the conversion applied to the selected value.
    pub fn with_converter<V>(
        self,
        convert: impl Fn(&T) -> Option<V> + 'static,
    ) -> BreakpointValue<T, V> {
        BreakpointValue {
            values: self.values,
            convert: Box::new(convert),
            memo: None,
        }
    }

    pub fn values(&self) -> &TierValues<T> {
        &self.values
    }

    /// The breakpoint whose value is currently memoized.
    pub fn cached_breakpoint(&self) -> Option<&str> {
        self.memo.as_ref().map(|(name, _)| name.as_str())
    }

    fn compute(&self, current: Option<&str>) -> Option<U> {
        select_value(current, &self.values).and_then(|value| (self.convert)(value))
    }
}

impl<T, U: Clone> BreakpointDependent for BreakpointValue<T, U> {
    type Output = Option<U>;

    fn resolve(&mut self, _table: Option<&BreakpointTable>, current: Option<&str>) -> Option<U> {
        let Some(current) = current else {
            return self.compute(None);
        };
        if let Some((name, value)) = &self.memo
            && name == current
        {
            trace!(breakpoint = current, "breakpoint value unchanged");
            return value.clone();
        }
        let value = self.compute(Some(current));
        self.memo = Some((current.to_string(), value.clone()));
        value
    }

    fn resolve_design(&mut self, breakpoint: Option<&str>) -> Option<U> {
        self.compute(Some(breakpoint.unwrap_or(Tier::Xs.name())))
    }
}

impl<T: fmt::Debug, U: fmt::Debug> fmt::Debug for BreakpointValue<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointValue")
            .field("values", &self.values)
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}
