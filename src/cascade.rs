//! Mobile-first selection of values and content by breakpoint.
//!
//! A value set for a smaller breakpoint keeps applying to every larger one
//! until a larger breakpoint overrides it.

use std::{fmt, str::FromStr};

use tracing::warn;

use crate::{error::BreakpointError, table::BreakpointTable};

/// The fixed cascade tiers, from smallest to largest.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Tier {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Tier {
    pub const ALL: [Tier; 6] = [Tier::Xs, Tier::S, Tier::M, Tier::L, Tier::Xl, Tier::Xxl];

    /// The breakpoint name this tier is looked up by.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Xs => "XS",
            Tier::S => "S",
            Tier::M => "M",
            Tier::L => "L",
            Tier::Xl => "XL",
            Tier::Xxl => "XXL",
        }
    }

    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_name(s).ok_or_else(|| BreakpointError::UnknownBreakpointName(s.to_string()))
    }
}

/// Per-tier overrides of a value, plus the value used below every override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierValues<T> {
    overrides: [Option<T>; 6],
    default: Option<T>,
}

impl<T> Default for TierValues<T> {
    fn default() -> Self {
        Self {
            overrides: Default::default(),
            default: None,
        }
    }
}

impl<T> TierValues<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(default: T) -> Self {
        Self {
            default: Some(default),
            ..Self::default()
        }
    }

    pub fn xs(self, value: T) -> Self {
        self.with(Tier::Xs, value)
    }

    pub fn s(self, value: T) -> Self {
        self.with(Tier::S, value)
    }

    pub fn m(self, value: T) -> Self {
        self.with(Tier::M, value)
    }

    pub fn l(self, value: T) -> Self {
        self.with(Tier::L, value)
    }

    pub fn xl(self, value: T) -> Self {
        self.with(Tier::Xl, value)
    }

    pub fn xxl(self, value: T) -> Self {
        self.with(Tier::Xxl, value)
    }

    pub fn with(mut self, tier: Tier, value: T) -> Self {
        self.set(tier, Some(value));
        self
    }

    pub fn set(&mut self, tier: Tier, value: Option<T>) {
        self.overrides[tier.index()] = value;
    }

    pub fn set_default(&mut self, value: Option<T>) {
        self.default = value;
    }

    pub fn get(&self, tier: Tier) -> Option<&T> {
        self.overrides[tier.index()].as_ref()
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// The override of `tier` or of the nearest smaller tier that has one,
    /// falling back to the default.
    pub fn select(&self, tier: Tier) -> Option<&T> {
        self.overrides[..=tier.index()]
            .iter()
            .rev()
            .find_map(Option::as_ref)
            .or(self.default.as_ref())
    }
}

/// Picks the cascaded value for the breakpoint named `current`.
///
/// An unresolved breakpoint, or one that is not a cascade tier, selects the
/// default.
pub fn select_value<'a, T>(current: Option<&str>, values: &'a TierValues<T>) -> Option<&'a T> {
    let Some(current) = current else {
        return values.default_value();
    };
    match Tier::from_name(current) {
        Some(tier) => values.select(tier),
        None => {
            warn!(
                breakpoint = current,
                "breakpoint is not a cascade tier, using the default value"
            );
            values.default_value()
        }
    }
}

/// Content shown from a breakpoint upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTemplate<C> {
    pub target: String,
    pub content: C,
}

impl<C> BreakpointTemplate<C> {
    pub fn new(target: impl Into<String>, content: C) -> Self {
        Self {
            target: target.into(),
            content,
        }
    }
}

/// Picks the template for the breakpoint named `current`.
///
/// This is the template with the largest threshold at or below the current
/// one. When every template starts above the current breakpoint, the template
/// with the smallest threshold is used. Templates for breakpoints missing from
/// `table` are ignored. When nothing can be resolved the first template is
/// returned.
pub fn select_template<'a, C>(
    table: Option<&BreakpointTable>,
    current: Option<&str>,
    templates: &'a [BreakpointTemplate<C>],
) -> Option<&'a BreakpointTemplate<C>> {
    let (Some(table), Some(current)) = (table, current) else {
        return templates.first();
    };
    let current_threshold = table.get(current);
    if current_threshold.is_none() {
        warn!(
            breakpoint = current,
            "current breakpoint is not defined, using the smallest template"
        );
    }

    let mut selected: Option<(f64, &BreakpointTemplate<C>)> = None;
    let mut smallest: Option<(f64, &BreakpointTemplate<C>)> = None;
    for template in templates {
        let Some(threshold) = table.get(&template.target) else {
            warn!(breakpoint = %template.target, "template targets an undefined breakpoint");
            continue;
        };
        if smallest.is_none_or(|(t, _)| threshold < t) {
            smallest = Some((threshold, template));
        }
        let fits = current_threshold.is_some_and(|current| threshold <= current);
        if fits && selected.is_none_or(|(t, _)| threshold > t) {
            selected = Some((threshold, template));
        }
    }

    selected.or(smallest).map(|(_, template)| template)
}
