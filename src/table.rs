//! The ordered set of named width thresholds owned by a breakpoint provider.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::BreakpointError;

/// An ordered bijection between breakpoint names and width thresholds.
///
/// Both names and thresholds are unique. Entries are kept sorted by threshold
/// in ascending order, which is the order used by [`index`](Self::index),
/// [`iter`](Self::iter) and the neighbour lookups.
///
/// ```rust
/// use floem_breakpoints::BreakpointTable;
///
/// let table = BreakpointTable::from_pairs([("S", 800.0), ("XS", 600.0), ("M", 1000.0)]).unwrap();
/// assert_eq!(table.find_current(900.0), Some(("S", 800.0)));
/// assert_eq!(table.find_next(900.0), Some(("M", 1000.0)));
/// assert_eq!(table.index(0).unwrap(), ("XS", 600.0));
/// ```
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(into = "IndexMap<String, f64>")
)]
pub struct BreakpointTable {
    thresholds: FxHashMap<String, f64>,
    sorted: Vec<(f64, String)>,
}

impl BreakpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six tier table: XS=600, S=800, M=1000, L=1200, XL=1400, XXL=1600.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for (name, threshold) in [
            ("XS", 600.0),
            ("S", 800.0),
            ("M", 1000.0),
            ("L", 1200.0),
            ("XL", 1400.0),
            ("XXL", 1600.0),
        ] {
            table.sorted.push((threshold, name.to_string()));
            table.thresholds.insert(name.to_string(), threshold);
        }
        table
    }

    /// Builds a table from `(name, threshold)` pairs, stopping at the first
    /// pair that cannot be inserted.
    pub fn from_pairs<N, I>(pairs: I) -> Result<Self, BreakpointError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let mut table = Self::new();
        for (name, threshold) in pairs {
            table.insert(name, threshold)?;
        }
        Ok(table)
    }

    /// Adds a new breakpoint.
    ///
    /// Fails without modifying the table if the name or the threshold is
    /// already present, or if the threshold is NaN.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        threshold: f64,
    ) -> Result<(), BreakpointError> {
        let name = name.into();
        if threshold.is_nan() {
            return Err(BreakpointError::InvalidThreshold(name));
        }
        if self.thresholds.contains_key(&name) {
            return Err(BreakpointError::DuplicateKey(name));
        }
        let pos = self.check_free_threshold(threshold)?;
        self.sorted.insert(pos, (threshold, name.clone()));
        self.thresholds.insert(name, threshold);
        Ok(())
    }

    /// Moves `name` to `threshold`, inserting it if it does not exist yet.
    ///
    /// Returns the previous threshold of `name`. Fails without modifying the
    /// table if another breakpoint already uses `threshold`.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        threshold: f64,
    ) -> Result<Option<f64>, BreakpointError> {
        let name = name.into();
        let Some(&old) = self.thresholds.get(&name) else {
            self.insert(name, threshold)?;
            return Ok(None);
        };
        if threshold.is_nan() {
            return Err(BreakpointError::InvalidThreshold(name));
        }
        if old == threshold {
            return Ok(Some(old));
        }
        self.check_free_threshold(threshold)?;

        let old_pos = self.position_of(old);
        self.sorted.remove(old_pos);
        let pos = self.sorted.partition_point(|(t, _)| *t < threshold);
        self.sorted.insert(pos, (threshold, name.clone()));
        self.thresholds.insert(name, threshold);
        Ok(Some(old))
    }

    /// Removes a breakpoint, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(threshold) = self.thresholds.remove(name) else {
            return false;
        };
        let pos = self.position_of(threshold);
        self.sorted.remove(pos);
        true
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.thresholds.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.thresholds.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The breakpoint at `ordinal` in ascending threshold order.
    pub fn index(&self, ordinal: usize) -> Result<(&str, f64), BreakpointError> {
        self.sorted
            .get(ordinal)
            .map(entry)
            .ok_or(BreakpointError::IndexOutOfRange {
                index: ordinal,
                len: self.len(),
            })
    }

    /// The breakpoint with the smallest threshold strictly greater than `value`.
    pub fn find_next(&self, value: f64) -> Option<(&str, f64)> {
        if value.is_nan() {
            return None;
        }
        let pos = self.sorted.partition_point(|(t, _)| *t <= value);
        self.sorted.get(pos).map(entry)
    }

    /// The breakpoint with the largest threshold strictly less than `value`.
    pub fn find_previous(&self, value: f64) -> Option<(&str, f64)> {
        if value.is_nan() {
            return None;
        }
        let pos = self.sorted.partition_point(|(t, _)| *t < value);
        pos.checked_sub(1).map(|pos| entry(&self.sorted[pos]))
    }

    /// The breakpoint with the largest threshold less than or equal to `value`.
    pub fn find_current(&self, value: f64) -> Option<(&str, f64)> {
        if value.is_nan() {
            return None;
        }
        let pos = self.sorted.partition_point(|(t, _)| *t <= value);
        pos.checked_sub(1).map(|pos| entry(&self.sorted[pos]))
    }

    /// The breakpoint with the smallest threshold.
    pub fn first(&self) -> Option<(&str, f64)> {
        self.sorted.first().map(entry)
    }

    /// The breakpoint with the largest threshold.
    pub fn last(&self) -> Option<(&str, f64)> {
        self.sorted.last().map(entry)
    }

    /// Iterates `(name, threshold)` pairs by ascending threshold.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.sorted.iter(),
        }
    }

    pub fn names(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.sorted.iter().map(|(_, name)| name.as_str())
    }

    pub fn thresholds(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.sorted.iter().map(|(threshold, _)| *threshold)
    }

    /// Returns the sorted insertion point for `threshold`, or the owner of the
    /// threshold if it is taken.
    fn check_free_threshold(&self, threshold: f64) -> Result<usize, BreakpointError> {
        let pos = self.sorted.partition_point(|(t, _)| *t < threshold);
        match self.sorted.get(pos) {
            Some((t, existing)) if *t == threshold => Err(BreakpointError::DuplicateValue {
                threshold,
                existing: existing.clone(),
            }),
            _ => Ok(pos),
        }
    }

    // `threshold` must belong to an entry of the table.
    fn position_of(&self, threshold: f64) -> usize {
        let pos = self.sorted.partition_point(|(t, _)| *t < threshold);
        debug_assert!(self.sorted.get(pos).is_some_and(|(t, _)| *t == threshold));
        pos
    }
}

fn entry((threshold, name): &(f64, String)) -> (&str, f64) {
    (name.as_str(), *threshold)
}

/// Iterator over the breakpoints of a [`BreakpointTable`] in ascending order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (f64, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(entry)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BreakpointTable {
    type Item = (&'a str, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for BreakpointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl From<BreakpointTable> for IndexMap<String, f64> {
    fn from(table: BreakpointTable) -> Self {
        table
            .sorted
            .into_iter()
            .map(|(threshold, name)| (name, threshold))
            .collect()
    }
}

impl TryFrom<IndexMap<String, f64>> for BreakpointTable {
    type Error = BreakpointError;

    fn try_from(map: IndexMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(map)
    }
}

// Entries are inserted as they are read, so a repeated name is reported
// instead of overwriting the earlier entry.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BreakpointTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> serde::de::Visitor<'de> for TableVisitor {
            type Value = BreakpointTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of breakpoint names to thresholds")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut table = BreakpointTable::new();
                while let Some((name, threshold)) = map.next_entry::<String, f64>()? {
                    table
                        .insert(name, threshold)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
