use crate::{
    cascade::{BreakpointTemplate, select_template},
    table::BreakpointTable,
};

use super::BreakpointDependent;

/// Switches between pieces of content depending on the current breakpoint.
///
/// Resolving yields a clone of the selected content, typically a cheap handle
/// such as an `Rc` view builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTemplates<C> {
    templates: Vec<BreakpointTemplate<C>>,
    enabled: bool,
}

impl<C> Default for BreakpointTemplates<C> {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            enabled: true,
        }
    }
}

impl<C> BreakpointTemplates<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, target: impl Into<String>, content: C) -> Self {
        self.push(target, content);
        self
    }

    pub fn push(&mut self, target: impl Into<String>, content: C) {
        self.templates.push(BreakpointTemplate::new(target, content));
    }

    pub fn templates(&self) -> &[BreakpointTemplate<C>] {
        &self.templates
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled switcher shows no content.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl<C> FromIterator<BreakpointTemplate<C>> for BreakpointTemplates<C> {
    fn from_iter<I: IntoIterator<Item = BreakpointTemplate<C>>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
            enabled: true,
        }
    }
}

impl<C: Clone> BreakpointDependent for BreakpointTemplates<C> {
    type Output = Option<C>;

    fn resolve(&mut self, table: Option<&BreakpointTable>, current: Option<&str>) -> Option<C> {
        if !self.enabled {
            return None;
        }
        select_template(table, current, &self.templates).map(|template| template.content.clone())
    }

    fn resolve_design(&mut self, breakpoint: Option<&str>) -> Option<C> {
        breakpoint
            .and_then(|name| self.templates.iter().find(|template| template.target == name))
            .or(self.templates.first())
            .map(|template| template.content.clone())
    }
}
