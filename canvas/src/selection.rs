//! Selection set and module highlight, kept mutually exclusive.
//!
//! The selection and the module highlight are never both active: any mutation
//! that leaves the selection non-empty clears the highlight, and setting a
//! highlight clears the selection. Callers cannot break this because the
//! fields are private and only the operations below mutate them.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::doc::EntityId;

/// What a selection mutation actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Changed {
    pub selection: bool,
    pub highlight: bool,
}

impl Changed {
    #[must_use]
    pub fn any(self) -> bool {
        self.selection || self.highlight
    }
}

/// Selected entity ids plus the module highlight; setting one clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<EntityId>,
    module: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Selected ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.ids.iter()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// The selected entity when exactly one is selected.
    #[must_use]
    pub fn unique(&self) -> Option<&EntityId> {
        if self.ids.len() == 1 { self.ids.iter().next() } else { None }
    }

    /// Whether the selection is exactly `{id}`.
    #[must_use]
    pub fn is_sole(&self, id: &str) -> bool {
        self.unique().is_some_and(|u| u == id)
    }

    /// The highlighted module, if any.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    // --- Mutations ---

    /// Make `{id}` the whole selection.
    pub fn replace_with_single(&mut self, id: &str) -> Changed {
        let changed = Changed { selection: !self.is_sole(id), highlight: self.module.is_some() };
        if changed.selection {
            self.ids.clear();
            self.ids.insert(id.to_owned());
        }
        self.module = None;
        changed
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle_membership(&mut self, id: &str) -> Changed {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_owned());
        }
        let highlight = !self.ids.is_empty() && self.module.take().is_some();
        Changed { selection: true, highlight }
    }

    /// Empty the selection and drop the highlight.
    pub fn clear_all(&mut self) -> Changed {
        let changed = Changed { selection: !self.ids.is_empty(), highlight: self.module.is_some() };
        self.ids.clear();
        self.module = None;
        changed
    }

    /// Highlight `module`, clearing the selection.
    pub fn highlight_module(&mut self, module: &str) -> Changed {
        let changed = Changed {
            selection: !self.ids.is_empty(),
            highlight: self.module.as_deref() != Some(module),
        };
        self.ids.clear();
        self.module = Some(module.to_owned());
        changed
    }
}
