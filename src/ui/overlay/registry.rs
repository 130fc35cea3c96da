// SPDX-License-Identifier: MPL-2.0
//! Lookup of overlay surfaces by identifier.

use super::surface::{OverlayKind, OverlaySurface};
use std::collections::HashMap;

/// Normalizes a trigger target (`"#id"` or `"id"`) to a bare identifier.
///
/// Returns `None` for empty targets.
#[must_use]
pub fn normalize_target(target: &str) -> Option<&str> {
    let id = target.trim();
    let id = id.strip_prefix('#').unwrap_or(id);
    (!id.is_empty()).then_some(id)
}

/// Overlay surfaces known to the application, keyed by identifier.
///
/// Surfaces are registered once and live for the whole session; the stack
/// manager only changes their phase.
#[derive(Debug)]
pub struct Registry<S> {
    surfaces: HashMap<String, S>,
    /// Registration order, used for stable iteration.
    order: Vec<String>,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self {
            surfaces: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<S: OverlaySurface> Registry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface, returning the one it replaced.
    pub fn register(&mut self, surface: S) -> Option<S> {
        let id = surface.id().to_string();
        let previous = self.surfaces.insert(id.clone(), surface);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Looks a surface up by target; `"#id"` and `"id"` are equivalent.
    #[must_use]
    pub fn get(&self, target: &str) -> Option<&S> {
        normalize_target(target).and_then(|id| self.surfaces.get(id))
    }

    pub fn get_mut(&mut self, target: &str) -> Option<&mut S> {
        normalize_target(target).and_then(move |id| self.surfaces.get_mut(id))
    }

    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.get(target).is_some()
    }

    #[must_use]
    pub fn kind_of(&self, target: &str) -> Option<OverlayKind> {
        self.get(target).map(OverlaySurface::kind)
    }

    /// Iterates surfaces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.order.iter().filter_map(|id| self.surfaces.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
