//! Selection registry: the ordered list of interactive slots for one frame
//!
//! The registry is rebuilt every frame from the visible part of the view
//! tree (see [`crate::ui::layout::collect`]) but persists across frames so
//! the previously chosen index survives the rebuild. Slot position *is* the
//! selection index: the n-th enabled button in document order owns slot n.
//!
//! All operations are total. Selecting on an empty registry is a no-op and
//! action lookups on an empty registry return `None`.

use alloc::vec::Vec;
use log::debug;

/// Ordered interactive slots plus the clamped current selection.
#[derive(Debug, Clone)]
pub struct SelectionRegistry<A> {
    slots: Vec<A>,
    selected: usize,
}

impl<A> Default for SelectionRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> SelectionRegistry<A> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            selected: 0,
        }
    }

    /// Drop every slot, keeping the selected index for re-clamping.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Append a slot and return its index.
    pub fn register(&mut self, intent: A) -> usize {
        self.slots.push(intent);
        self.slots.len() - 1
    }

    /// Select `index`, clamped to the registered range.
    ///
    /// Does nothing when no slot is registered.
    pub fn select(&mut self, index: usize) {
        if self.slots.is_empty() {
            return;
        }
        self.selected = index.min(self.slots.len() - 1);
    }

    /// Pull a stale selection back into range after a rebuild.
    ///
    /// Shrinking moves the selection to the last slot (or 0 when empty);
    /// a selection that is still in range is left untouched.
    pub fn clamp(&mut self) {
        let clamped = self.selected.min(self.slots.len().saturating_sub(1));
        if clamped != self.selected {
            debug!(
                "Selection {} out of range for {} slots, clamped to {}",
                self.selected,
                self.slots.len(),
                clamped
            );
            self.selected = clamped;
        }
    }

    /// Intent bound to the selected slot.
    pub fn current_action(&self) -> Option<&A> {
        self.slots.get(self.selected)
    }

    /// Whether slot `index` is the current selection.
    pub fn is_selected(&self, index: usize) -> bool {
        !self.slots.is_empty() && self.selected == index
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selected index, or `None` when nothing can be activated.
    pub fn selection(&self) -> Option<usize> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[A] {
        &self.slots
    }
}
