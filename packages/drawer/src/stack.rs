//! # Drawer stack: ordered, copy-on-write list of live drawers
//!
//! Insertion order is presentation order: the last entry is front-most and
//! gets the highest z-index. Every mutation builds a fresh `Rc<[..]>` slice,
//! so a [`DrawerStack::snapshot`] held by the renderer never changes under it.
//!
//! The stack only moves entries around; firing `on_close` for removed entries
//! is the job of [`crate::DrawerStore`], after the mutation is committed.
//!
//! ## Invariants
//!
//! - Ids are unique among live entries.
//! - Entries are never mutated in place, only appended or removed.
//! - Removing an unknown id, or popping an empty stack, is a no-op.

use std::rc::Rc;

use crate::id::{DrawerId, IdSequence};
use crate::models::{DrawerEntry, DrawerRequest};

pub type Entries<V> = Rc<[Rc<DrawerEntry<V>>]>;

pub struct DrawerStack<V> {
    entries: Entries<V>,
    next_scope: u64,
}

impl<V> Default for DrawerStack<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new().into(),
            next_scope: 0,
        }
    }
}

impl<V> DrawerStack<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an id sequence with a scope prefix no other caller of this
    /// stack has received. Backs the default [`crate::DrawerStore::allocate_scope`].
    pub fn allocate_scope(&mut self) -> IdSequence {
        self.next_scope += 1;
        IdSequence::new(format!("drawer-{}", self.next_scope))
    }

    // --- Queries ---

    pub fn snapshot(&self) -> Entries<V> {
        Rc::clone(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &DrawerId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &DrawerId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn get(&self, id: &DrawerId) -> Option<Rc<DrawerEntry<V>>> {
        self.entries.iter().find(|e| &e.id == id).cloned()
    }

    pub fn top_id(&self) -> Option<DrawerId> {
        self.entries.last().map(|e| e.id.clone())
    }

    pub fn ids(&self) -> Vec<DrawerId> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    // --- Mutations ---

    /// Append a drawer. A request without an id takes the next id from `ids`.
    ///
    /// If an explicit id is already live, that entry is removed first and
    /// returned so the caller can notify it.
    pub fn push(
        &mut self,
        ids: &IdSequence,
        request: DrawerRequest<V>,
    ) -> (DrawerId, Option<Rc<DrawerEntry<V>>>) {
        let id = request.id.clone().unwrap_or_else(|| ids.next());
        let replaced = self.remove(&id);
        let entry = Rc::new(DrawerEntry::from_request(id.clone(), request));
        self.entries = self
            .entries
            .iter()
            .cloned()
            .chain(std::iter::once(entry))
            .collect();
        (id, replaced)
    }

    pub fn remove(&mut self, id: &DrawerId) -> Option<Rc<DrawerEntry<V>>> {
        let idx = self.index_of(id)?;
        let removed = Rc::clone(&self.entries[idx]);
        self.entries = self
            .entries
            .iter()
            .filter(|e| &e.id != id)
            .cloned()
            .collect();
        Some(removed)
    }

    pub fn pop(&mut self) -> Option<Rc<DrawerEntry<V>>> {
        let (top, rest) = self.entries.split_last()?;
        let top = Rc::clone(top);
        self.entries = rest.iter().cloned().collect();
        Some(top)
    }

    /// Empty the stack, returning the removed entries top-most first.
    pub fn clear(&mut self) -> Vec<Rc<DrawerEntry<V>>> {
        let old = std::mem::replace(&mut self.entries, Vec::new().into());
        old.iter().rev().cloned().collect()
    }
}
