//! # Drawer store: the present/dismiss API over a shared stack
//!
//! [`DrawerStore`] is implemented by anything that can hand out a mutable
//! [`DrawerStack`] for the duration of a closure. The UI crate implements it
//! over a Dioxus signal; tests use a plain `RefCell`.
//!
//! Every removal path goes through the same two steps: the entry leaves the
//! stack inside `update`, and only after `update` returns is its `on_close`
//! callback run. Callbacks may therefore present or dismiss other drawers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::id::{DrawerId, IdSequence};
use crate::models::{BackdropOutcome, DrawerEntry, DrawerRequest};
use crate::stack::{DrawerStack, Entries};

pub trait DrawerStore<V> {
    /// Run `f` with exclusive access to the stack.
    fn update<R>(&self, f: impl FnOnce(&mut DrawerStack<V>) -> R) -> R;

    /// Run `f` with shared access to the stack.
    fn read<R>(&self, f: impl FnOnce(&DrawerStack<V>) -> R) -> R;

    fn present(&self, ids: &IdSequence, request: DrawerRequest<V>) -> DrawerId {
        let (id, replaced) = self.update(|stack| stack.push(ids, request));
        if let Some(old) = replaced {
            tracing::debug!(id = %id, "drawer replaced by explicit id");
            old.notify_closed();
        }
        tracing::debug!(id = %id, depth = self.read(|s| s.len()), "drawer presented");
        id
    }

    /// Remove the drawer with `id`. Returns false when it was not live.
    fn dismiss(&self, id: &DrawerId) -> bool {
        match self.update(|stack| stack.remove(id)) {
            Some(entry) => {
                tracing::debug!(id = %id, "drawer dismissed");
                entry.notify_closed();
                true
            }
            None => false,
        }
    }

    /// Remove the front-most drawer. Returns false on an empty stack.
    fn dismiss_top(&self) -> bool {
        match self.update(|stack| stack.pop()) {
            Some(entry) => {
                tracing::debug!(id = %entry.id, "top drawer dismissed");
                entry.notify_closed();
                true
            }
            None => false,
        }
    }

    /// Remove every drawer, notifying them top-most first. Returns how many
    /// were removed.
    fn dismiss_all(&self) -> usize {
        let removed = self.update(|stack| stack.clear());
        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "all drawers dismissed");
        }
        for entry in &removed {
            entry.notify_closed();
        }
        removed.len()
    }

    /// Handle a click on the backdrop of `id`.
    fn backdrop_click(&self, id: &DrawerId) -> BackdropOutcome {
        let Some(dismissable) = self.read(|s| s.get(id).map(|e| e.options.click_outside_to_dismiss))
        else {
            return BackdropOutcome::Missing;
        };
        if dismissable && self.dismiss(id) {
            BackdropOutcome::Dismissed
        } else {
            BackdropOutcome::Notice
        }
    }

    fn snapshot(&self) -> Entries<V> {
        self.read(|s| s.snapshot())
    }

    fn get(&self, id: &DrawerId) -> Option<Rc<DrawerEntry<V>>> {
        self.read(|s| s.get(id))
    }

    /// Hand out an id sequence with a scope prefix unique to this store.
    ///
    /// The default takes the counter kept in the stack. Implementations that
    /// allocate scopes during render may keep their own counter instead, as
    /// long as every prefix they return is unique for the store.
    fn allocate_scope(&self) -> IdSequence {
        self.update(|s| s.allocate_scope())
    }
}

impl<V> DrawerStore<V> for RefCell<DrawerStack<V>> {
    fn update<R>(&self, f: impl FnOnce(&mut DrawerStack<V>) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read<R>(&self, f: impl FnOnce(&DrawerStack<V>) -> R) -> R {
        f(&self.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use crate::route::RouteGuard;
    use std::cell::Cell;

    type Store = RefCell<DrawerStack<&'static str>>;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move || c.set(c.get() + 1))
    }

    fn titles(store: &Store) -> Vec<&'static str> {
        store.snapshot().iter().map(|e| e.view).collect()
    }

    #[test]
    fn test_present_twice_from_same_scope() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let a = store.present(&ids, DrawerRequest::new("A"));
        let b = store.present(&ids, DrawerRequest::new("B"));
        assert_eq!(titles(&store), vec!["A", "B"]);
        assert_ne!(a, b);
        let prefix = format!("{}-", ids.scope());
        assert!(a.as_str().starts_with(&prefix));
        assert!(b.as_str().starts_with(&prefix));
    }

    #[test]
    fn test_dismiss_middle() {
        let store = Store::default();
        let ids = store.allocate_scope();
        store.present(&ids, DrawerRequest::new("A"));
        let b = store.present(&ids, DrawerRequest::new("B"));
        store.present(&ids, DrawerRequest::new("C"));
        assert!(store.dismiss(&b));
        assert_eq!(titles(&store), vec!["A", "C"]);
    }

    #[test]
    fn test_dismiss_same_id_twice_is_idempotent() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let (closed, on_close) = counter();
        store.present(&ids, DrawerRequest::new("A"));
        let b = store.present(&ids, DrawerRequest::new("B").on_close(on_close));
        assert!(store.dismiss(&b));
        assert!(!store.dismiss(&b));
        assert_eq!(titles(&store), vec!["A"]);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_dismiss_top_and_empty() {
        let store = Store::default();
        let ids = store.allocate_scope();
        assert!(!store.dismiss_top());
        store.present(&ids, DrawerRequest::new("A"));
        store.present(&ids, DrawerRequest::new("B"));
        assert!(store.dismiss_top());
        assert_eq!(titles(&store), vec!["A"]);
    }

    #[test]
    fn test_dismiss_all_notifies_every_entry() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let order = Rc::new(RefCell::new(Vec::new()));
        for t in ["A", "B", "C"] {
            let order = Rc::clone(&order);
            store.present(&ids, DrawerRequest::new(t).on_close(move || order.borrow_mut().push(t)));
        }
        assert_eq!(store.dismiss_all(), 3);
        assert!(store.snapshot().is_empty());
        assert_eq!(*order.borrow(), vec!["C", "B", "A"]);
        assert_eq!(store.dismiss_all(), 0);
    }

    #[test]
    fn test_on_close_runs_after_removal() {
        let store = Rc::new(Store::default());
        let ids = store.allocate_scope();
        let seen = Rc::new(Cell::new(usize::MAX));
        let (s, st) = (Rc::clone(&seen), Rc::clone(&store));
        let a = store.present(&ids, DrawerRequest::new("A").on_close(move || s.set(st.snapshot().len())));
        store.dismiss(&a);
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_on_close_may_reenter_store() {
        let store = Rc::new(Store::default());
        let ids = Rc::new(store.allocate_scope());
        let (st, ids2) = (Rc::clone(&store), Rc::clone(&ids));
        let a = store.present(
            &ids,
            DrawerRequest::new("A").on_close(move || {
                st.present(&ids2, DrawerRequest::new("follow-up"));
            }),
        );
        store.dismiss(&a);
        assert_eq!(titles(&store), vec!["follow-up"]);
    }

    #[test]
    fn test_backdrop_click_without_dismiss_notices() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let (closed, on_close) = counter();
        let a = store.present(&ids, DrawerRequest::new("A").on_close(on_close));
        assert_eq!(store.backdrop_click(&a), BackdropOutcome::Notice);
        assert_eq!(titles(&store), vec!["A"]);
        assert_eq!(closed.get(), 0);
    }

    #[test]
    fn test_backdrop_click_with_dismiss_closes_once() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let (closed, on_close) = counter();
        let a = store.present(
            &ids,
            DrawerRequest::new("A")
                .click_outside_to_dismiss(true)
                .position(Position::Right)
                .on_close(on_close),
        );
        assert_eq!(store.backdrop_click(&a), BackdropOutcome::Dismissed);
        assert!(store.snapshot().is_empty());
        assert_eq!(closed.get(), 1);
        assert_eq!(store.backdrop_click(&a), BackdropOutcome::Missing);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_explicit_id_collision_closes_previous() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let (closed, on_close) = counter();
        store.present(&ids, DrawerRequest::new("A").id("x").on_close(on_close));
        store.present(&ids, DrawerRequest::new("B").id("x"));
        assert_eq!(titles(&store), vec!["B"]);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_route_change_clears_stack() {
        let store = Store::default();
        let ids = store.allocate_scope();
        let mut guard = RouteGuard::default();
        assert!(!guard.observe("/notes"));
        store.present(&ids, DrawerRequest::new("A"));
        store.present(&ids, DrawerRequest::new("B"));
        if guard.observe("/settings") {
            store.dismiss_all();
        }
        assert!(store.snapshot().is_empty());
    }
}
