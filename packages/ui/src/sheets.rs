//! Registry of bottom sheets opened outside the drawer stack.
//!
//! Drawer sheets are layered above every sheet registered here.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct SheetRegistry {
    open: Signal<usize>,
}

impl SheetRegistry {
    pub(crate) fn new(open: Signal<usize>) -> Self {
        Self { open }
    }
}

/// Number of external sheets currently mounted.
pub fn use_external_sheet_count() -> usize {
    let registry = use_context::<SheetRegistry>();
    (registry.open)()
}

/// Count the calling component as an open external sheet while it is mounted.
pub fn use_register_sheet() {
    let registry = use_context::<SheetRegistry>();
    use_effect(move || {
        let mut open = registry.open;
        *open.write() += 1;
    });
    use_drop(move || {
        let mut open = registry.open;
        if let Ok(mut n) = open.try_write() {
            *n = n.saturating_sub(1);
        };
    });
}
