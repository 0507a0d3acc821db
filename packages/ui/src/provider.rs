use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use drawer::{DrawerConfig, DrawerId, DrawerStack, DrawerStore, PresenceList, Rendered};

use crate::element::{DrawerElement, EntryRef};
use crate::hooks::{use_drawer_stack, use_route_guard, DrawerStackHandle};
use crate::sheets::SheetRegistry;
use crate::view::DrawerView;

const DRAWER_CSS: Asset = asset!("/assets/drawer.css");

/// Owns the drawer stack and renders it above `children`.
///
/// Pass the current route as `route` to clear the stack on navigation.
#[component]
pub fn DrawerProvider(
    #[props(default)] config: DrawerConfig,
    /// Current route path. Every change after the first dismisses all drawers.
    #[props(default)]
    route: String,
    children: Element,
) -> Element {
    let stack = use_signal(DrawerStack::<DrawerView>::new);
    let scopes = use_hook(|| CopyValue::new(0u64));
    use_context_provider(|| DrawerStackHandle::new(stack, scopes));
    use_context_provider(|| SheetRegistry::new(Signal::new(0)));
    use_context_provider(|| config.clone());

    use_route_guard(route);

    rsx! {
        document::Stylesheet { href: DRAWER_CSS }
        {children}
        DrawerStackView {}
    }
}

/// Renders every live drawer in stack order, plus the ones still playing
/// their exit animation.
#[component]
pub fn DrawerStackView() -> Element {
    let store = use_drawer_stack();
    let mut client_ready = use_signal(|| false);
    let presence = use_hook(|| Rc::new(RefCell::new(PresenceList::<DrawerView>::new())));
    let mut exits = use_signal(|| 0u64);

    // Only flips on the client, after the first render.
    use_effect(move || client_ready.set(true));

    let finished = presence.clone();
    let on_exited = use_callback(move |id: DrawerId| {
        if finished.borrow_mut().finish_exit(&id) {
            exits += 1;
        }
    });

    let live = store.snapshot();
    // Re-render when an exit animation finishes.
    exits.read();
    if !client_ready() {
        return rsx! {};
    }

    let rendered: Vec<Rendered<DrawerView>> = presence.borrow_mut().reconcile(&live).to_vec();

    rsx! {
        div {
            class: "drawer-stack",
            for (index, item) in rendered.into_iter().enumerate() {
                DrawerElement {
                    key: "{item.entry.id}",
                    entry: EntryRef(Rc::clone(&item.entry)),
                    index: index,
                    exiting: item.exiting,
                    on_exited: on_exited,
                }
            }
        }
    }
}
