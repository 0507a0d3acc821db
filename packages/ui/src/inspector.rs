//! Live view of the drawer stack: depth, ids and per-entry controls.

use std::rc::Rc;

use dioxus::prelude::*;
use drawer::{DrawerStore, Layering};

use crate::element::EntryRef;
use crate::hooks::{use_drawer_config, use_drawer_stack};
use crate::icons::{FaLayerGroup, FaXmark};
use crate::sheets::use_external_sheet_count;
use crate::viewport::use_viewport_layout;
use crate::Icon;

/// Toggle button plus a panel listing every live drawer, top-most first.
///
/// Must be rendered inside a `DrawerProvider`.
#[component]
pub fn StackInspector() -> Element {
    let store = use_drawer_stack();
    let mut open = use_signal(|| false);
    let entries = store.snapshot();
    let depth = entries.len();

    rsx! {
        button {
            class: "stack-inspector-toggle",
            title: "Drawer stack",
            onclick: move |_| {
                let visible = open();
                open.set(!visible);
            },
            Icon { icon: FaLayerGroup, width: 12, height: 12 }
            " {depth}"
        }
        if open() {
            div {
                class: "stack-inspector",
                div {
                    class: "stack-inspector-header",
                    span { "Drawer stack ({depth})" }
                    div {
                        class: "stack-inspector-actions",
                        button {
                            disabled: depth == 0,
                            onclick: move |_| {
                                store.dismiss_top();
                            },
                            "Dismiss top"
                        }
                        button {
                            disabled: depth == 0,
                            onclick: move |_| {
                                store.dismiss_all();
                            },
                            "Dismiss all"
                        }
                        button {
                            onclick: move |_| open.set(false),
                            "Close"
                        }
                    }
                }
                if entries.is_empty() {
                    p { class: "stack-inspector-empty", "No drawers open" }
                }
                ol {
                    class: "stack-inspector-entries",
                    for (index, entry) in entries.iter().enumerate().rev() {
                        InspectorRow {
                            key: "{entry.id}",
                            entry: EntryRef(Rc::clone(entry)),
                            index: index,
                            top: index + 1 == depth,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InspectorRow(entry: EntryRef, index: usize, top: bool) -> Element {
    let store = use_drawer_stack();
    let config = use_drawer_config();
    let layout = use_viewport_layout();
    let external_sheets = use_external_sheet_count();

    let id = entry.0.id.clone();
    let options = entry.0.options;
    let position = options.position.as_str();
    let z_index = Layering::from(&config.layering).for_layout(layout, index, external_sheets);
    let outside = if options.click_outside_to_dismiss {
        "outside click closes"
    } else {
        "outside click pulses"
    };

    rsx! {
        li {
            class: if top { "stack-inspector-entry top" } else { "stack-inspector-entry" },
            code { "{entry.0.id}" }
            span { class: "stack-inspector-meta", " {position} · z {z_index} · {outside}" }
            button {
                class: "drawer-close",
                title: "Dismiss",
                onclick: move |_| {
                    store.dismiss(&id);
                },
                Icon { icon: FaXmark, width: 10, height: 10 }
            }
        }
    }
}
