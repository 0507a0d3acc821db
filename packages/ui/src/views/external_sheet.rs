use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::{use_register_sheet, Icon};

/// A bottom sheet managed outside the drawer stack.
///
/// It registers itself while mounted so drawer sheets open above it.
#[component]
pub fn ExternalSheet(on_close: EventHandler<()>, on_open_drawer: EventHandler<()>) -> Element {
    use_register_sheet();

    rsx! {
        div {
            class: "external-sheet-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "external-sheet",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "external-sheet-header",
                    span { "External sheet" }
                    button {
                        class: "drawer-close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
                p { "This sheet is not part of the drawer stack. Drawers opened from here still appear above it." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_open_drawer.call(()),
                    "Open a drawer"
                }
            }
        }
    }
}
