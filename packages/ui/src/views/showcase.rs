use dioxus::prelude::*;
use drawer::{DrawerRequest, Position};

use crate::icons::{FaLayerGroup, FaWandMagicSparkles};
use crate::{drawer_request, use_drawer, DrawerTitle, DrawerView, Icon, UseDrawer};

use super::ExternalSheet;

fn present_logged(drawers: &UseDrawer, request: DrawerRequest<DrawerView>, label: &'static str) {
    let request = request.on_close(move || tracing::info!(label, "drawer closed"));
    let handle = drawers.present(request);
    tracing::info!(id = %handle.id(), label, "drawer presented");
}

/// A dialog that can open another copy of itself on top.
fn nested(drawers: UseDrawer, depth: u32) -> DrawerRequest<DrawerView> {
    drawer_request(format!("Level {depth}"), move |handle| {
        let drawers = drawers.clone();
        let top = drawers.clone();
        let all = drawers.clone();
        let next = depth + 1;
        rsx! {
            p { "This drawer is {depth} deep. Each level stacks above the previous one." }
            div {
                class: "drawer-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        present_logged(&drawers, nested(drawers.clone(), next), "nested level");
                    },
                    "Open level {next}"
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        top.dismiss_top();
                    },
                    "Dismiss top"
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        all.dismiss_all();
                    },
                    "Dismiss all"
                }
                button {
                    class: "btn",
                    onclick: move |_| handle.dismiss(),
                    "Close this one"
                }
            }
        }
    })
}

#[component]
pub fn ShowcaseView() -> Element {
    let drawers = use_drawer();
    let mut show_sheet = use_signal(|| false);
    let depth = drawers.stack().len();

    let basic = drawers.clone();
    let open_basic = move |_| {
        let request = drawer_request("Basic dialog", |handle| {
            rsx! {
                p { "Clicking the backdrop will not close this dialog; it pulses instead." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| handle.dismiss(),
                    "Done"
                }
            }
        });
        present_logged(&basic, request, "basic dialog");
    };

    let panel = drawers.clone();
    let open_panel = move |_| {
        let request = drawer_request("Filters", |_| {
            rsx! {
                p { "A side panel. Click outside to dismiss it." }
                ul {
                    li { "Recently opened" }
                    li { "Shared with me" }
                    li { "Archived" }
                }
            }
        })
        .position(Position::Right)
        .click_outside_to_dismiss(true);
        present_logged(&panel, request, "filters panel");
    };

    let stacked = drawers.clone();
    let open_nested = move |_| {
        present_logged(&stacked, nested(stacked.clone(), 1), "nested level");
    };

    let custom = drawers.clone();
    let open_custom = move |_| {
        let view = DrawerView::new(
            DrawerTitle::render(|| rsx! {
                h2 {
                    class: "drawer-title",
                    Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                    " Custom chrome"
                }
            }),
            |_| rsx! { p { "The container below replaces the default title bar and close button." } },
        )
        .with_container(|handle, body| {
            rsx! {
                div {
                    class: "custom-card",
                    {body}
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| handle.dismiss(),
                        "Got it"
                    }
                }
            }
        });
        let request = DrawerRequest::from(view)
            .position(Position::Top)
            .click_outside_to_dismiss(true);
        present_logged(&custom, request, "custom container");
    };

    let single = drawers.clone();
    let open_singleton = move |_| {
        let request = drawer_request("Settings", |_| {
            rsx! { p { "Opened with the fixed id \"settings\": opening it again replaces it." } }
        })
        .id("settings");
        present_logged(&single, request, "settings");
    };

    rsx! {
        div {
            class: "showcase",
            h1 { "Drawers" }
            p {
                class: "showcase-depth",
                Icon { icon: FaLayerGroup, width: 14, height: 14 }
                " {depth} open"
            }
            div {
                class: "showcase-grid",
                button { class: "btn", onclick: open_basic, "Basic dialog" }
                button { class: "btn", onclick: open_panel, "Side panel" }
                button { class: "btn", onclick: open_nested, "Nested stack" }
                button { class: "btn", onclick: open_custom, "Custom container" }
                button { class: "btn", onclick: open_singleton, "Fixed id" }
                button {
                    class: "btn",
                    onclick: move |_| show_sheet.set(true),
                    "External sheet"
                }
            }
        }

        if show_sheet() {
            ExternalSheet {
                on_close: move |_| show_sheet.set(false),
                on_open_drawer: move |_| {
                    present_logged(&drawers, nested(drawers.clone(), 1), "drawer over sheet");
                },
            }
        }
    }
}
