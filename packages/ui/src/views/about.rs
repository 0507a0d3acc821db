use dioxus::prelude::*;

use crate::icons::FaCircleInfo;
use crate::{drawer_request, use_drawer, Icon};

/// Explains the drawer stack and shows that navigating clears it.
#[component]
pub fn AboutView(on_navigate_showcase: EventHandler<()>) -> Element {
    let drawers = use_drawer();

    let open_route_demo = move |_| {
        let request = drawer_request("Leaving this page", move |_| {
            rsx! {
                p { "Drawers belong to the page that opened them. Navigating away closes every open drawer." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_navigate_showcase.call(()),
                    "Go to showcase"
                }
            }
        })
        .on_close(|| tracing::info!("route demo drawer closed"));
        let handle = drawers.present(request);
        tracing::info!(id = %handle.id(), "route demo drawer presented");
    };

    rsx! {
        div {
            class: "about",
            h1 {
                Icon { icon: FaCircleInfo, width: 18, height: 18 }
                " About"
            }
            p {
                "Any component can push a drawer onto a single shared stack. The newest drawer sits on top, "
                "and closing it reveals the one below."
            }
            ul {
                li { "Wide windows get centered dialogs. Narrow windows and phones get bottom sheets." }
                li { "Clicking the backdrop of a dialog that opts out of outside dismissal makes it pulse." }
                li { "Changing route dismisses everything that is still open." }
            }
            button {
                class: "btn btn-primary",
                onclick: open_route_demo,
                "Open a drawer, then navigate"
            }
        }
    }
}
