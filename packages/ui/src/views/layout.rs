use dioxus::prelude::*;
use drawer::DrawerConfig;

use crate::{DrawerProvider, StackInspector};

/// Shared app shell.
///
/// Platform packages pass the current route, navigation callbacks and an
/// `Outlet` as children. Drawers are cleared whenever `route` changes.
#[component]
pub fn DrawerLayoutView(
    /// Current route path, e.g. "/about".
    route: String,
    /// The router outlet for child routes.
    children: Element,
    on_navigate_showcase: EventHandler<()>,
    on_navigate_about: EventHandler<()>,
    #[props(default)] config: DrawerConfig,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::APP_CSS }
        DrawerProvider {
            config: config,
            route: route.clone(),
            header {
                class: "app-header",
                span { class: "app-title", "Drawer Stack" }
                nav {
                    class: "app-nav",
                    button {
                        class: if route == "/" { "app-nav-item active" } else { "app-nav-item" },
                        onclick: move |_| on_navigate_showcase.call(()),
                        "Showcase"
                    }
                    button {
                        class: if route == "/about" { "app-nav-item active" } else { "app-nav-item" },
                        onclick: move |_| on_navigate_about.call(()),
                        "About"
                    }
                }
                StackInspector {}
            }
            main {
                class: "app-main",
                {children}
            }
        }
    }
}
