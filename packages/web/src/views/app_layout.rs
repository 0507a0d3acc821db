use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>().to_string();

    use_effect(use_reactive((&route,), |(route,)| {
        tracing::info!(%route, "navigated");
    }));

    let navigate_showcase = move |_: ()| {
        nav.push(Route::Showcase {});
    };

    let navigate_about = move |_: ()| {
        nav.push(Route::About {});
    };

    rsx! {
        ui::views::DrawerLayoutView {
            route: route,
            on_navigate_showcase: navigate_showcase,
            on_navigate_about: navigate_about,
            Outlet::<Route> {}
        }
    }
}
