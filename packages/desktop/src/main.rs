use dioxus::prelude::*;
use drawer::{ConfigError, DrawerConfig};

use views::{About, AppLayout, Showcase};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Showcase {},
        #[route("/about")]
        About {},
}

fn main() {
    dioxus::launch(App);
}

/// Read `drawer.toml` from the working directory. A missing file means
/// defaults; a malformed one is reported and ignored.
fn load_config() -> DrawerConfig {
    let path = DrawerConfig::filename();
    match DrawerConfig::load(path) {
        Ok(config) => {
            tracing::info!(path, "loaded drawer config");
            config
        }
        Err(ConfigError::Io { .. }) => DrawerConfig::default(),
        Err(err) => {
            tracing::warn!(path, error = %err, "ignoring drawer config");
            DrawerConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        Router::<Route> {}
    }
}
