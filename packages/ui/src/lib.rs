//! This crate contains all shared UI for the workspace: the drawer provider,
//! its hooks, and the demo views the platform packages route to.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use drawer::{DrawerConfig, DrawerId, DrawerRequest, Position};

mod hooks;
pub use hooks::{
    use_dismiss_on_route_change, use_drawer, use_drawer_config, use_drawer_stack,
    use_route_guard, DrawerHandle, DrawerStackHandle, UseDrawer,
};

mod view;
pub use view::{drawer_request, DrawerTitle, DrawerView};

mod motion;
pub use motion::{use_motion, Motion};

mod viewport;
pub use viewport::use_viewport_layout;

mod sheets;
pub use sheets::{use_external_sheet_count, use_register_sheet, SheetRegistry};

mod element;
pub use element::DrawerElement;

mod inspector;
pub use inspector::StackInspector;

mod provider;
pub use provider::{DrawerProvider, DrawerStackView};

pub mod views;

#[cfg(test)]
mod testing;

pub const APP_CSS: Asset = asset!("/assets/app.css");

