pub mod config;
pub mod error;
pub mod id;
pub mod layout;
pub mod models;
pub mod motion;
pub mod presence;
pub mod route;
pub mod stack;
pub mod store;

pub use config::DrawerConfig;
pub use error::ConfigError;
pub use id::{DrawerId, IdSequence};
pub use layout::{Layering, Layout};
pub use models::{BackdropOutcome, DrawerEntry, DrawerOptions, DrawerRequest, OnClose, Position};
pub use motion::{MotionStyle, NoticePulse, Transition};
pub use presence::{Phase, Presence, PresenceList, Rendered};
pub use route::RouteGuard;
pub use stack::DrawerStack;
pub use store::DrawerStore;
