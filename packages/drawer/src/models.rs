use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::id::DrawerId;

/// Callback run once after a drawer leaves the stack.
pub type OnClose = Rc<dyn Fn()>;

/// Where a dialog is anchored on large viewports. Sheets ignore it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Center,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Center => "center",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerOptions {
    pub position: Position,
    /// A backdrop click dismisses the drawer instead of pulsing it.
    pub click_outside_to_dismiss: bool,
}

/// What a caller hands to `present`. `V` is the renderable payload.
pub struct DrawerRequest<V> {
    pub id: Option<DrawerId>,
    pub view: V,
    pub options: DrawerOptions,
    pub on_close: Option<OnClose>,
}

impl<V> DrawerRequest<V> {
    pub fn new(view: V) -> Self {
        Self {
            id: None,
            view,
            options: DrawerOptions::default(),
            on_close: None,
        }
    }

    pub fn id(mut self, id: impl Into<DrawerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.options.position = position;
        self
    }

    pub fn click_outside_to_dismiss(mut self, enabled: bool) -> Self {
        self.options.click_outside_to_dismiss = enabled;
        self
    }

    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(f));
        self
    }
}

/// A live drawer. Never mutated after it enters the stack.
pub struct DrawerEntry<V> {
    pub id: DrawerId,
    pub view: V,
    pub options: DrawerOptions,
    pub(crate) on_close: Option<OnClose>,
}

impl<V> DrawerEntry<V> {
    pub(crate) fn from_request(id: DrawerId, request: DrawerRequest<V>) -> Self {
        Self {
            id,
            view: request.view,
            options: request.options,
            on_close: request.on_close,
        }
    }

    pub fn has_on_close(&self) -> bool {
        self.on_close.is_some()
    }

    pub(crate) fn notify_closed(&self) {
        if let Some(on_close) = &self.on_close {
            on_close();
        }
    }
}

impl<V> fmt::Debug for DrawerEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerEntry")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

/// Result of a click on a drawer's backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropOutcome {
    /// The drawer was removed from the stack.
    Dismissed,
    /// The drawer stays; play the notice pulse.
    Notice,
    /// No live drawer has that id.
    Missing,
}
