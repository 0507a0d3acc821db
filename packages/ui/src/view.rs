//! Renderable payload carried by each drawer in the stack.

use std::rc::Rc;

use dioxus::prelude::*;
use drawer::DrawerRequest;

use crate::hooks::DrawerHandle;

pub type RenderContent = Rc<dyn Fn(DrawerHandle) -> Element>;
pub type RenderContainer = Rc<dyn Fn(DrawerHandle, Element) -> Element>;

/// Drawer title: literal text or a render function.
#[derive(Clone)]
pub enum DrawerTitle {
    Text(String),
    Render(Rc<dyn Fn() -> Element>),
}

impl DrawerTitle {
    pub fn render(f: impl Fn() -> Element + 'static) -> Self {
        DrawerTitle::Render(Rc::new(f))
    }
}

impl From<&str> for DrawerTitle {
    fn from(s: &str) -> Self {
        DrawerTitle::Text(s.to_string())
    }
}

impl From<String> for DrawerTitle {
    fn from(s: String) -> Self {
        DrawerTitle::Text(s)
    }
}

#[derive(Clone)]
pub struct DrawerView {
    pub title: DrawerTitle,
    /// Called with a handle that dismisses this drawer.
    pub content: RenderContent,
    /// Replaces the default chrome (title bar, divider, close button). Receives
    /// the rendered content.
    pub container: Option<RenderContainer>,
}

impl DrawerView {
    pub fn new(
        title: impl Into<DrawerTitle>,
        content: impl Fn(DrawerHandle) -> Element + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            content: Rc::new(content),
            container: None,
        }
    }

    pub fn with_container(mut self, f: impl Fn(DrawerHandle, Element) -> Element + 'static) -> Self {
        self.container = Some(Rc::new(f));
        self
    }
}

impl From<DrawerView> for DrawerRequest<DrawerView> {
    fn from(view: DrawerView) -> Self {
        DrawerRequest::new(view)
    }
}

/// Shorthand for `DrawerRequest::new(DrawerView::new(title, content))`.
pub fn drawer_request(
    title: impl Into<DrawerTitle>,
    content: impl Fn(DrawerHandle) -> Element + 'static,
) -> DrawerRequest<DrawerView> {
    DrawerRequest::new(DrawerView::new(title, content))
}
