//! Viewport classification: sheets on small screens, dialogs elsewhere.

use dioxus::prelude::*;
use drawer::config::ViewportConfig;
use drawer::Layout;

use crate::hooks::use_drawer_config;

#[cfg(target_arch = "wasm32")]
fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn initial_layout(viewport: &ViewportConfig) -> Layout {
    #[cfg(target_arch = "wasm32")]
    {
        window_width()
            .map(|w| Layout::for_width(w, viewport))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = viewport;
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Layout::Sheet
        } else {
            Layout::Dialog
        }
    }
}

/// Current layout for drawers, tracking window resizes on web.
pub fn use_viewport_layout() -> Layout {
    let config = use_drawer_config();
    let layout = use_signal(|| initial_layout(&config.viewport));

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let listener: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let slot = listener.clone();
        let viewport = config.viewport.clone();
        use_effect(move || {
            let viewport = viewport.clone();
            let mut layout = layout;
            let measure = move || {
                if let Some(width) = window_width() {
                    let next = Layout::for_width(width, &viewport);
                    if *layout.peek() != next {
                        layout.set(next);
                    }
                }
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut()>::new(measure);
            if window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!("could not watch window resizes");
            }
            *slot.borrow_mut() = Some(closure);
        });

        use_drop(move || {
            let closure = listener.borrow_mut().take();
            if let (Some(window), Some(closure)) = (web_sys::window(), closure) {
                let _ = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
        });
    }

    layout()
}
