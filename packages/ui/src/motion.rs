//! Animation controller driving drawer surfaces through CSS transitions.

use std::time::Duration;

use dioxus::prelude::*;
use drawer::{MotionStyle, Transition};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Frame {
    style: MotionStyle,
    transition: Option<Transition>,
}

/// Handle to one element's animated style.
#[derive(Clone, Copy, PartialEq)]
pub struct Motion {
    frame: Signal<Frame>,
}

pub fn use_motion(initial: MotionStyle) -> Motion {
    let frame = use_signal(|| Frame {
        style: initial,
        transition: None,
    });
    Motion { frame }
}

impl Motion {
    /// Jump to `style` without a transition.
    pub fn set(&mut self, style: MotionStyle) {
        self.frame.set(Frame {
            style,
            transition: None,
        });
    }

    /// Transition to `style` and resolve once the transition has settled.
    pub async fn animate_to(mut self, style: MotionStyle, transition: Transition) {
        self.frame.set(Frame {
            style,
            transition: Some(transition),
        });
        sleep(transition.settle_duration()).await;
    }

    /// Inline style for the animated element.
    pub fn css(&self) -> String {
        let frame = (self.frame)();
        match frame.transition {
            Some(t) => format!("{} {}", frame.style.css(), t.css()),
            None => frame.style.css(),
        }
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Give the renderer one frame to paint the initial style before animating.
pub async fn next_frame() {
    sleep(Duration::from_millis(16)).await;
}
