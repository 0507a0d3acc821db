//! Helpers for driving a headless `VirtualDom` in tests.

use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

/// Let effects, spawned tasks and the re-renders they cause run until the
/// dom goes quiet.
pub(crate) async fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(20)) => {}
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
