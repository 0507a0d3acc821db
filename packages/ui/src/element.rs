//! A single presented drawer: dialog on large viewports, bottom sheet on
//! small ones.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use drawer::config::MotionConfig;
use drawer::layout::placement_class;
use drawer::{
    BackdropOutcome, DrawerEntry, DrawerId, DrawerStore, Layering, Layout, MotionStyle,
    NoticePulse, Presence, Transition,
};

use crate::hooks::{use_drawer_config, use_drawer_stack, DrawerHandle};
use crate::icons::FaXmark;
use crate::motion::{next_frame, use_motion};
use crate::sheets::use_external_sheet_count;
use crate::view::{DrawerTitle, DrawerView};
use crate::viewport::use_viewport_layout;
use crate::Icon;

/// Entry passed as a prop; compares by identity.
#[derive(Clone)]
pub struct EntryRef(pub Rc<DrawerEntry<DrawerView>>);

impl PartialEq for EntryRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Running animations of one element. Canceled when it starts leaving, when
/// it revives, and when it unmounts.
#[derive(Default)]
struct AnimationTasks {
    enter: Option<Task>,
    pulse: Option<Task>,
    exit: Option<Task>,
}

impl AnimationTasks {
    fn replace_pulse(&mut self, task: Task) {
        if let Some(old) = self.pulse.replace(task) {
            old.cancel();
        }
    }

    fn cancel_all(&mut self) {
        for task in [self.enter.take(), self.pulse.take(), self.exit.take()]
            .into_iter()
            .flatten()
        {
            task.cancel();
        }
    }
}

/// Route a backdrop click through the store. Returns the pulse to play when
/// the drawer stays open.
pub(crate) fn backdrop_pulse<V>(
    store: &impl DrawerStore<V>,
    id: &DrawerId,
    presence: &mut Presence,
    config: &MotionConfig,
) -> Option<NoticePulse> {
    match store.backdrop_click(id) {
        BackdropOutcome::Notice => presence.notice(config),
        BackdropOutcome::Dismissed | BackdropOutcome::Missing => None,
    }
}

#[component]
pub fn DrawerElement(
    entry: EntryRef,
    /// Position in the rendered stack; drives the z-index.
    index: usize,
    /// The entry has left the stack and should play its exit animation.
    exiting: bool,
    on_exited: EventHandler<DrawerId>,
) -> Element {
    let store = use_drawer_stack();
    let config = use_drawer_config();
    let layout = use_viewport_layout();
    let external_sheets = use_external_sheet_count();

    let id = entry.0.id.clone();
    let handle = DrawerHandle::new(store, id.clone());
    let hidden = match layout {
        Layout::Sheet => MotionStyle::SHEET_HIDDEN,
        Layout::Dialog => MotionStyle::dialog_hidden(&config.motion),
    };
    let spring = Transition::spring(&config.motion);

    let motion = use_motion(hidden);
    let mut presence = use_signal(Presence::new);
    let tasks = use_hook(|| Rc::new(RefCell::new(AnimationTasks::default())));

    let enter_tasks = tasks.clone();
    use_effect(move || {
        let task = spawn(async move {
            next_frame().await;
            motion.animate_to(MotionStyle::REST, spring).await;
            presence.write().entered();
        });
        enter_tasks.borrow_mut().enter = Some(task);
    });

    let exit_tasks = tasks.clone();
    let exit_id = id.clone();
    use_effect(use_reactive((&exiting,), move |(exiting,)| {
        if exiting {
            if !presence.write().exit() {
                return;
            }
            exit_tasks.borrow_mut().cancel_all();
            let id = exit_id.clone();
            let task = spawn(async move {
                motion.animate_to(hidden, spring).await;
                presence.write().removed();
                on_exited.call(id);
            });
            exit_tasks.borrow_mut().exit = Some(task);
        } else if presence.peek().is_leaving() {
            // Presented again under the same id before the exit finished.
            presence.write().revive();
            exit_tasks.borrow_mut().cancel_all();
            let task = spawn(async move {
                motion.animate_to(MotionStyle::REST, spring).await;
                presence.write().entered();
            });
            exit_tasks.borrow_mut().enter = Some(task);
        }
    }));

    let drop_tasks = tasks.clone();
    use_drop(move || drop_tasks.borrow_mut().cancel_all());

    let notice_config = config.motion.clone();
    let pulse_tasks = tasks.clone();
    let backdrop_id = id.clone();
    let on_backdrop = move |_: ()| {
        let Some(pulse) =
            backdrop_pulse(&store, &backdrop_id, &mut presence.write(), &notice_config)
        else {
            return;
        };
        let task = spawn(async move {
            for (style, transition) in pulse.steps() {
                motion.animate_to(style, transition).await;
            }
            presence.write().settle();
        });
        pulse_tasks.borrow_mut().replace_pulse(task);
    };

    let close_id = id.clone();
    let on_close = move |_: ()| {
        store.dismiss(&close_id);
    };

    let z_index = Layering::from(&config.layering).for_layout(layout, index, external_sheets);
    let surface_style = motion.css();
    let leaving = presence.read().is_leaving();

    match layout {
        Layout::Sheet => rsx! {
            SheetFrame {
                entry: entry.clone(),
                handle: handle,
                z_index: z_index,
                surface_style: surface_style,
                leaving: leaving,
                on_backdrop: on_backdrop,
                on_close: on_close,
            }
        },
        Layout::Dialog => rsx! {
            DialogFrame {
                entry: entry.clone(),
                handle: handle,
                z_index: z_index,
                surface_style: surface_style,
                leaving: leaving,
                on_backdrop: on_backdrop,
                on_close: on_close,
            }
        },
    }
}

#[component]
fn DialogFrame(
    entry: EntryRef,
    handle: DrawerHandle,
    z_index: u32,
    surface_style: String,
    leaving: bool,
    on_backdrop: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let position = entry.0.options.position;
    let backdrop_class = if leaving {
        format!("{} drawer-backdrop--leaving", placement_class(position))
    } else {
        placement_class(position).to_string()
    };

    let surface_class = format!("drawer-surface drawer-surface--{}", position.as_str());
    let surface = match &entry.0.view.container {
        Some(container) => container(
            handle.clone(),
            rsx! {
                DrawerBody { entry: entry.clone(), handle: handle.clone() }
            },
        ),
        None => rsx! {
            div {
                class: "drawer-dialog",
                div {
                    class: "drawer-titlebar",
                    DrawerTitleView { entry: entry.clone() }
                    button {
                        class: "drawer-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                hr { class: "drawer-divider" }
                div {
                    class: "drawer-scroll",
                    DrawerBody { entry: entry.clone(), handle: handle.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            class: "{backdrop_class}",
            style: "z-index: {z_index}",
            onclick: move |_| on_backdrop.call(()),
            div {
                class: "{surface_class}",
                style: "{surface_style}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {surface}
            }
        }
    }
}

#[component]
fn SheetFrame(
    entry: EntryRef,
    handle: DrawerHandle,
    z_index: u32,
    surface_style: String,
    leaving: bool,
    on_backdrop: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: if leaving { "drawer-sheet-backdrop drawer-backdrop--leaving" } else { "drawer-sheet-backdrop" },
            style: "z-index: {z_index}",
            onclick: move |_| on_backdrop.call(()),
            div {
                class: "drawer-sheet",
                style: "{surface_style}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "drawer-sheet-handle" }
                div {
                    class: "drawer-titlebar",
                    DrawerTitleView { entry: entry.clone() }
                    button {
                        class: "drawer-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div {
                    class: "drawer-scroll",
                    DrawerBody { entry: entry.clone(), handle: handle.clone() }
                }
            }
        }
    }
}

#[component]
fn DrawerTitleView(entry: EntryRef) -> Element {
    match &entry.0.view.title {
        DrawerTitle::Text(text) => rsx! {
            h2 { class: "drawer-title", "{text}" }
        },
        DrawerTitle::Render(render) => render(),
    }
}

/// Caller content. Kept in its own component so it does not re-render when
/// only the frame's animation state changes.
#[component]
fn DrawerBody(entry: EntryRef, handle: DrawerHandle) -> Element {
    (entry.0.view.content)(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawer::{DrawerRequest, DrawerStack, Phase};
    use std::cell::Cell;

    fn store_with(request: DrawerRequest<&'static str>) -> (RefCell<DrawerStack<&'static str>>, DrawerId) {
        let store = RefCell::new(DrawerStack::new());
        let ids = store.allocate_scope();
        let id = store.present(&ids, request);
        (store, id)
    }

    #[test]
    fn test_rejected_backdrop_click_pulses_once() {
        let (store, id) = store_with(DrawerRequest::new("A"));
        let mut presence = Presence::new();
        presence.entered();

        let pulse = backdrop_pulse(&store, &id, &mut presence, &MotionConfig::default());
        assert!(pulse.is_some());
        assert!(store.read(|s| s.contains(&id)));
        assert_eq!(presence.pulses(), 1);
        assert_eq!(presence.phase(), Phase::Noticed);
    }

    #[test]
    fn test_dismissing_backdrop_click_removes_without_pulse() {
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let (store, id) = store_with(
            DrawerRequest::new("A")
                .click_outside_to_dismiss(true)
                .on_close(move || counter.set(counter.get() + 1)),
        );
        let mut presence = Presence::new();

        let pulse = backdrop_pulse(&store, &id, &mut presence, &MotionConfig::default());
        assert!(pulse.is_none());
        assert!(store.read(|s| s.is_empty()));
        assert_eq!(closed.get(), 1);
        assert_eq!(presence.pulses(), 0);
    }

    #[test]
    fn test_backdrop_click_on_leaving_drawer_does_nothing() {
        let (store, id) = store_with(DrawerRequest::new("A"));
        let mut presence = Presence::new();
        presence.exit();

        assert!(backdrop_pulse(&store, &id, &mut presence, &MotionConfig::default()).is_none());
        assert_eq!(presence.pulses(), 0);

        store.dismiss(&id);
        let mut fresh = Presence::new();
        assert!(backdrop_pulse(&store, &id, &mut fresh, &MotionConfig::default()).is_none());
    }
}
