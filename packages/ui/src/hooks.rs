//! Drawer context and hooks for the UI.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use drawer::{DrawerConfig, DrawerId, DrawerRequest, DrawerStack, DrawerStore, IdSequence, RouteGuard};

use crate::view::DrawerView;

/// Signal-backed drawer store, provided through context by `DrawerProvider`.
#[derive(Clone, Copy, PartialEq)]
pub struct DrawerStackHandle {
    stack: Signal<DrawerStack<DrawerView>>,
    scopes: CopyValue<u64>,
}

impl DrawerStackHandle {
    pub(crate) fn new(stack: Signal<DrawerStack<DrawerView>>, scopes: CopyValue<u64>) -> Self {
        Self { stack, scopes }
    }

    pub fn len(&self) -> usize {
        self.read(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|s| s.is_empty())
    }
}

impl DrawerStore<DrawerView> for DrawerStackHandle {
    fn update<R>(&self, f: impl FnOnce(&mut DrawerStack<DrawerView>) -> R) -> R {
        let mut stack = self.stack;
        stack.with_mut(f)
    }

    fn read<R>(&self, f: impl FnOnce(&DrawerStack<DrawerView>) -> R) -> R {
        self.stack.with(f)
    }

    // Scopes are handed out during render, so the counter lives outside the
    // stack signal to avoid waking the renderer.
    fn allocate_scope(&self) -> IdSequence {
        let mut scopes = self.scopes;
        let n = scopes.with_mut(|next| {
            *next += 1;
            *next
        });
        IdSequence::new(format!("drawer-{n}"))
    }
}

/// Dismiss capability bound to one presented drawer.
///
/// Dismissing more than once is harmless: the second call finds nothing.
#[derive(Clone, PartialEq)]
pub struct DrawerHandle {
    store: DrawerStackHandle,
    id: DrawerId,
}

impl DrawerHandle {
    pub(crate) fn new(store: DrawerStackHandle, id: DrawerId) -> Self {
        Self { store, id }
    }

    pub fn id(&self) -> &DrawerId {
        &self.id
    }

    pub fn dismiss(&self) {
        self.store.dismiss(&self.id);
    }

    pub fn is_open(&self) -> bool {
        self.store.read(|s| s.contains(&self.id))
    }
}

/// Per-component drawer controller returned by [`use_drawer`].
#[derive(Clone)]
pub struct UseDrawer {
    store: DrawerStackHandle,
    ids: Rc<IdSequence>,
}

impl UseDrawer {
    /// Push a drawer on top of the stack.
    pub fn present(&self, request: impl Into<DrawerRequest<DrawerView>>) -> DrawerHandle {
        let id = self.store.present(&self.ids, request.into());
        DrawerHandle::new(self.store, id)
    }

    pub fn dismiss(&self, id: &DrawerId) -> bool {
        self.store.dismiss(id)
    }

    pub fn dismiss_top(&self) -> bool {
        self.store.dismiss_top()
    }

    pub fn dismiss_all(&self) -> usize {
        self.store.dismiss_all()
    }

    pub fn stack(&self) -> DrawerStackHandle {
        self.store
    }
}

/// Get the shared drawer store.
pub fn use_drawer_stack() -> DrawerStackHandle {
    use_context::<DrawerStackHandle>()
}

pub fn use_drawer_config() -> DrawerConfig {
    use_context::<DrawerConfig>()
}

/// Get a drawer controller whose generated ids carry this component's own
/// scope prefix.
pub fn use_drawer() -> UseDrawer {
    let store = use_drawer_stack();
    let ids = use_hook(|| Rc::new(store.allocate_scope()));
    UseDrawer { store, ids }
}

/// Clear the drawer stack whenever `path` changes after the first render.
pub fn use_route_guard(path: String) {
    let store = use_drawer_stack();
    let guard = use_hook(|| Rc::new(RefCell::new(RouteGuard::default())));
    use_effect(use_reactive((&path,), move |(path,)| {
        if guard.borrow_mut().observe(&path) {
            let cleared = store.dismiss_all();
            tracing::debug!(path = %path, cleared, "route changed, drawers cleared");
        }
    }));
}

/// Clear the drawer stack whenever the router's current route changes.
///
/// Must be called inside both the `Router` and a `DrawerProvider`.
pub fn use_dismiss_on_route_change<R: Routable + Clone + 'static>() {
    let route = use_route::<R>();
    use_route_guard(route.to_string());
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::{drawer_request, DrawerProvider};

    thread_local! {
        static CALLERS: RefCell<Vec<UseDrawer>> = RefCell::new(Vec::new());
    }

    fn app() -> Element {
        rsx! {
            DrawerProvider {
                Caller {}
                Caller {}
            }
        }
    }

    #[component]
    fn Caller() -> Element {
        let drawers = use_drawer();
        use_hook(|| CALLERS.with(|c| c.borrow_mut().push(drawers.clone())));
        rsx! {}
    }

    fn mounted() -> (VirtualDom, UseDrawer, UseDrawer) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let (a, b) = CALLERS.with(|c| {
            let c = c.borrow();
            (c[0].clone(), c[1].clone())
        });
        (dom, a, b)
    }

    fn scope_of(id: &DrawerId) -> &str {
        id.as_str().rsplit_once('-').map(|(scope, _)| scope).unwrap_or_default()
    }

    fn empty(title: &'static str) -> DrawerRequest<DrawerView> {
        drawer_request(title, |_| rsx! {})
    }

    #[test]
    fn test_callers_get_distinct_scopes() {
        let (dom, a, b) = mounted();
        let (x, y, z) = dom.in_runtime(|| {
            (a.present(empty("A")), a.present(empty("B")), b.present(empty("C")))
        });

        assert_ne!(x.id(), y.id());
        assert_eq!(scope_of(x.id()), scope_of(y.id()));
        assert_ne!(scope_of(x.id()), scope_of(z.id()));
        let ids = dom.in_runtime(|| a.stack().read(|s| s.ids()));
        assert_eq!(ids, vec![x.id().clone(), y.id().clone(), z.id().clone()]);
    }

    #[test]
    fn test_handle_dismisses_its_own_drawer_once() {
        let (dom, a, _) = mounted();
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();

        dom.in_runtime(|| {
            let below = a.present(empty("below"));
            let handle = a.present(empty("A").on_close(move || counter.set(counter.get() + 1)));
            assert!(handle.is_open());

            handle.dismiss();
            handle.dismiss();
            assert!(!handle.is_open());
            assert!(below.is_open());
            assert_eq!(a.stack().len(), 1);
        });
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_controller_dismiss_top_and_all() {
        let (dom, a, b) = mounted();
        dom.in_runtime(|| {
            a.present(empty("A"));
            let top = b.present(empty("B"));
            assert!(a.dismiss_top());
            assert!(!top.is_open());
            assert!(!a.dismiss(top.id()));

            b.present(empty("C"));
            assert_eq!(b.dismiss_all(), 2);
            assert!(a.stack().is_empty());
            assert!(!a.dismiss_top());
        });
    }
}
