//! Browser bindings for the dismissal behavior.
//!
//! `DomListenerHost` installs `document` listeners through `web_sys` and maps
//! raw events into `DismissEvent`s relative to a root `NodeRef`. `use_dismiss`
//! keeps a guard in step with a reactive open flag and tears it down with the
//! owning component. Requires a browser environment; SSR paths no-op.

use leptos::prelude::*;

use super::dismiss::{DismissBehavior, PointerTrigger};
#[cfg(feature = "hydrate")]
use super::dismiss::{DismissEvent, DismissGuard, EventSink, Listener, ListenerHost, PointerTarget};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Listener host backed by `document.addEventListener`.
#[cfg(feature = "hydrate")]
pub struct DomListenerHost {
    root: NodeRef<leptos::html::Div>,
}

/// Registered document listener; keeps the JS closure alive until removed.
#[cfg(feature = "hydrate")]
pub struct DomListener {
    target: web_sys::Document,
    event_name: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl DomListenerHost {
    pub fn new(root: NodeRef<leptos::html::Div>) -> Self {
        Self { root }
    }
}

#[cfg(feature = "hydrate")]
impl ListenerHost for DomListenerHost {
    type Handle = DomListener;

    fn listen(&mut self, listener: Listener, sink: EventSink) -> Option<DomListener> {
        let document = web_sys::window().and_then(|w| w.document())?;
        let root = self.root;
        let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let event = match listener {
                Listener::KeyDown => {
                    let Some(key_ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
                        return;
                    };
                    DismissEvent::Key(key_ev.key())
                }
                Listener::Pointer(_) => DismissEvent::Pointer(classify_target(root, ev.target())),
            };
            sink(event);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let event_name = listener.event_name();
        if let Err(err) = document.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref()) {
            log::warn!("addEventListener({event_name}) failed: {err:?}");
            return None;
        }
        Some(DomListener { target: document, event_name, closure })
    }

    fn unlisten(&mut self, handle: DomListener) {
        let _ = handle
            .target
            .remove_event_listener_with_callback(handle.event_name, handle.closure.as_ref().unchecked_ref());
    }
}

/// Locate an event target relative to the guarded root.
#[cfg(feature = "hydrate")]
fn classify_target(root: NodeRef<leptos::html::Div>, target: Option<web_sys::EventTarget>) -> PointerTarget {
    let Some(node) = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return PointerTarget::Unknown;
    };
    let Some(root_el) = root.try_get_untracked().flatten() else {
        return PointerTarget::Unknown;
    };
    if root_el.contains(Some(&node)) {
        PointerTarget::Inside
    } else {
        PointerTarget::Outside
    }
}

/// Dismiss the overlay rooted at `root` while `active` is true.
///
/// Listeners are installed when `active` turns true and removed when it turns
/// false or the calling component is disposed.
pub fn use_dismiss(
    active: Signal<bool>,
    root: NodeRef<leptos::html::Div>,
    trigger: PointerTrigger,
    behavior: DismissBehavior,
) {
    #[cfg(feature = "hydrate")]
    {
        let guard = StoredValue::new_local(DismissGuard::new(DomListenerHost::new(root), trigger, behavior));
        Effect::new(move |_| {
            let is_active = active.get();
            guard.update_value(|g| g.set_active(is_active));
        });
        on_cleanup(move || {
            guard.try_update_value(|g| g.set_active(false));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (active, root, trigger, behavior);
    }
}
