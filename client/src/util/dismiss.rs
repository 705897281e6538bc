//! Close-on-outside-interaction behavior for overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels and dropdowns close when the user presses a pointer button outside
//! their root element or hits Escape. The policy lives here, independent of
//! the DOM; `dismiss_dom` supplies the browser listener host and the Leptos
//! hook that ties a guard to a reactive open flag.
//!
//! DESIGN
//! ======
//! A `DismissGuard` installs listeners only while active: registration happens
//! on the inactive->active transition, removal on the reverse transition or on
//! drop. Both pointer and Escape dismissal are therefore gated by the active
//! flag. Each guard owns its own handles and callbacks, so any number of
//! overlays can use the behavior side by side.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

use std::rc::Rc;

/// Pointer event that counts as an interaction for dismissal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerTrigger {
    #[default]
    Click,
    MouseDown,
    MouseUp,
}

impl PointerTrigger {
    /// DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
        }
    }
}

/// Document-level listener kinds a guard installs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    Pointer(PointerTrigger),
    KeyDown,
}

impl Listener {
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Pointer(trigger) => trigger.event_name(),
            Self::KeyDown => "keydown",
        }
    }
}

/// Where a pointer event landed relative to the guarded region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
    /// Target is not a DOM node, or the region is not mounted.
    Unknown,
}

/// Event delivered from a listener host to a guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DismissEvent {
    Pointer(PointerTarget),
    Key(String),
}

pub type EventSink = Rc<dyn Fn(DismissEvent)>;

/// Platform seam for installing and removing document-level listeners.
pub trait ListenerHost {
    type Handle;

    /// Install a listener that forwards matching events into `sink`.
    ///
    /// Returns `None` when the platform refused the registration.
    fn listen(&mut self, listener: Listener, sink: EventSink) -> Option<Self::Handle>;

    fn unlisten(&mut self, handle: Self::Handle);
}

/// Callbacks invoked when an overlay should be dismissed.
///
/// Both callbacks are optional; a missing callback is simply skipped.
#[derive(Default)]
pub struct DismissBehavior {
    on_close: Option<Box<dyn Fn()>>,
    on_change: Option<Box<dyn Fn(bool)>>,
}

impl DismissBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Receives `false` whenever the overlay is dismissed.
    #[must_use]
    pub fn on_change(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Apply the dismissal policy to one event. Returns `true` if the
    /// callbacks fired.
    pub fn dispatch(&self, event: &DismissEvent) -> bool {
        let dismiss = match event {
            DismissEvent::Pointer(target) => *target == PointerTarget::Outside,
            DismissEvent::Key(key) => key == "Escape",
        };
        if dismiss {
            log::debug!("overlay dismissed by {event:?}");
            if let Some(on_close) = &self.on_close {
                on_close();
            }
            if let Some(on_change) = &self.on_change {
                on_change(false);
            }
        }
        dismiss
    }
}

/// Owns the listeners for one overlay and keeps them in step with its
/// active flag.
pub struct DismissGuard<H: ListenerHost> {
    host: H,
    trigger: PointerTrigger,
    behavior: Rc<DismissBehavior>,
    handles: Vec<H::Handle>,
}

impl<H: ListenerHost> DismissGuard<H> {
    /// Create an inactive guard. No listeners exist until `set_active(true)`.
    pub fn new(host: H, trigger: PointerTrigger, behavior: DismissBehavior) -> Self {
        Self { host, trigger, behavior: Rc::new(behavior), handles: Vec::new() }
    }

    pub fn is_listening(&self) -> bool {
        !self.handles.is_empty()
    }

    pub fn trigger(&self) -> PointerTrigger {
        self.trigger
    }

    /// Follow the overlay's open flag. Repeated calls with the same value are
    /// no-ops.
    pub fn set_active(&mut self, active: bool) {
        if active == self.is_listening() {
            return;
        }
        if active {
            self.install();
        } else {
            self.remove_all();
        }
    }

    fn install(&mut self) {
        for listener in [Listener::Pointer(self.trigger), Listener::KeyDown] {
            let behavior = Rc::clone(&self.behavior);
            let sink: EventSink = Rc::new(move |event| {
                behavior.dispatch(&event);
            });
            match self.host.listen(listener, sink) {
                Some(handle) => self.handles.push(handle),
                None => log::warn!("could not install {} listener", listener.event_name()),
            }
        }
    }

    fn remove_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.host.unlisten(handle);
        }
    }
}

impl<H: ListenerHost> Drop for DismissGuard<H> {
    fn drop(&mut self) {
        self.remove_all();
    }
}
