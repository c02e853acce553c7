//! Window pointer and scroll subscriptions scoped to a reactive owner.
//!
//! A component subscribes while it is being built and the subscription is
//! released when its owner is cleaned up, so an unmounted hero never hears
//! another pointer move.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;

use super::pointer::{PointerOffset, Viewport};

/// Raw pointer position together with the viewport it was measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub viewport: Viewport,
}

pub type PointerHandler = Arc<dyn Fn(PointerSample) + Send + Sync>;
pub type ScrollHandler = Arc<dyn Fn(f64) + Send + Sync>;

/// Source of viewport-level input events.
pub trait ViewportEvents {
    fn on_pointer_move(&self, handler: PointerHandler) -> Subscription;
    fn on_scroll(&self, handler: ScrollHandler) -> Subscription;
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;
}

/// A live listener. Released exactly once: explicitly, or when dropped.
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The browser window. Listeners are no-ops when rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvents;

impl ViewportEvents for WindowEvents {
    fn on_pointer_move(&self, handler: PointerHandler) -> Subscription {
        let handle = window_event_listener(ev::mousemove, move |event| {
            handler(PointerSample {
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
                viewport: window_viewport(),
            });
        });
        Subscription::new(move || handle.remove())
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
        let handle = window_event_listener(ev::scroll, move |_| handler(window_scroll_y()));
        Subscription::new(move || handle.remove())
    }

    fn scroll_y(&self) -> f64 {
        window_scroll_y()
    }
}

/// A shareable handle to any event source. Defaults to the browser window.
#[derive(Clone)]
pub struct EventSource(Arc<dyn ViewportEvents + Send + Sync>);

impl EventSource {
    pub fn new(events: impl ViewportEvents + Send + Sync + 'static) -> Self {
        Self(Arc::new(events))
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new(WindowEvents)
    }
}

impl ViewportEvents for EventSource {
    fn on_pointer_move(&self, handler: PointerHandler) -> Subscription {
        self.0.on_pointer_move(handler)
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
        self.0.on_scroll(handler)
    }

    fn scroll_y(&self) -> f64 {
        self.0.scroll_y()
    }
}

impl std::fmt::Debug for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EventSource").finish_non_exhaustive()
    }
}

#[cfg(feature = "hydrate")]
fn window_viewport() -> Viewport {
    let window = window();
    let extent = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(extent(window.inner_width()), extent(window.inner_height()))
}

#[cfg(not(feature = "hydrate"))]
fn window_viewport() -> Viewport {
    Viewport::default()
}

#[cfg(feature = "hydrate")]
fn window_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

#[cfg(not(feature = "hydrate"))]
fn window_scroll_y() -> f64 {
    0.0
}

/// Feeds normalised pointer offsets to `on_move` until the current owner is
/// cleaned up.
pub fn track_pointer<E>(events: &E, on_move: impl Fn(PointerOffset) + Send + Sync + 'static)
where
    E: ViewportEvents + ?Sized,
{
    let subscription = events.on_pointer_move(Arc::new(move |sample: PointerSample| {
        on_move(PointerOffset::from_client(
            sample.client_x,
            sample.client_y,
            sample.viewport,
        ))
    }));
    on_cleanup(move || subscription.release());
}

/// Feeds the vertical scroll offset to `on_scroll` until the current owner is
/// cleaned up.
pub fn track_scroll<E>(events: &E, on_scroll: impl Fn(f64) + Send + Sync + 'static)
where
    E: ViewportEvents + ?Sized,
{
    let subscription = events.on_scroll(Arc::new(on_scroll));
    on_cleanup(move || subscription.release());
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use super::*;

    type Slots<H> = Arc<Mutex<Vec<(u64, H)>>>;

    /// In-memory window that records listeners and lets tests fire events.
    #[derive(Clone, Default)]
    pub struct FakeWindow {
        pointer: Slots<PointerHandler>,
        scroll: Slots<ScrollHandler>,
        offset: Arc<Mutex<f64>>,
        next_id: Arc<AtomicU64>,
    }

    impl FakeWindow {
        pub fn pointer_listeners(&self) -> usize {
            self.pointer.lock().unwrap().len()
        }

        pub fn scroll_listeners(&self) -> usize {
            self.scroll.lock().unwrap().len()
        }

        pub fn move_pointer(&self, x: f64, y: f64, viewport: Viewport) {
            let handlers: Vec<_> = self.pointer.lock().unwrap().iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler(PointerSample {
                    client_x: x,
                    client_y: y,
                    viewport,
                });
            }
        }

        pub fn scroll_to(&self, y: f64) {
            *self.offset.lock().unwrap() = y;
            let handlers: Vec<_> = self.scroll.lock().unwrap().iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler(y);
            }
        }

        fn attach<H: Send + 'static>(&self, slots: &Slots<H>, handler: H) -> Subscription {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            slots.lock().unwrap().push((id, handler));
            let slots = Arc::clone(slots);
            Subscription::new(move || slots.lock().unwrap().retain(|(slot, _)| *slot != id))
        }
    }

    impl ViewportEvents for FakeWindow {
        fn on_pointer_move(&self, handler: PointerHandler) -> Subscription {
            self.attach(&self.pointer, handler)
        }

        fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
            self.attach(&self.scroll, handler)
        }

        fn scroll_y(&self) -> f64 {
            *self.offset.lock().unwrap()
        }
    }
}
