use std::{cell::Cell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, AddEventListenerOptions, Element, HtmlElement, ResizeObserver, ScrollBehavior,
    ScrollIntoViewOptions, ScrollRestoration, ScrollToOptions, Storage,
};
use yew::NodeRef;

use crate::scroll::SectionGeometry;

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

pub(crate) fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub(crate) fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub(crate) fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

/// Document-space geometry of the element behind `node`. An unmounted node
/// measures as an empty section, which samples as zero progress.
pub(crate) fn measure_section(node: &NodeRef) -> SectionGeometry {
    let Some(element) = node.cast::<HtmlElement>() else {
        return SectionGeometry::default();
    };

    let rect = element.get_bounding_client_rect();
    SectionGeometry::new(
        rect.top() + scroll_y(),
        f64::from(element.offset_height()),
        viewport_height(),
    )
}

pub(crate) fn scroll_to_top(behavior: ScrollBehavior) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn scroll_to_element(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        gloo_console::debug!(format!("no element with id `{id}` to scroll to"));
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Startup reset: the page always opens at the top, whatever the browser
/// remembered from the last visit.
pub(crate) fn reset_scroll_position() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }
    scroll_to_top(ScrollBehavior::Instant);
}

/// A passive window listener, removed on drop.
pub(crate) struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub(crate) fn passive(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            gloo_console::warn!(format!("could not listen for `{event}` events"));
            return None;
        }

        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Runs a callback on the next animation frame. Pending frames are cancelled
/// on drop.
pub(crate) struct FrameScheduler {
    callback: Closure<dyn FnMut()>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameScheduler {
    pub(crate) fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let callback = {
            let pending = pending.clone();
            Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                on_frame();
            })
        };

        Self { callback, pending }
    }

    pub(crate) fn schedule(&self) {
        let Some(window) = window() else {
            return;
        };

        match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(_) => gloo_console::warn!("requestAnimationFrame unavailable"),
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Watches an element's box size, disconnected on drop.
pub(crate) struct SizeObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl SizeObserver {
    pub(crate) fn observe(target: &Element, on_resize: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(on_resize);
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
