//! Responsive breakpoint signal.
//!
//! Width math lives here, not in the core: the window width is bucketed into
//! a [`ViewportClass`] and kept current through a `matchMedia` listener. The
//! listener is owned by the calling component and removed when it unmounts.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;
use timeline::consts::WIDE_BREAKPOINT_PX;
use timeline::layout::ViewportClass;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Bucket a CSS pixel width.
pub fn classify_width(width_px: f64) -> ViewportClass {
    if width_px >= WIDE_BREAKPOINT_PX { ViewportClass::Wide } else { ViewportClass::Narrow }
}

/// Media query matching the wide class.
pub fn wide_media_query() -> String {
    format!("(min-width: {WIDE_BREAKPOINT_PX}px)")
}

/// Class for a `matchMedia` result on [`wide_media_query`].
pub fn class_from_match(matches: bool) -> ViewportClass {
    if matches { ViewportClass::Wide } else { ViewportClass::Narrow }
}

/// Current viewport class at mount time. Wide outside the browser.
pub fn initial_viewport_class() -> ViewportClass {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map_or(ViewportClass::default(), classify_width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ViewportClass::default()
    }
}

/// Reactive viewport class for the current component.
///
/// `initial` overrides the measured class until the breakpoint listener
/// reports; on the server nothing reports, so it stays.
pub fn use_viewport_class(initial: Option<ViewportClass>) -> ReadSignal<ViewportClass> {
    let (viewport, set_viewport) = signal(initial.unwrap_or_else(initial_viewport_class));
    #[cfg(feature = "hydrate")]
    watch_breakpoint(set_viewport);
    #[cfg(not(feature = "hydrate"))]
    let _ = set_viewport;
    viewport
}

#[cfg(feature = "hydrate")]
struct BreakpointListener {
    query: web_sys::MediaQueryList,
    _callback: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(feature = "hydrate")]
impl Drop for BreakpointListener {
    fn drop(&mut self) {
        self.query.set_onchange(None);
    }
}

#[cfg(feature = "hydrate")]
fn watch_breakpoint(set_viewport: WriteSignal<ViewportClass>) {
    let Some(query) = web_sys::window().and_then(|w| w.match_media(&wide_media_query()).ok().flatten()) else {
        log::warn!("matchMedia unavailable; viewport class fixed at mount");
        return;
    };
    set_viewport.set(class_from_match(query.matches()));

    let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        let next = class_from_match(ev.matches());
        log::debug!("viewport class changed to {}", next.as_str());
        set_viewport.set(next);
    });
    query.set_onchange(Some(callback.as_ref().unchecked_ref()));

    // Disposed with the owning component, which drops the listener.
    let _listener = StoredValue::new_local(BreakpointListener { query, _callback: callback });
}
