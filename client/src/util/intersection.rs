//! Viewport intersection observation, one observer per stage.
//!
//! An observer is acquired when its stage row mounts and disconnected when the
//! returned [`StageObserver`] is dropped, which the row ties to its own
//! lifetime. Hosts without `IntersectionObserver` (and every non-`hydrate`
//! build) report [`ObservationUnavailable`], and the timeline fails open.

#[cfg(test)]
#[path = "intersection_test.rs"]
mod intersection_test;

use timeline::error::ObservationUnavailable;

#[cfg(feature = "hydrate")]
use timeline::consts::INTERSECTION_THRESHOLD;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Whether the host can observe intersection at all.
///
/// # Errors
///
/// Returns [`ObservationUnavailable`] when there is no window or it lacks
/// `IntersectionObserver`.
pub fn availability() -> Result<(), ObservationUnavailable> {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Err(ObservationUnavailable::new("no window"));
        };
        match js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")) {
            Ok(true) => Ok(()),
            _ => Err(ObservationUnavailable::new("IntersectionObserver is not supported")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ObservationUnavailable::new("no browser environment"))
    }
}

/// Live observer for one stage element.
#[cfg(feature = "hydrate")]
pub struct StageObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Drop for StageObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `element` and forward `(stage_id, is_intersecting)` for every entry.
///
/// # Errors
///
/// Returns [`ObservationUnavailable`] if the host lacks the API or the
/// observer cannot be constructed.
#[cfg(feature = "hydrate")]
pub fn observe_stage(
    element: &web_sys::Element,
    stage_id: String,
    on_change: impl Fn(&str, bool) + 'static,
) -> Result<StageObserver, ObservationUnavailable> {
    availability()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<web_sys::IntersectionObserverEntry>();
                on_change(&stage_id, entry.is_intersecting());
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| ObservationUnavailable::new(format!("IntersectionObserver construction failed: {err:?}")))?;
    observer.observe(element);

    Ok(StageObserver { observer, _callback: callback })
}
