use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions,
};
use yew::Callback;

use super::tracker::{PageScroller, ThresholdBand, ViewportObserver, VisibilityEntry};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `IntersectionObserver`-backed section watcher.
///
/// The browser closure is owned here, so dropping the adapter both disconnects
/// the observer and frees the closure.
pub struct DomViewportObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl DomViewportObserver {
    pub fn new(band: &ThresholdBand, on_entries: Callback<Vec<VisibilityEntry>>) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let batch: Vec<VisibilityEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilityEntry {
                    target_id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            if !batch.is_empty() {
                on_entries.emit(batch);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&band.root_margin());
        init.set_threshold(&JsValue::from_f64(band.visible_ratio));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl ViewportObserver for DomViewportObserver {
    fn observe(&mut self, target_id: &str) -> bool {
        match find_section(target_id) {
            Some(element) => {
                self.observer.observe(&element);
                true
            }
            None => false,
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for DomViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Scrolls the browser window.
#[derive(Clone, Copy, Default)]
pub struct WindowScroller;

impl PageScroller for WindowScroller {
    fn section_top(&self, target_id: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let element = find_section(target_id)?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smoothly brings a section to the top of the viewport, without the nav offset.
pub fn scroll_into_view(target_id: &str) {
    match find_section(target_id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no section '{}' to scroll to", target_id),
    }
}

fn find_section(target_id: &str) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(target_id)
}
