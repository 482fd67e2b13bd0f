use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Entrance transition for blocks revealed by [`use_in_view_once`], staggered by `delay_ms`.
pub fn reveal_classes(visible: bool, delay_ms: u32) -> (Classes, String) {
    let classes = classes!(
        "transition-all",
        "duration-700",
        "ease-out",
        if visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-8" },
    );
    (classes, format!("transition-delay: {}ms;", delay_ms))
}

/// Flips to `true` the first time the referenced element comes within view,
/// then stops watching. Used for the one-shot section entrance animations.
#[hook]
pub fn use_in_view_once(node: NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut watcher: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                match node.cast::<Element>() {
                    Some(element) => {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                            let in_view = in_view.clone();
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let visible = entries
                                    .iter()
                                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                    .any(|entry| entry.is_intersecting());
                                if visible {
                                    in_view.set(true);
                                    observer.disconnect();
                                }
                            }
                        });
                        let init = IntersectionObserverInit::new();
                        init.set_root_margin(root_margin);
                        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                            Ok(observer) => {
                                observer.observe(&element);
                                watcher = Some((observer, callback));
                            }
                            Err(e) => {
                                log::warn!("IntersectionObserver unavailable: {:?}", e);
                                in_view.set(true);
                            }
                        }
                    }
                    // nothing to watch, show the content right away
                    None => in_view.set(true),
                }

                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}
