use yew::prelude::*;

use crate::nav::dom::{DomViewportObserver, WindowScroller};
use crate::nav::tracker::{NavigationItem, SectionTracker, ThresholdBand, VisibilityEntry};

type DomSectionTracker = SectionTracker<DomViewportObserver, WindowScroller>;

#[derive(Properties, PartialEq)]
pub struct ProjectNavProps {
    pub items: Vec<NavigationItem>,
}

/// Sticky section bar under the header. Highlights whichever section the
/// visibility tracker reports and smooth-scrolls on click.
#[function_component(ProjectNav)]
pub fn project_nav(props: &ProjectNavProps) -> Html {
    let tracker = use_mut_ref(|| None::<DomSectionTracker>);
    let active = use_state(|| props.items.first().map(|item| item.target_id.clone()));

    {
        let tracker = tracker.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |items: &Vec<NavigationItem>| {
                active.set(items.first().map(|item| item.target_id.clone()));

                if !items.is_empty() {
                    let on_entries = {
                        let tracker = tracker.clone();
                        let active = active.clone();
                        Callback::from(move |batch: Vec<VisibilityEntry>| {
                            let Ok(mut slot) = tracker.try_borrow_mut() else {
                                return;
                            };
                            if let Some(section_tracker) = slot.as_mut() {
                                if section_tracker.on_visibility(&batch) {
                                    active.set(section_tracker.active_target().map(str::to_owned));
                                }
                            }
                        })
                    };

                    let band = ThresholdBand::default();
                    match DomViewportObserver::new(&band, on_entries) {
                        Ok(observer) => {
                            let mut section_tracker =
                                SectionTracker::new(items.clone(), band, observer, WindowScroller);
                            section_tracker.start_observation();
                            *tracker.borrow_mut() = Some(section_tracker);
                        }
                        Err(e) => log::error!("Failed to create section observer: {:?}", e),
                    }
                }

                move || {
                    // Taking the tracker out also drops the observer closure, which holds a
                    // handle back to this cell.
                    let released = tracker.borrow_mut().take();
                    if let Some(mut section_tracker) = released {
                        section_tracker.teardown();
                    }
                }
            },
            props.items.clone(),
        );
    }

    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div class="sticky top-16 z-40 border-b border-gray-200 bg-white/95 backdrop-blur transition-all duration-200 lg:top-20">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <nav class="flex items-center gap-4 overflow-x-auto py-4 text-sm font-semibold text-gray-600">
                    { for props.items.iter().map(|item| {
                        let is_active = active.as_deref() == Some(item.target_id.as_str());
                        let onclick = {
                            let tracker = tracker.clone();
                            let target_id = item.target_id.clone();
                            Callback::from(move |_: MouseEvent| {
                                if let Some(section_tracker) = tracker.borrow().as_ref() {
                                    section_tracker.navigate(&target_id);
                                }
                            })
                        };
                        html! {
                            <button
                                key={item.target_id.clone()}
                                type="button"
                                onclick={onclick}
                                class={classes!(
                                    "relative", "whitespace-nowrap", "rounded-full", "px-3", "py-1.5",
                                    "transition", "duration-200", "hover:scale-105", "active:scale-95",
                                    if is_active {
                                        "bg-gray-900 text-white shadow-sm"
                                    } else {
                                        "text-gray-600 hover:text-gray-900"
                                    },
                                )}
                            >
                                {&item.label}
                            </button>
                        }
                    }) }
                </nav>
            </div>
        </div>
    }
}
