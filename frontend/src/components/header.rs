use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{HeaderMessages, Locale};
use crate::nav::dom::scroll_into_view;

const SCROLLED_THRESHOLD: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub messages: HeaderMessages,
    pub current_locale: Locale,
    pub on_language_change: Callback<Locale>,
}

pub fn locale_select_handler(on_language_change: Callback<Locale>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            if let Some(locale) = Locale::from_code(&select.value()) {
                on_language_change.emit(locale);
            }
        }
    })
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    // Shadow once the page has scrolled past the top
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Err(e) = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                log::warn!("Failed to detach scroll listener: {:?}", e);
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let scroll_to_section = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |section_id: &'static str| {
            scroll_into_view(section_id);
            is_menu_open.set(false);
        })
    };

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };

    let on_locale_change = locale_select_handler(props.on_language_change.clone());
    let nav = &props.messages.nav;
    let nav_items: [(&str, &'static str); 3] = [
        (nav.story.as_str(), "story"),
        (nav.rewards.as_str(), "rewards"),
        (nav.faq.as_str(), "faq"),
    ];

    let nav_button = |label: &str, target: &'static str, class: &'static str| {
        let scroll_to_section = scroll_to_section.clone();
        html! {
            <button
                key={target}
                type="button"
                class={class}
                onclick={Callback::from(move |_: MouseEvent| scroll_to_section.emit(target))}
            >
                {label.to_string()}
            </button>
        }
    };

    let cta = |class: &'static str| {
        let scroll_to_section = scroll_to_section.clone();
        html! {
            <button
                type="button"
                class={class}
                onclick={Callback::from(move |_: MouseEvent| scroll_to_section.emit("rewards"))}
            >
                {&props.messages.cta}
            </button>
        }
    };

    html! {
        <header class={classes!(
            "fixed", "top-0", "left-0", "right-0", "z-50", "border-b", "border-gray-200", "bg-white",
            "transition-all", "duration-300", "animate-slide-down",
            is_scrolled.then_some("shadow-md"),
        )}>
            <div class="mx-auto flex h-16 max-w-7xl items-center justify-between px-4 sm:h-20 sm:px-6 lg:px-8">
                <button
                    type="button"
                    class="flex items-center gap-2 transition-transform hover:scale-105"
                    onclick={{
                        let scroll_to_section = scroll_to_section.clone();
                        Callback::from(move |_: MouseEvent| scroll_to_section.emit("hero"))
                    }}
                >
                    <img src="/logo.png" alt={props.messages.logo.clone()} width="40" height="40"
                        class="h-9 w-9 rounded-full border border-gray-200 object-cover" />
                    <span class="text-xl font-semibold text-gray-900 lg:text-2xl">{&props.messages.logo}</span>
                </button>

                <nav class="hidden items-center space-x-10 lg:flex">
                    { for nav_items.iter().map(|(label, target)| nav_button(
                        *label,
                        *target,
                        "text-xs font-semibold uppercase tracking-wide text-gray-600 transition-colors duration-200 hover:text-gray-900",
                    )) }
                </nav>

                <div class="hidden items-center gap-4 lg:flex">
                    <select
                        class="rounded-full border border-gray-300 bg-white px-3 py-1 text-sm font-medium text-gray-700 hover:border-gray-400"
                        onchange={on_locale_change.clone()}
                    >
                        { for Locale::ALL.iter().map(|locale| html! {
                            <option value={locale.code()} selected={*locale == props.current_locale}>
                                {locale.short_label()}
                            </option>
                        }) }
                    </select>
                    { cta("rounded-full bg-green-600 px-6 py-2 text-sm font-semibold text-white shadow-md transition-colors duration-200 hover:bg-green-700") }
                </div>

                <button
                    type="button"
                    class="rounded-md p-2 text-gray-700 transition-colors duration-200 hover:text-gray-900 lg:hidden"
                    onclick={toggle_menu}
                >
                    <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        if *is_menu_open {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        } else {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </div>

            <div class={classes!(
                "mx-4", "overflow-hidden", "rounded-lg", "border-gray-200", "bg-white", "shadow-lg",
                "transition-all", "duration-300", "ease-in-out", "lg:hidden",
                if *is_menu_open { "mb-4 max-h-screen border opacity-100" } else { "max-h-0 opacity-0" },
            )}>
                <div class="space-y-4 px-4 py-4">
                    { for nav_items.iter().map(|(label, target)| nav_button(
                        *label,
                        *target,
                        "block w-full py-2 text-left text-gray-700 transition-colors duration-200 hover:text-gray-900",
                    )) }
                    <div class="space-y-4 border-t border-gray-200 pt-4">
                        <div>
                            <label class="mb-2 block text-sm font-medium text-gray-700">{&props.messages.language}</label>
                            <select
                                class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm text-gray-700"
                                onchange={on_locale_change}
                            >
                                { for Locale::ALL.iter().map(|locale| html! {
                                    <option value={locale.code()} selected={*locale == props.current_locale}>
                                        {locale.native_name()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        { cta("w-full rounded-full bg-green-600 px-6 py-3 font-semibold text-white shadow-md transition-colors duration-200 hover:bg-green-700") }
                    </div>
                </div>
            </div>
        </header>
    }
}
