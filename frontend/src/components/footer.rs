use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::header::locale_select_handler;
use crate::i18n::{FooterMessages, Locale};
use crate::utils::api::Api;

#[derive(Serialize)]
struct SubscribeRequest {
    email: String,
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub messages: FooterMessages,
    pub logo: String,
    pub current_locale: Locale,
    pub on_language_change: Callback<Locale>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let email = use_state(String::new);
    let messages = &props.messages;

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim().to_string();
            if address.is_empty() {
                return;
            }
            let email = email.clone();
            spawn_local(async move {
                let request = match Api::post("/api/newsletter").json(&SubscribeRequest { email: address }) {
                    Ok(request) => request,
                    Err(e) => {
                        log::error!("Failed to encode newsletter request: {}", e);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => {
                        log::info!("Newsletter subscription accepted");
                        email.set(String::new());
                    }
                    // non-2xx responses are already logged by the client
                    Ok(_) | Err(_) => {}
                }
            });
        })
    };

    let on_locale_change = locale_select_handler(props.on_language_change.clone());

    html! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="mx-auto max-w-7xl px-4 py-16 sm:px-6 lg:px-8">
                <div class="grid gap-12 md:grid-cols-2 lg:grid-cols-4">
                    <div class="lg:col-span-2">
                        <div class="mb-4 flex items-center gap-2">
                            <img src="/logo.png" alt={props.logo.clone()} width="36" height="36"
                                class="h-9 w-9 rounded-full object-cover" />
                            <span class="text-xl font-semibold text-white">{&props.logo}</span>
                        </div>
                        <p class="mb-6 max-w-md leading-relaxed text-gray-400">{&messages.description}</p>
                        <h4 class="mb-3 font-semibold text-white">{&messages.newsletter.title}</h4>
                        <form class="flex max-w-md gap-2" onsubmit={on_subscribe}>
                            <input
                                type="email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email_input}
                                placeholder={messages.newsletter.placeholder.clone()}
                                class="flex-1 rounded-lg border border-gray-700 bg-gray-800 px-4 py-2 text-white placeholder-gray-500 focus:border-green-500 focus:outline-none"
                            />
                            <button type="submit"
                                class="rounded-lg bg-green-600 px-5 py-2 font-semibold text-white transition-colors duration-200 hover:bg-green-700">
                                {&messages.newsletter.subscribe}
                            </button>
                        </form>
                    </div>

                    <div>
                        <h4 class="mb-4 font-semibold text-white">{&messages.quick_links.title}</h4>
                        <ul class="space-y-2">
                            { for messages.quick_links.links.iter().map(|link| html! {
                                <li key={link.href.clone()}>
                                    <a href={link.href.clone()} class="transition-colors duration-200 hover:text-white">{&link.text}</a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4 class="mb-4 font-semibold text-white">{&messages.contact.title}</h4>
                        <ul class="mb-6 space-y-2 text-sm">
                            <li>
                                <a href={format!("mailto:{}", messages.contact.email)} class="hover:text-white">
                                    {&messages.contact.email}
                                </a>
                            </li>
                            <li>{&messages.contact.address}</li>
                        </ul>
                        <label class="mb-2 block text-sm font-semibold text-white">{&messages.language}</label>
                        <select
                            onchange={on_locale_change}
                            class="rounded-lg border border-gray-700 bg-gray-800 px-3 py-2 text-sm text-white"
                        >
                            { for Locale::ALL.iter().map(|locale| html! {
                                <option value={locale.code()} selected={*locale == props.current_locale}>
                                    {locale.native_name()}
                                </option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="mt-12 flex flex-col items-center justify-between gap-4 border-t border-gray-800 pt-8 text-sm text-gray-500 md:flex-row">
                    <p>{&messages.copyright}</p>
                    <div class="flex gap-6">
                        <a href="#" class="hover:text-white">{&messages.legal.privacy}</a>
                        <a href="#" class="hover:text-white">{&messages.legal.terms}</a>
                        <a href="#" class="hover:text-white">{&messages.legal.cookies}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
