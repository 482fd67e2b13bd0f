use yew::prelude::*;

use crate::i18n::{FaqEntry, FaqMessages, SupportMessages};
use crate::utils::reveal::{reveal_classes, use_in_view_once};
use crate::utils::selection::toggle;

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub messages: FaqMessages,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="overflow-hidden rounded-2xl border border-gray-200 bg-white shadow-lg transition-all duration-300 hover:shadow-xl">
            <button
                type="button"
                class="flex w-full items-center justify-between px-6 py-6 text-left transition-colors duration-300 hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-orange-500"
                aria-expanded={props.is_open.to_string()}
                onclick={props.on_toggle.clone()}
            >
                <h3 class="pr-4 text-lg font-semibold text-gray-800">{&props.entry.question}</h3>
                <span class={classes!(
                    "flex-shrink-0", "text-orange-600", "transition-transform", "duration-300",
                    props.is_open.then_some("rotate-180"),
                )}>
                    <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                    </svg>
                </span>
            </button>
            if props.is_open {
                <div class="animate-expand border-t border-gray-100 px-6 pb-6">
                    <p class="whitespace-pre-line pt-4 leading-relaxed text-gray-600">{&props.entry.answer}</p>
                </div>
            }
        </div>
    }
}

fn support_block(support: &SupportMessages) -> Html {
    html! {
        <div class="rounded-2xl bg-gradient-to-r from-orange-100 to-red-100 p-8">
            <h3 class="mb-4 text-2xl font-bold text-gray-800">{&support.title}</h3>
            <p class="mx-auto mb-6 max-w-2xl text-gray-600">{&support.description}</p>
            <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                <a href={format!("mailto:{}", support.email)}
                    class="flex items-center space-x-2 rounded-full bg-gradient-to-r from-orange-500 to-red-600 px-6 py-3 font-semibold text-white shadow-lg transition-all duration-300 hover:scale-105 hover:shadow-xl">
                    <span>{&support.email}</span>
                </a>
                <a href={format!("tel:{}", support.phone.replace(' ', ""))}
                    class="flex items-center space-x-2 rounded-full border-2 border-gray-300 bg-white px-6 py-3 font-semibold text-gray-800 transition-all duration-300 hover:border-orange-500 hover:text-orange-600">
                    <span>{&support.phone}</span>
                </a>
            </div>
            <div class="mt-6 text-sm text-gray-600">
                <p class="mb-1 font-semibold">{&support.hours_title}</p>
                { for support.hours.iter().map(|line| html! { <p>{line}</p> }) }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), "-100px");
    // First question starts expanded
    let open_index = use_state(|| Some(0usize));
    let messages = &props.messages;

    let (header_class, header_style) = reveal_classes(in_view, 200);
    let (list_class, list_style) = reveal_classes(in_view, 300);
    let (support_class, support_style) = reveal_classes(in_view, 800);

    html! {
        <section ref={node} class="bg-gradient-to-b from-gray-50 to-white py-20">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-4xl">
                    <div class={classes!("mb-16", "text-center", header_class)} style={header_style}>
                        <h2 class="mb-6 text-4xl font-bold text-gray-800 md:text-5xl">{&messages.title}</h2>
                        <p class="mx-auto max-w-3xl text-xl leading-relaxed text-gray-600">{&messages.subtitle}</p>
                    </div>

                    <div class={classes!("space-y-4", list_class)} style={list_style}>
                        { for messages.questions.iter().enumerate().map(|(index, entry)| {
                            let on_toggle = {
                                let open_index = open_index.clone();
                                Callback::from(move |_: MouseEvent| open_index.set(toggle(*open_index, index)))
                            };
                            html! {
                                <FaqItem
                                    key={index}
                                    entry={entry.clone()}
                                    is_open={*open_index == Some(index)}
                                    on_toggle={on_toggle}
                                />
                            }
                        }) }
                    </div>

                    if let Some(support) = &messages.support {
                        <div class={classes!("mt-16", "text-center", support_class)} style={support_style}>
                            { support_block(support) }
                        </div>
                    }
                </div>
            </div>
        </section>
    }
}
