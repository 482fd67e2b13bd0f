use yew::prelude::*;

use crate::i18n::StoryMessages;
use crate::utils::reveal::{reveal_classes, use_in_view_once};

const GALLERY: [(&str, &str); 4] = [
    ("/images/kvs-xet-13.jpg", "Farm 1"),
    ("/images/kvs-xet-14.jpg", "Farm 2"),
    ("/images/space-1.JPG", "Processing"),
    ("/images/space-2.JPG", "Quality Control"),
];

#[derive(Properties, PartialEq)]
pub struct StorySectionProps {
    pub messages: StoryMessages,
}

#[function_component(StorySection)]
pub fn story_section(props: &StorySectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), "-100px");
    let messages = &props.messages;

    let block = |index: u32, content: Html| {
        let (class, style) = reveal_classes(in_view, 200 + index * 300);
        html! { <div class={class} style={style}>{content}</div> }
    };

    html! {
        <section ref={node} class="bg-gradient-to-b from-white to-amber-50 py-20">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-7xl">
                    { block(0, html! {
                        <h2 class="mb-16 text-center text-4xl font-bold text-gray-800 md:text-5xl">{&messages.title}</h2>
                    }) }

                    { block(1, html! {
                        <div class="mb-20 grid items-center gap-12 md:grid-cols-2">
                            <div class="relative h-96 w-full overflow-hidden rounded-2xl shadow-2xl">
                                <img src="/images/kvs-xet-7.jpg" alt={messages.founder.name.clone()}
                                    class="absolute inset-0 h-full w-full object-cover" />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent"></div>
                            </div>
                            <div class="space-y-6">
                                <h3 class="mb-2 text-2xl font-bold text-gray-800 md:text-3xl">{&messages.founder.name}</h3>
                                <p class="mb-4 text-lg font-semibold text-orange-600">{&messages.founder.role}</p>
                                <p class="text-lg leading-relaxed text-gray-600">{&messages.founder.description}</p>
                            </div>
                        </div>
                    }) }

                    <div class="mb-16 grid gap-12 md:grid-cols-2">
                        { block(2, html! {
                            <div class="rounded-2xl border border-red-100 bg-white p-8 shadow-lg">
                                <div class="mb-6 flex items-center">
                                    <div class="mr-4 flex h-12 w-12 items-center justify-center rounded-full bg-red-100 text-red-600">{"!"}</div>
                                    <h3 class="text-2xl font-bold text-gray-800">{&messages.problem.title}</h3>
                                </div>
                                <p class="leading-relaxed text-gray-600">{&messages.problem.description}</p>
                            </div>
                        }) }
                        { block(3, html! {
                            <div class="rounded-2xl border border-green-100 bg-white p-8 shadow-lg">
                                <div class="mb-6 flex items-center">
                                    <div class="mr-4 flex h-12 w-12 items-center justify-center rounded-full bg-green-100 text-green-600">{"✓"}</div>
                                    <h3 class="text-2xl font-bold text-gray-800">{&messages.solution.title}</h3>
                                </div>
                                <p class="leading-relaxed text-gray-600">{&messages.solution.description}</p>
                            </div>
                        }) }
                    </div>

                    { block(4, html! {
                        <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                            { for GALLERY.iter().map(|(src, alt)| html! {
                                <div class="relative h-48 overflow-hidden rounded-xl shadow-lg transition-transform duration-300 hover:scale-105">
                                    <img src={*src} alt={*alt}
                                        class="absolute inset-0 h-full w-full object-cover transition-transform duration-300 hover:scale-110" />
                                </div>
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
