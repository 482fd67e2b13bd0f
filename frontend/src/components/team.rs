use yew::prelude::*;

use crate::i18n::{TeamMember, TeamMessages};
use crate::utils::reveal::{reveal_classes, use_in_view_once};

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    pub messages: TeamMessages,
}

/// Up to two initials, used when a member has no photo.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn avatar(member: &TeamMember) -> Html {
    match &member.image {
        Some(src) => html! {
            <img src={src.clone()} alt={member.name.clone()}
                class="mx-auto h-32 w-32 rounded-full object-cover shadow-md" />
        },
        None => html! {
            <div class="mx-auto flex h-32 w-32 items-center justify-center rounded-full bg-orange-100 text-3xl font-bold text-orange-600 shadow-md">
                {initials(&member.name)}
            </div>
        },
    }
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), "-100px");
    let messages = &props.messages;
    let (heading_class, heading_style) = reveal_classes(in_view, 0);

    html! {
        <section ref={node} class="bg-white py-20">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-6xl">
                    <div class={heading_class} style={heading_style}>
                        <h2 class="mb-4 text-center text-4xl font-bold text-gray-800 md:text-5xl">{&messages.title}</h2>
                        <p class="mb-12 text-center text-lg text-gray-600">{&messages.subtitle}</p>
                    </div>
                    <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                        { for messages.members.iter().enumerate().map(|(index, member)| {
                            let (class, style) = reveal_classes(in_view, 200 + index as u32 * 150);
                            html! {
                                <div key={member.name.clone()} class={class} style={style}>
                                    <div class="h-full rounded-2xl bg-amber-50 p-8 text-center shadow-sm transition-shadow duration-200 hover:shadow-lg">
                                        { avatar(member) }
                                        <h3 class="mt-6 text-xl font-bold text-gray-800">{&member.name}</h3>
                                        <p class="mb-4 font-semibold text-orange-600">{&member.position}</p>
                                        <p class="leading-relaxed text-gray-600">{&member.description}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
