use yew::prelude::*;

use crate::i18n::Reward;
use crate::utils::format::remaining_bar_width;
use crate::utils::selection::toggle;

#[derive(Properties, PartialEq)]
pub struct RewardsSectionProps {
    pub title: String,
    pub subtitle: String,
    pub rewards: Vec<Reward>,
}

/// Remaining slots to advertise; only limited tiers with stock left qualify.
pub fn advertised_remaining(reward: &Reward) -> Option<u32> {
    match reward.remaining {
        Some(remaining) if reward.limited && remaining > 0 => Some(remaining),
        _ => None,
    }
}

#[function_component(RewardsSection)]
pub fn rewards_section(props: &RewardsSectionProps) -> Html {
    let selected = use_state(|| None::<String>);

    html! {
        <section class="bg-gray-50 py-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="mb-4 text-3xl font-bold text-gray-900 lg:text-4xl">{&props.title}</h2>
                    <p class="mx-auto max-w-3xl text-lg text-gray-600">{&props.subtitle}</p>
                </div>

                <div class="grid gap-6 lg:gap-8">
                    { for props.rewards.iter().enumerate().map(|(index, reward)| {
                        let is_selected = selected.as_deref() == Some(reward.id.as_str());
                        let on_select = {
                            let selected = selected.clone();
                            let id = reward.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                selected.set(toggle((*selected).clone(), id.clone()));
                            })
                        };
                        let remaining = advertised_remaining(reward);
                        html! {
                            <div
                                key={reward.id.clone()}
                                style={format!("animation-delay: {}ms;", index * 100)}
                                class={classes!(
                                    "animate-fade-in-up", "rounded-lg", "border-2", "bg-white",
                                    "transition-all", "duration-200", "hover:shadow-lg",
                                    if reward.popular { "border-green-500 shadow-lg" } else { "border-gray-200 hover:border-gray-300" },
                                    is_selected.then_some("ring-2 ring-green-500 border-green-500"),
                                )}
                            >
                                if reward.popular {
                                    <div class="rounded-t-lg bg-green-500 px-4 py-2 text-center text-sm font-semibold text-white">
                                        {"Most Popular"}
                                    </div>
                                }
                                <div class="p-6 lg:p-8">
                                    <div class="flex flex-col lg:flex-row lg:items-start lg:justify-between">
                                        <div class="flex-1 lg:pr-8">
                                            <div class="mb-4">
                                                <div class="mb-2 flex items-baseline space-x-2">
                                                    <span class="text-2xl font-bold text-gray-900 lg:text-3xl">{&reward.price}</span>
                                                    if let Some(original) = &reward.original_price {
                                                        <span class="text-lg text-gray-500 line-through">{original}</span>
                                                    }
                                                </div>
                                                <h3 class="mb-2 text-xl font-semibold text-gray-900 lg:text-2xl">{&reward.title}</h3>
                                                <p class="leading-relaxed text-gray-600">{&reward.description}</p>
                                            </div>
                                            <div class="mb-6">
                                                <h4 class="mb-3 font-semibold text-gray-900">{"Includes:"}</h4>
                                                <ul class="space-y-2">
                                                    { for reward.includes.iter().map(|item| html! {
                                                        <li class="flex items-start space-x-2">
                                                            <span class="mt-0.5 flex-shrink-0 text-green-500">{"✓"}</span>
                                                            <span class="text-gray-700">{item}</span>
                                                        </li>
                                                    }) }
                                                </ul>
                                            </div>
                                            <div class="mb-4 text-sm text-gray-600">
                                                <span class="font-medium">{"Estimated delivery:"}</span>{" "}{&reward.delivery}
                                            </div>
                                        </div>
                                        <div class="lg:w-64 lg:flex-shrink-0">
                                            <div class="space-y-4">
                                                <div class="text-center lg:text-left">
                                                    <div class="text-lg font-semibold text-gray-900">{format!("{} backers", reward.backers)}</div>
                                                    if let Some(remaining) = remaining {
                                                        <div class="text-sm text-orange-600">{format!("Only {} left!", remaining)}</div>
                                                    }
                                                </div>
                                                <button
                                                    type="button"
                                                    onclick={on_select}
                                                    class={classes!(
                                                        "w-full", "rounded-lg", "px-6", "py-3", "font-semibold", "text-white",
                                                        "transition-colors", "duration-200",
                                                        if is_selected { "bg-green-600 hover:bg-green-700" } else { "bg-gray-900 hover:bg-gray-800" },
                                                    )}
                                                >
                                                    { if is_selected { "Selected" } else { "Select this reward" } }
                                                </button>
                                                if let Some(remaining) = remaining {
                                                    <div class="h-2 w-full rounded-full bg-gray-200">
                                                        <div class="h-2 rounded-full bg-orange-500"
                                                            style={format!("width: {}%;", remaining_bar_width(remaining, reward.backers))} />
                                                    </div>
                                                }
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="mt-12 text-center">
                    <p class="mb-6 text-gray-600">
                        {"Can't decide? You can change your reward selection until the campaign ends."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RewardsSidebarProps {
    pub rewards: Vec<Reward>,
    pub on_select_reward: Callback<String>,
}

/// Compact preview of the first few tiers, shown beside the story.
#[function_component(RewardsSidebar)]
pub fn rewards_sidebar(props: &RewardsSidebarProps) -> Html {
    let Some(first) = props.rewards.first() else {
        return html! {};
    };
    let preview = &props.rewards[..props.rewards.len().min(3)];

    let select = |id: &str| {
        let on_select_reward = props.on_select_reward.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| on_select_reward.emit(id.clone()))
    };

    html! {
        <aside class="sticky top-32 space-y-6 lg:top-36">
            <div class="rounded-xl border border-gray-200 bg-white p-6 shadow-sm">
                <h3 class="text-lg font-semibold text-gray-900">{"Choose a reward"}</h3>
                <p class="mt-2 text-sm text-gray-600">
                    {"Support UmamiBox and unlock curated boxes of premium Vietnamese beef."}
                </p>
                <button type="button" onclick={select(&first.id)}
                    class="mt-4 w-full rounded-full bg-green-600 px-5 py-3 text-sm font-semibold text-white shadow-md transition-colors duration-200 hover:bg-green-700">
                    {"Back this project"}
                </button>
            </div>

            <div class="space-y-4">
                { for preview.iter().map(|reward| html! {
                    <div key={reward.id.clone()}
                        class="rounded-xl border border-gray-200 bg-white p-5 shadow-sm transition-all duration-200 hover:-translate-y-0.5 hover:shadow-lg">
                        <div class="flex items-start justify-between gap-4">
                            <div>
                                <p class="text-xs font-semibold uppercase tracking-wide text-gray-500">{&reward.price}</p>
                                <h4 class="mt-1 text-base font-semibold text-gray-900">{&reward.title}</h4>
                            </div>
                            if reward.popular {
                                <span class="rounded-full bg-green-100 px-3 py-1 text-xs font-semibold uppercase tracking-wide text-green-700">
                                    {"Popular"}
                                </span>
                            }
                        </div>
                        <p class="mt-3 text-sm text-gray-600">{&reward.description}</p>
                        <div class="mt-4 flex items-center justify-between text-xs text-gray-500">
                            <span>{format!("{} backers", reward.backers)}</span>
                            <span>{format!("Ships {}", reward.delivery)}</span>
                        </div>
                        <button type="button" onclick={select(&reward.id)}
                            class="mt-4 w-full rounded-full border border-gray-300 px-4 py-2 text-sm font-semibold text-gray-700 transition-colors duration-200 hover:border-gray-400 hover:text-gray-900">
                            {"Select reward"}
                        </button>
                    </div>
                }) }
            </div>
        </aside>
    }
}
