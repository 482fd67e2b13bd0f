use yew::prelude::*;

use crate::i18n::{Campaign, FundingPeriod, HeroMessages};
use crate::utils::format::funding_bar_width;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub messages: HeroMessages,
    pub campaign: Campaign,
    pub scroll_to_rewards: Callback<()>,
}

fn funding_period(period: &FundingPeriod) -> Html {
    html! {
        <div class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
            <h3 class="text-lg font-semibold text-gray-900">{&period.title}</h3>
            <p class="mt-2 text-sm text-gray-600">
                <span class="font-medium text-gray-900">{&period.start}</span>
                {" – "}
                <span class="font-medium text-gray-900">{&period.end}</span>
            </p>
            <p class="mt-1 text-sm text-gray-500">{&period.duration}</p>
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    // The bar grows from zero on first paint
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    let campaign = &props.campaign;
    let meta = &campaign.meta;
    let progress = if *mounted {
        funding_bar_width(campaign.percent_funded)
    } else {
        0.0
    };
    let on_cta = {
        let scroll_to_rewards = props.scroll_to_rewards.clone();
        Callback::from(move |_: MouseEvent| scroll_to_rewards.emit(()))
    };

    html! {
        <section class="border-b border-gray-200 bg-white">
            <div class="mx-auto max-w-6xl px-4 pb-12 pt-28 sm:px-6 lg:px-8 lg:pt-32">
                <div class="grid gap-10 lg:grid-cols-12">
                    <div class="animate-fade-in-left lg:col-span-8">
                        <div class="relative aspect-video overflow-hidden rounded-xl border border-gray-200 bg-black shadow-lg">
                            <img src="/images/kvs-xet-11.jpg" alt="UmamiBox project teaser"
                                class="absolute inset-0 h-full w-full object-cover" />
                            <div class="absolute inset-0 flex items-center justify-center bg-black/30 transition-colors duration-200 hover:bg-black/45">
                                <button type="button" aria-label="Play campaign video"
                                    class="flex h-16 w-16 items-center justify-center rounded-full bg-white/90 text-gray-900 shadow-lg transition-transform hover:scale-110">
                                    <svg class="ml-1 h-7 w-7" fill="currentColor" viewBox="0 0 20 20">
                                        <path d="M6.3 2.84A1.5 1.5 0 004 4.11v11.78a1.5 1.5 0 002.3 1.27l9.34-5.89a1.5 1.5 0 000-2.54L6.3 2.84z" />
                                    </svg>
                                </button>
                            </div>
                        </div>
                    </div>

                    <aside class="animate-fade-in-right flex flex-col gap-6 rounded-xl border border-gray-200 bg-gray-50 p-6 shadow-sm lg:col-span-4 lg:p-8">
                        <div>
                            <p class="text-4xl font-semibold tracking-tight text-gray-900">{&campaign.pledged}</p>
                            <p class="mt-2 text-sm text-gray-600">
                                {&campaign.labels.pledged}{" "}
                                <span class="font-medium text-gray-900">{&campaign.goal}</span>
                                {" "}{&campaign.labels.goal}
                            </p>
                        </div>

                        <div>
                            <div class="h-2.5 w-full rounded-full bg-gray-200">
                                <div
                                    class="h-2.5 rounded-full bg-green-500 transition-all duration-1000 ease-out"
                                    style={format!("width: {}%; box-shadow: 0 0 12px rgba(34,197,94,0.35);", progress)}
                                />
                            </div>
                            if let Some(status) = &campaign.status {
                                <p class="mt-3 text-sm font-medium text-green-600">
                                    {format!("{}% {}", campaign.percent_funded, status)}
                                </p>
                            }
                        </div>

                        <div class="grid grid-cols-2 gap-6 text-left text-sm">
                            <div>
                                <p class="text-2xl font-semibold text-gray-900">{&campaign.backers}</p>
                                <p class="mt-1 uppercase tracking-wide text-gray-500">{&campaign.labels.backers}</p>
                            </div>
                            if let Some(days_left) = &campaign.days_left {
                                <div>
                                    <p class="text-2xl font-semibold text-gray-900">{days_left}</p>
                                    <p class="mt-1 uppercase tracking-wide text-gray-500">{&campaign.labels.days_left}</p>
                                </div>
                            }
                        </div>

                        <div class="flex flex-col gap-3 sm:flex-row">
                            <button type="button" onclick={on_cta}
                                class="inline-flex flex-1 items-center justify-center rounded-full bg-green-600 px-6 py-3 text-sm font-semibold text-white shadow-lg transition-colors duration-200 hover:bg-green-700">
                                {&props.messages.cta}
                            </button>
                        </div>

                        if meta.last_updated_label.is_some() || meta.last_updated_value.is_some() {
                            <p class="text-xs text-gray-500">
                                <span class="font-medium text-gray-700">{meta.last_updated_label.clone().unwrap_or_default()}</span>
                                {" "}{meta.last_updated_value.clone().unwrap_or_default()}
                            </p>
                        }
                    </aside>
                </div>

                <div class="mt-12 grid gap-10 lg:grid-cols-12">
                    <div class="space-y-6 lg:col-span-8">
                        <div class="flex flex-wrap items-center gap-4 text-sm text-gray-600">
                            if let Some(badge) = &meta.badge {
                                <span class="inline-flex items-center gap-2 rounded-full bg-green-100 px-3 py-1 text-xs font-semibold uppercase tracking-wide text-green-700">
                                    <span class="h-2 w-2 rounded-full bg-green-500" />
                                    {badge}
                                </span>
                            }
                            if let Some(location) = &meta.location {
                                <span class="inline-flex items-center gap-2">{"📍 "}{location}</span>
                            }
                            if let Some(category) = &meta.category {
                                <span class="inline-flex items-center gap-2">{"🏷 "}{category}</span>
                            }
                        </div>
                        <div>
                            <h1 class="text-3xl font-semibold tracking-tight text-gray-900 sm:text-4xl">{&props.messages.title}</h1>
                            <p class="mt-4 text-lg leading-relaxed text-gray-700">{&props.messages.subtitle}</p>
                        </div>
                    </div>
                    <div class="lg:col-span-4">
                        { meta.funding_period.as_ref().map(funding_period).unwrap_or_default() }
                    </div>
                </div>
            </div>
        </section>
    }
}
