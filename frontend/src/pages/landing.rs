use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::HeroSection;
use crate::components::project_nav::ProjectNav;
use crate::components::rewards::{RewardsSection, RewardsSidebar};
use crate::components::story::StorySection;
use crate::components::stretch_goals::StretchGoals;
use crate::components::team::TeamSection;
use crate::i18n::{fetch_messages, Locale, Messages};
use crate::nav::dom::scroll_into_view;
use crate::nav::tracker::NavigationItem;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub locale: Locale,
}

pub fn page_title(messages: &Messages) -> String {
    format!("{} | UmamiBox", messages.hero.title)
}

/// Section bar entries, in page order.
pub fn section_nav_items(messages: &Messages) -> Vec<NavigationItem> {
    let nav = &messages.header.nav;
    vec![
        NavigationItem::new(nav.story.clone(), "story"),
        NavigationItem::new(nav.rewards.clone(), "rewards"),
        NavigationItem::new(nav.faq.clone(), "faq"),
    ]
}

pub fn locale_route(locale: Locale) -> Route {
    match locale {
        Locale::En => Route::Home,
        other => Route::Localized {
            locale: other.code().to_string(),
        },
    }
}

fn apply_document_meta(messages: &Messages) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&page_title(messages));
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        if let Err(e) = meta.set_attribute("content", &messages.hero.subtitle) {
            log::warn!("Failed to update description meta: {:?}", e);
        }
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let messages = use_state(|| None::<Messages>);
    let navigator = use_navigator();

    // Load the catalog whenever the locale changes
    {
        let messages = messages.clone();
        use_effect_with_deps(
            move |locale: &Locale| {
                let locale = *locale;
                spawn_local(async move {
                    match fetch_messages(locale).await {
                        Ok(loaded) => {
                            apply_document_meta(&loaded);
                            messages.set(Some(loaded));
                        }
                        Err(e) => {
                            gloo_console::error!(e.clone());
                            log::error!("{}", e);
                        }
                    }
                });
                || ()
            },
            props.locale,
        );
    }

    let on_language_change = Callback::from(move |locale: Locale| match &navigator {
        Some(navigator) => navigator.push(&locale_route(locale)),
        None => log::warn!("No router available to switch to {}", locale.code()),
    });

    let Some(messages) = (*messages).clone() else {
        return html! {
            <div class="flex min-h-screen items-center justify-center text-gray-500">{"Loading..."}</div>
        };
    };

    let scroll_to_rewards = Callback::from(|_: ()| scroll_into_view("rewards"));
    let select_reward = Callback::from(|id: String| {
        log::debug!("reward {} picked from the sidebar", id);
        scroll_into_view("rewards");
    });

    html! {
        <div class="min-h-screen bg-white">
            <Header
                messages={messages.header.clone()}
                current_locale={props.locale}
                on_language_change={on_language_change.clone()}
            />

            <main>
                <div id="hero">
                    <HeroSection
                        messages={messages.hero.clone()}
                        campaign={messages.campaign.clone()}
                        scroll_to_rewards={scroll_to_rewards}
                    />
                </div>

                <ProjectNav items={section_nav_items(&messages)} />

                <div class="mx-auto max-w-7xl px-4 py-12 sm:px-6 lg:px-8">
                    <div class="grid gap-12 lg:grid-cols-12">
                        <div class="space-y-16 lg:col-span-8">
                            <section id="story" class="scroll-mt-40">
                                <StorySection messages={messages.story.clone()} />
                            </section>
                            <section id="faq" class="scroll-mt-40">
                                <FaqSection messages={messages.faq.clone()} />
                            </section>
                        </div>
                        <div class="lg:col-span-4">
                            <RewardsSidebar
                                rewards={messages.rewards.tiers.clone()}
                                on_select_reward={select_reward}
                            />
                        </div>
                    </div>
                </div>

                <section id="rewards" class="scroll-mt-40">
                    <RewardsSection
                        title={messages.rewards.title.clone()}
                        subtitle={messages.rewards.subtitle.clone()}
                        rewards={messages.rewards.tiers.clone()}
                    />
                </section>

                if let Some(stretch_goals) = messages.stretch_goals.clone() {
                    <StretchGoals messages={stretch_goals} />
                }
                if let Some(team) = messages.team.clone() {
                    <TeamSection messages={team} />
                }
            </main>

            <Footer
                messages={messages.footer.clone()}
                logo={messages.header.logo.clone()}
                current_locale={props.locale}
                on_language_change={on_language_change}
            />
        </div>
    }
}
