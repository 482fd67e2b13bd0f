use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::i18n::StretchGoalsMessages;
use crate::utils::format::{
    format_amount, goal_progress, parse_amount, CountUp, COUNT_UP_DELAY_MS, COUNT_UP_TICK_MS,
};
use crate::utils::reveal::{reveal_classes, use_in_view_once};

#[derive(Properties, PartialEq)]
pub struct StretchGoalsProps {
    pub messages: StretchGoalsMessages,
}

#[function_component(StretchGoals)]
pub fn stretch_goals(props: &StretchGoalsProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), "-50px");
    let target = parse_amount(&props.messages.current_amount);
    let displayed = use_state(|| 0u64);

    // Count the raised amount up once the section scrolls into view
    {
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |(in_view, target): &(bool, u64)| {
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let mut delay = None;

                if *in_view {
                    let ticker = ticker.clone();
                    let target = *target;
                    delay = Some(Timeout::new(COUNT_UP_DELAY_MS, move || {
                        let mut steps = CountUp::new(target);
                        let stop = ticker.clone();
                        let interval = Interval::new(COUNT_UP_TICK_MS, move || match steps.next() {
                            Some(value) => displayed.set(value),
                            None => {
                                // cancel from outside the running tick
                                let stop = stop.clone();
                                Timeout::new(0, move || {
                                    stop.borrow_mut().take();
                                })
                                .forget();
                            }
                        });
                        *ticker.borrow_mut() = Some(interval);
                    }));
                }

                move || {
                    drop(delay);
                    ticker.borrow_mut().take();
                }
            },
            (in_view, target),
        );
    }

    let messages = &props.messages;

    html! {
        <section ref={node} class="bg-gradient-to-b from-amber-50 to-white py-20">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-5xl">
                    {{
                        let (class, style) = reveal_classes(in_view, 0);
                        html! {
                            <div class={class} style={style}>
                                <h2 class="mb-4 text-center text-4xl font-bold text-gray-800 md:text-5xl">{&messages.title}</h2>
                                <p class="mb-8 text-center text-lg text-gray-600">{&messages.subtitle}</p>
                                <div class="mb-12 text-center">
                                    <span class="text-5xl font-bold text-orange-600">{format!("{}₫", format_amount(*displayed))}</span>
                                </div>
                            </div>
                        }
                    }}

                    <div class="space-y-6">
                        { for messages.goals.iter().enumerate().map(|(index, goal)| {
                            let goal_amount = parse_amount(&goal.amount);
                            let progress = goal_progress(*displayed, goal_amount);
                            let reached = *displayed >= goal_amount;
                            let (class, style) = reveal_classes(in_view, 200 + index as u32 * 150);
                            html! {
                                <div key={goal.amount.clone()} class={class} style={style}>
                                    <div class={classes!(
                                        "rounded-xl", "border-2", "bg-white", "p-6", "shadow-sm",
                                        if reached { "border-green-500" } else { "border-gray-200" },
                                    )}>
                                        <div class="mb-3 flex items-center justify-between">
                                            <h3 class="text-xl font-semibold text-gray-900">{&goal.title}</h3>
                                            <span class="font-bold text-orange-600">{format!("{}₫", format_amount(goal_amount))}</span>
                                        </div>
                                        <p class="mb-4 text-gray-600">{&goal.description}</p>
                                        <div class="h-3 w-full overflow-hidden rounded-full bg-gray-200">
                                            <div
                                                class={classes!(
                                                    "h-3", "rounded-full", "transition-all", "duration-300",
                                                    if reached { "bg-green-500" } else { "bg-orange-500" },
                                                )}
                                                style={format!("width: {}%;", progress)}
                                            />
                                        </div>
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
