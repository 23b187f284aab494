use web_sys::HtmlSelectElement;
use yew::prelude::*;

use dojo::data::{Difficulty, ProblemSummary};
use dojo::filters::{LANGUAGES, ProblemFilter, TOPICS};

use crate::components::Loading;
use crate::components::style::{CARD_CLASSES, INPUT_CLASSES, TEXT_PRIMARY, TEXT_SECONDARY, difficulty_badge};
use crate::hooks::use_load;
use crate::providers::use_api;

#[derive(Properties, PartialEq)]
pub struct ProblemsScreenProps {
    /// Receives the id of the problem the user picked.
    pub on_select: Callback<String>,
}

#[derive(Properties, PartialEq)]
struct FilterSelectProps {
    label: AttrValue,
    value: String,
    options: Vec<String>,
    on_change: Callback<String>,
}

#[function_component(FilterSelect)]
fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    html! {
        <label class="block">
            <span class={classes!("block", "text-sm", "font-medium", "mb-1", TEXT_SECONDARY)}>{ &props.label }</span>
            <select class={INPUT_CLASSES} {onchange}>
                <option value="" selected={props.value.is_empty()}>{ "All" }</option>
                { for props.options.iter().map(|option| html! {
                    <option value={option.clone()} selected={*option == props.value}>{ option }</option>
                })}
            </select>
        </label>
    }
}

#[function_component(ProblemsScreen)]
pub fn problems_screen(props: &ProblemsScreenProps) -> Html {
    let api = use_api();
    let filter = use_state(ProblemFilter::default);

    let problems = use_load("problems", (*filter).clone(), move |filter| async move {
        api.fetch_problems(&filter).await
    });

    let set_field = |apply: fn(&mut ProblemFilter, String)| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            apply(&mut next, value);
            filter.set(next);
        })
    };

    let to_strings = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();

    html! {
        <div class="space-y-6">
            <h2 class={classes!("text-2xl", "font-bold", TEXT_PRIMARY)}>{ "Problems" }</h2>

            <div class={classes!(CARD_CLASSES, "grid", "grid-cols-1", "md:grid-cols-3", "gap-4")}>
                <FilterSelect
                    label="Language"
                    value={filter.language.clone()}
                    options={to_strings(LANGUAGES)}
                    on_change={set_field(|f, v| f.language = v)}
                />
                <FilterSelect
                    label="Difficulty"
                    value={filter.difficulty.clone()}
                    options={Difficulty::KNOWN.iter().map(|d| d.to_string()).collect::<Vec<_>>()}
                    on_change={set_field(|f, v| f.difficulty = v)}
                />
                <FilterSelect
                    label="Topic"
                    value={filter.topic.clone()}
                    options={to_strings(TOPICS)}
                    on_change={set_field(|f, v| f.topic = v)}
                />
            </div>

            {
                if problems.loading {
                    html! { <Loading label="Loading problems..." /> }
                } else if problems.data.is_empty() {
                    html! {
                        <div class={classes!(CARD_CLASSES, "text-center")}>
                            <p class={TEXT_SECONDARY}>{ "No problems match these filters." }</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="space-y-3">
                            { for problems.data.iter().map(|problem| html! {
                                <ProblemRow
                                    key={problem.id.clone()}
                                    problem={problem.clone()}
                                    on_select={props.on_select.clone()}
                                />
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProblemRowProps {
    problem: ProblemSummary,
    on_select: Callback<String>,
}

#[function_component(ProblemRow)]
fn problem_row(props: &ProblemRowProps) -> Html {
    let problem = &props.problem;
    let onclick = {
        let on_select = props.on_select.clone();
        let id = problem.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    html! {
        <div class={classes!(CARD_CLASSES, "flex", "items-center", "justify-between", "hover:border-green-500", "transition-colors")}>
            <div>
                <h3 class={classes!("text-lg", "font-semibold", TEXT_PRIMARY)}>{ &problem.title }</h3>
                <div class="mt-2 flex flex-wrap items-center gap-2 text-xs">
                    <span class={classes!("px-2", "py-0.5", "rounded-full", "font-medium", difficulty_badge(&problem.difficulty))}>
                        { problem.difficulty.to_string() }
                    </span>
                    <span class="px-2 py-0.5 rounded-full bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200">{ &problem.language }</span>
                    <span class="px-2 py-0.5 rounded-full bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200">{ &problem.topic }</span>
                    <span class={TEXT_SECONDARY}>{ format!("{} pts", problem.points) }</span>
                </div>
            </div>
            <button class="px-4 py-2 bg-green-600 hover:bg-green-700 text-white text-sm font-medium rounded-md" {onclick}>
                { "Solve" }
            </button>
        </div>
    }
}
