use web_sys::{HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use dojo::async_callback;
use dojo::data::{ProblemDetail, SubmissionRequest, SubmissionResult};
use dojo::filters::LANGUAGES;
use dojo::load::InFlight;
use dojo::log::{info, warn};

use crate::components::Loading;
use crate::components::style::{
    CARD_CLASSES, INPUT_CLASSES, PRIMARY_BUTTON, SECONDARY_BUTTON, TEXT_PRIMARY, TEXT_SECONDARY,
    difficulty_badge, submission_panel,
};
use crate::hooks::use_load;
use crate::providers::{use_api, use_confetti};

const EDITOR_CLASSES: &str = "w-full h-96 p-4 font-mono text-sm leading-6 bg-gray-900 text-green-200 rounded-lg border border-gray-700 focus:outline-none focus:ring-2 focus:ring-green-500 resize-y";
const INDENT: &str = "    ";

#[derive(Properties, PartialEq)]
pub struct EditorScreenProps {
    pub problem_id: Option<String>,
}

#[function_component(EditorScreen)]
pub fn editor_screen(props: &EditorScreenProps) -> Html {
    match &props.problem_id {
        Some(id) => html! { <Editor problem_id={id.clone()} /> },
        None => html! {
            <div class={classes!(CARD_CLASSES, "text-center", "py-16")}>
                <p class={classes!("text-lg", TEXT_PRIMARY)}>{ "No problem selected" }</p>
                <p class={classes!("mt-2", TEXT_SECONDARY)}>{ "Pick one from the Problems page to start coding." }</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct EditorProps {
    problem_id: String,
}

#[function_component(Editor)]
fn editor(props: &EditorProps) -> Html {
    let api = use_api();
    let confetti = use_confetti();

    let problem = {
        let api = api.clone();
        use_load("problem", props.problem_id.clone(), move |id| async move {
            api.fetch_problem(&id).await.map(Some)
        })
    };

    let code = use_state(String::new);
    let language = use_state(String::new);
    let result = use_state(|| None::<SubmissionResult>);
    let submitting = use_state(|| false);
    let in_flight = use_memo((), |_| InFlight::new());

    // Seed the editor whenever a different problem arrives.
    {
        let code = code.clone();
        let language = language.clone();
        let result = result.clone();
        use_effect_with(problem.data.clone(), move |problem: &Option<ProblemDetail>| {
            if let Some(problem) = problem {
                code.set(problem.starter_code.clone());
                language.set(problem.language.clone());
                result.set(None);
            }
        });
    }

    let on_code_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                code.set(area.value());
            }
        })
    };

    // Tab inserts spaces instead of leaving the textarea.
    let on_keydown = {
        let code = code.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Tab" {
                return;
            }
            e.prevent_default();
            let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() else {
                return;
            };
            let value = area.value();
            let start = area.selection_start().ok().flatten().unwrap_or(0) as usize;
            let end = area.selection_end().ok().flatten().unwrap_or(0) as usize;
            // Selection offsets are UTF-16 code units.
            let units: Vec<u16> = value.encode_utf16().collect();
            let (start, end) = (start.min(units.len()), end.min(units.len()));
            let next = format!(
                "{}{INDENT}{}",
                String::from_utf16_lossy(&units[..start]),
                String::from_utf16_lossy(&units[end..])
            );
            area.set_value(&next);
            let caret = (start + INDENT.len()) as u32;
            if let Err(err) = area.set_selection_range(caret, caret) {
                warn!(?err, "Failed to move the caret after indenting");
            }
            code.set(next);
        })
    };

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                language.set(select.value());
            }
        })
    };

    let on_reset = {
        let code = code.clone();
        let starter = problem.data.as_ref().map(|p| p.starter_code.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(starter) = &starter {
                code.set(starter.clone());
            }
        })
    };

    let on_submit = {
        let problem_id = props.problem_id.clone();
        let celebrate = confetti.celebrate.clone();
        async_callback!([api, problem_id, code, language, result, submitting, in_flight, celebrate] {
            if !in_flight.try_start() {
                return;
            }
            submitting.set(true);

            let request = SubmissionRequest {
                code: (*code).clone(),
                language: (*language).clone(),
            };
            let graded = api.submit(&problem_id, &request).await;
            info!(status = graded.status.label(), score = graded.score, "Submission graded");
            if graded.is_passed() {
                celebrate.emit(());
            }
            result.set(Some(graded));
            submitting.set(false);
            in_flight.finish();
        })
    };

    if problem.loading {
        return html! { <Loading label="Loading problem..." /> };
    }

    let Some(detail) = problem.data.as_ref() else {
        return html! {
            <div class={CARD_CLASSES}>
                <p class={TEXT_SECONDARY}>{ "This problem could not be loaded." }</p>
            </div>
        };
    };

    html! {
        <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
            <div class={classes!(CARD_CLASSES, "space-y-4")}>
                <div class="flex items-center justify-between">
                    <h2 class={classes!("text-2xl", "font-bold", TEXT_PRIMARY)}>{ &detail.title }</h2>
                    <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", "font-medium", difficulty_badge(&detail.difficulty))}>
                        { detail.difficulty.to_string() }
                    </span>
                </div>
                <p class={classes!("text-sm", TEXT_SECONDARY)}>
                    { format!("{} · {} · {} pts", detail.language, detail.topic, detail.points) }
                </p>
                <p class={classes!("whitespace-pre-line", TEXT_PRIMARY)}>{ &detail.description }</p>

                if !detail.test_cases.is_empty() {
                    <div>
                        <h3 class={classes!("font-semibold", "mb-2", TEXT_PRIMARY)}>{ "Examples" }</h3>
                        <div class="space-y-2">
                            { for detail.test_cases.iter().enumerate().map(|(index, case)| html! {
                                <div class="p-3 rounded-md bg-gray-50 dark:bg-gray-900 font-mono text-xs text-gray-800 dark:text-gray-200">
                                    <div class="font-sans font-medium mb-1">{ format!("Case {}", index + 1) }</div>
                                    <div>{ format!("Input: {}", case.input_text()) }</div>
                                    <div>{ format!("Expected: {}", case.expected_text()) }</div>
                                </div>
                            })}
                        </div>
                    </div>
                }
            </div>

            <div class="space-y-4">
                <div class="flex items-center gap-3">
                    <select class={classes!(INPUT_CLASSES, "max-w-xs")} onchange={on_language_change}>
                        { for language_options(&detail.language).into_iter().map(|option| html! {
                            <option value={option.clone()} selected={option == *language}>{ option.clone() }</option>
                        })}
                    </select>
                    <button class={SECONDARY_BUTTON} onclick={on_reset}>{ "Reset" }</button>
                    <button class={PRIMARY_BUTTON} onclick={on_submit} disabled={*submitting}>
                        { if *submitting { "Submitting..." } else { "Submit" } }
                    </button>
                </div>

                <textarea
                    class={EDITOR_CLASSES}
                    spellcheck="false"
                    value={(*code).clone()}
                    oninput={on_code_input}
                    onkeydown={on_keydown}
                />

                if let Some(result) = result.as_ref() {
                    <SubmissionPanel result={result.clone()} />
                }
            </div>
        </div>
    }
}

/// The problem's own language first, then the rest of the known ones.
fn language_options(problem_language: &str) -> Vec<String> {
    std::iter::once(problem_language.to_string())
        .chain(
            LANGUAGES
                .iter()
                .filter(|l| **l != problem_language)
                .map(|l| l.to_string()),
        )
        .collect()
}

#[derive(Properties, PartialEq)]
struct SubmissionPanelProps {
    result: SubmissionResult,
}

#[function_component(SubmissionPanel)]
fn submission_panel_view(props: &SubmissionPanelProps) -> Html {
    let result = &props.result;

    html! {
        <div class={classes!("p-4", "border", "rounded-lg", submission_panel(result.status))}>
            <div class="flex items-center justify-between">
                <span class="text-lg font-semibold">{ result.status.label() }</span>
                <span class="font-mono">{ format!("{:.0}%", result.score) }</span>
            </div>
            <p class="mt-1 text-sm">
                { format!("{}/{} test cases passed", result.passed_test_cases, result.total_test_cases) }
            </p>
            if result.points_earned > 0 {
                <p class="mt-1 text-sm font-medium">{ format!("+{} points", result.points_earned) }</p>
            }
        </div>
    }
}
