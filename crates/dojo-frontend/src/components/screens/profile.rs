use yew::prelude::*;

use crate::components::style::{CARD_CLASSES, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::components::{Loading, StatCard};
use crate::hooks::use_load;
use crate::providers::{use_api, use_session};

#[function_component(ProfileScreen)]
pub fn profile_screen() -> Html {
    let api = use_api();
    let session = use_session();
    let progress = use_load("profile progress", (), move |_| async move {
        api.fetch_progress().await
    });

    let Some(identity) = session.identity() else {
        return html! {};
    };

    let field = |label: &'static str, value: String| {
        html! {
            <div>
                <dt class={classes!("text-sm", TEXT_SECONDARY)}>{ label }</dt>
                <dd class={classes!("mt-1", "font-medium", TEXT_PRIMARY)}>{ value }</dd>
            </div>
        }
    };

    html! {
        <div class="space-y-6">
            <h2 class={classes!("text-2xl", "font-bold", TEXT_PRIMARY)}>{ "Profile" }</h2>

            <div class={classes!(CARD_CLASSES, "flex", "items-center", "gap-6")}>
                <div class="h-20 w-20 bg-green-600 rounded-full flex items-center justify-center">
                    <span class="text-3xl font-bold text-white">{ identity.initial() }</span>
                </div>
                <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 flex-1">
                    { field("Full name", identity.display_name().to_string()) }
                    { field("Username", format!("@{}", identity.username)) }
                    { field("Email", identity.email.clone()) }
                    { field("Member status", if identity.points > 0 { "Active solver".to_string() } else { "Getting started".to_string() }) }
                </dl>
            </div>

            {
                if progress.loading {
                    html! { <Loading label="Loading statistics..." /> }
                } else {
                    let stats = &progress.data.stats;
                    html! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            <StatCard label="Points" value={progress.data.user.points.to_string()} accent="text-yellow-600 dark:text-yellow-400" />
                            <StatCard label="Streak" value={format!("{} days", progress.data.user.streak_days)} accent="text-orange-600 dark:text-orange-400" />
                            <StatCard label="Solved" value={format!("{}/{}", stats.solved_questions, stats.total_questions)} />
                            <StatCard label="Submissions" value={stats.total_submissions.to_string()} hint={format!("{:.1}% accuracy", stats.accuracy)} accent="text-blue-600 dark:text-blue-400" />
                        </div>
                    }
                }
            }
        </div>
    }
}
