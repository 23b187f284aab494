use yew::prelude::*;

use dojo::data::ProgressReport;

use crate::components::style::{CARD_CLASSES, TEXT_PRIMARY};
use crate::components::{Bar, Loading, ProgressRing, StatCard};
use crate::hooks::use_load;
use crate::providers::use_api;

#[function_component(DashboardScreen)]
pub fn dashboard_screen() -> Html {
    let api = use_api();
    let progress = use_load("progress", (), move |_| async move { api.fetch_progress().await });

    if progress.loading {
        return html! { <Loading label="Loading your progress..." /> };
    }

    let ProgressReport { user, stats } = progress.data;
    let unsolved = stats.total_questions.saturating_sub(stats.solved_questions);

    html! {
        <div class="space-y-6">
            <h2 class={classes!("text-2xl", "font-bold", TEXT_PRIMARY)}>{ "Dashboard" }</h2>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard label="Total Points" value={user.points.to_string()} accent="text-yellow-600 dark:text-yellow-400" />
                <StatCard label="Current Streak" value={format!("{} days", user.streak_days)} accent="text-orange-600 dark:text-orange-400" />
                <StatCard
                    label="Problems Solved"
                    value={format!("{}/{}", stats.solved_questions, stats.total_questions)}
                />
                <StatCard
                    label="Accuracy"
                    value={format!("{:.1}%", stats.accuracy)}
                    hint={format!("{} submissions", stats.total_submissions)}
                    accent="text-blue-600 dark:text-blue-400"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class={CARD_CLASSES}>
                    <h3 class={classes!("text-lg", "font-semibold", "mb-4", TEXT_PRIMARY)}>{ "Completion" }</h3>
                    <ProgressRing
                        ratio={stats.solved_ratio()}
                        label={format!("{:.0}%", stats.solved_ratio() * 100.0)}
                        caption={format!("{} solved, {} to go", stats.solved_questions, unsolved)}
                    />
                </div>
                <div class={CARD_CLASSES}>
                    <h3 class={classes!("text-lg", "font-semibold", "mb-4", TEXT_PRIMARY)}>{ "Performance" }</h3>
                    <div class="space-y-5">
                        <Bar label="Accuracy" percent={stats.accuracy} color="bg-blue-500" />
                        <Bar label="Problems solved" percent={stats.solved_ratio() * 100.0} />
                    </div>
                </div>
            </div>
        </div>
    }
}
