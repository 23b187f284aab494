use yew::prelude::*;

use crate::components::Loading;
use crate::components::style::{CARD_CLASSES, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::hooks::use_load;
use crate::providers::{use_api, use_session};

fn rank_badge(rank: u32) -> Html {
    match rank {
        1 => html! { <span class="text-2xl">{ "🥇" }</span> },
        2 => html! { <span class="text-2xl">{ "🥈" }</span> },
        3 => html! { <span class="text-2xl">{ "🥉" }</span> },
        rank => html! { <span class={classes!("font-mono", TEXT_SECONDARY)}>{ format!("#{rank}") }</span> },
    }
}

#[function_component(LeaderboardScreen)]
pub fn leaderboard_screen() -> Html {
    let api = use_api();
    let session = use_session();
    let leaderboard = use_load("leaderboard", (), move |_| async move {
        api.fetch_leaderboard().await
    });

    let me = session.identity().map(|identity| identity.username.clone());

    html! {
        <div class="space-y-6">
            <h2 class={classes!("text-2xl", "font-bold", TEXT_PRIMARY)}>{ "Leaderboard" }</h2>
            {
                if leaderboard.loading {
                    html! { <Loading label="Loading leaderboard..." /> }
                } else if leaderboard.data.is_empty() {
                    html! {
                        <div class={classes!(CARD_CLASSES, "text-center")}>
                            <p class={TEXT_SECONDARY}>{ "No rankings yet." }</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class={classes!(CARD_CLASSES, "p-0", "overflow-hidden")}>
                            <table class="w-full text-left">
                                <thead class="bg-gray-50 dark:bg-gray-900 text-xs uppercase text-gray-500 dark:text-gray-400">
                                    <tr>
                                        <th class="px-6 py-3">{ "Rank" }</th>
                                        <th class="px-6 py-3">{ "User" }</th>
                                        <th class="px-6 py-3 text-right">{ "Points" }</th>
                                        <th class="px-6 py-3 text-right">{ "Streak" }</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                    { for leaderboard.data.iter().map(|entry| {
                                        let mine = me.as_deref() == Some(entry.username.as_str());
                                        html! {
                                            <tr
                                                key={entry.rank}
                                                class={classes!(mine.then_some("bg-green-50 dark:bg-green-900/30"))}
                                            >
                                                <td class="px-6 py-4">{ rank_badge(entry.rank) }</td>
                                                <td class={classes!("px-6", "py-4", "font-medium", TEXT_PRIMARY)}>
                                                    { &entry.username }
                                                    if mine {
                                                        <span class="ml-2 text-xs text-green-600 dark:text-green-400">{ "(you)" }</span>
                                                    }
                                                </td>
                                                <td class={classes!("px-6", "py-4", "text-right", TEXT_PRIMARY)}>{ entry.points.to_string() }</td>
                                                <td class={classes!("px-6", "py-4", "text-right", TEXT_SECONDARY)}>
                                                    { format!("🔥 {}", entry.streak_days) }
                                                </td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                }
            }
        </div>
    }
}
