//! Small SVG and CSS charts for the dashboard.

use yew::prelude::*;

use crate::components::style::TEXT_SECONDARY;

const RING_RADIUS: f64 = 52.0;

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    /// Completed share, clamped to `0.0..=1.0`.
    pub ratio: f64,
    pub label: AttrValue,
    pub caption: AttrValue,
}

#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let ratio = props.ratio.clamp(0.0, 1.0);
    let offset = circumference * (1.0 - ratio);

    html! {
        <div class="flex flex-col items-center">
            <div class="relative h-40 w-40">
                <svg class="h-40 w-40 -rotate-90" viewBox="0 0 120 120">
                    <circle
                        class="text-gray-200 dark:text-gray-700"
                        cx="60" cy="60" r={RING_RADIUS.to_string()}
                        fill="none" stroke="currentColor" stroke-width="12"
                    />
                    <circle
                        class="text-green-500 transition-all duration-700"
                        cx="60" cy="60" r={RING_RADIUS.to_string()}
                        fill="none" stroke="currentColor" stroke-width="12" stroke-linecap="round"
                        stroke-dasharray={format!("{circumference:.2}")}
                        stroke-dashoffset={format!("{offset:.2}")}
                    />
                </svg>
                <span class="absolute inset-0 flex items-center justify-center text-2xl font-bold text-gray-900 dark:text-gray-100">
                    { &props.label }
                </span>
            </div>
            <p class={classes!("mt-2", "text-sm", TEXT_SECONDARY)}>{ &props.caption }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarProps {
    pub label: AttrValue,
    /// Percentage in `0.0..=100.0`.
    pub percent: f64,
    #[prop_or(AttrValue::Static("bg-green-500"))]
    pub color: AttrValue,
}

#[function_component(Bar)]
pub fn bar(props: &BarProps) -> Html {
    let percent = props.percent.clamp(0.0, 100.0);

    html! {
        <div>
            <div class="flex justify-between mb-1 text-sm">
                <span class="text-gray-700 dark:text-gray-300">{ &props.label }</span>
                <span class={TEXT_SECONDARY}>{ format!("{percent:.0}%") }</span>
            </div>
            <div class="w-full h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div
                    class={classes!("h-3", "rounded-full", "transition-all", "duration-700", props.color.to_string())}
                    style={format!("width: {percent}%")}
                />
            </div>
        </div>
    }
}
