use yew::prelude::*;

use crate::components::style::{CARD_CLASSES, TEXT_PRIMARY, TEXT_SECONDARY};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    /// Tailwind text color for the value.
    #[prop_or(AttrValue::Static("text-green-600 dark:text-green-400"))]
    pub accent: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={CARD_CLASSES}>
            <p class={classes!("text-sm", "font-medium", TEXT_SECONDARY)}>{ &props.label }</p>
            <p class={classes!("mt-2", "text-3xl", "font-bold", props.accent.to_string())}>{ &props.value }</p>
            if let Some(hint) = &props.hint {
                <p class={classes!("mt-1", "text-xs", TEXT_PRIMARY, "opacity-70")}>{ hint }</p>
            }
        </div>
    }
}
