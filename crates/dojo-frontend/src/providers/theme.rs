use dojo::theme::{Theme, ThemeStore};
use yew::prelude::*;

use crate::storage::BrowserStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Adds or removes the `dark` class on `<html>`, which the Tailwind `dark:` variants key off.
fn apply_document_class(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let class_list = html.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(err) = result {
        dojo::log::warn!(?err, "Failed to update document theme class");
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_memo((), |_| ThemeStore::new(BrowserStore));
    let theme = use_state(|| store.load());

    let toggle = {
        let theme = theme.clone();
        let store = store.clone();
        Callback::from(move |_| {
            theme.set(store.toggle(*theme));
        })
    };

    use_effect_with(*theme, |theme| apply_document_class(*theme));

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
