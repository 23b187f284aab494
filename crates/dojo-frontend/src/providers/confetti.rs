use yew::prelude::*;

use crate::components::{Confetti, FireConfetti};

/// Lets any screen celebrate, e.g. a passing submission.
#[derive(Clone, PartialEq)]
pub struct ConfettiContext {
    pub celebrate: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProviderProps {
    pub children: Children,
}

#[function_component(ConfettiProvider)]
pub fn confetti_provider(props: &ConfettiProviderProps) -> Html {
    // The canvas registers its burst function once mounted; until then celebrating is a no-op.
    let fire = use_mut_ref(|| None::<FireConfetti>);

    let register = {
        let fire = fire.clone();
        Callback::from(move |burst: FireConfetti| {
            *fire.borrow_mut() = Some(burst);
        })
    };

    let celebrate = use_callback(fire, |_: (), fire| {
        if let Some(burst) = fire.borrow().as_ref() {
            burst.emit(());
        }
    });

    html! {
        <ContextProvider<ConfettiContext> context={ConfettiContext { celebrate }}>
            <Confetti register={register} />
            {props.children.clone()}
        </ContextProvider<ConfettiContext>>
    }
}

#[hook]
pub fn use_confetti() -> ConfettiContext {
    use_context::<ConfettiContext>().expect("use_confetti must be used within a ConfettiProvider")
}
