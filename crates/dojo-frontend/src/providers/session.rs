use std::rc::Rc;

use dojo::data::{Credential, Identity};
use dojo::session::{SessionState, SessionStore};
use yew::prelude::*;

use crate::providers::api::use_api;
use crate::storage::BrowserStore;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<(Identity, Credential)>,
    pub logout: Callback<()>,
}

impl SessionContext {
    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the session. Must sit inside an [`ApiProvider`](crate::providers::ApiProvider)
/// so the credential lands on the shared client's headers.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let api = use_api();
    let store = use_memo((), move |_| {
        SessionStore::new(BrowserStore, api.headers().clone())
    });
    let state = use_state(SessionState::default);

    {
        let store = Rc::clone(&store);
        let state = state.clone();
        use_effect_with((), move |_| {
            state.set(store.restore());
        });
    }

    let login = {
        let store = Rc::clone(&store);
        let state = state.clone();
        Callback::from(move |(identity, credential): (Identity, Credential)| {
            state.set(store.login(identity, credential));
        })
    };

    let logout = {
        let store = Rc::clone(&store);
        let state = state.clone();
        Callback::from(move |_| {
            state.set(store.logout());
        })
    };

    let context = SessionContext {
        state: (*state).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
