use std::rc::Rc;

use dojo::api::ApiHeaders;
use dojo::client::Api;
use yew::prelude::*;

/// Shared handle to the backend client.
///
/// One client and one header set live for the whole page, so the credential the
/// session provider arms is seen by every screen's requests.
#[derive(Clone)]
pub struct ApiContext(pub Rc<Api>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let api = use_memo((), |_| create(ApiHeaders::new()));

    let context = ApiContext(Rc::clone(&api));

    html! {
        <ContextProvider<ApiContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}

/// Create the API client for the configured backend URL.
pub fn create(headers: ApiHeaders) -> Api {
    let api = Api::http(headers);
    dojo::log::info!(url = dojo::client::DEFAULT_API_URL, "API client ready");
    api
}

#[hook]
pub fn use_api() -> Rc<Api> {
    use_context::<ApiContext>()
        .expect("use_api must be used within an ApiProvider")
        .0
}
