use std::future::Future;
use std::rc::Rc;

use dojo::api::ApiResult;
use dojo::load::{LoadGeneration, Loaded, Ticket};
use dojo::log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

struct LoadState<T>(Loaded<T>);

enum LoadAction<T> {
    Begin,
    Settle {
        generation: LoadGeneration,
        ticket: Ticket,
        what: &'static str,
        result: ApiResult<T>,
    },
}

impl<T: Clone> Reducible for LoadState<T> {
    type Action = LoadAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LoadAction::Begin => Rc::new(LoadState(self.0.begin())),
            LoadAction::Settle {
                generation,
                ticket,
                what,
                result,
            } => match generation.settle(what, ticket, &self.0, result) {
                Some(next) => Rc::new(LoadState(next)),
                None => {
                    debug!(what, "Discarding stale response");
                    self
                }
            },
        }
    }
}

/// Loads `T` whenever the screen mounts or `deps` change.
///
/// `data` starts at `T::default()`. See [`LoadGeneration::settle`] for how a
/// response lands.
#[hook]
pub fn use_load<T, D, F, Fut>(what: &'static str, deps: D, load: F) -> Loaded<T>
where
    T: Clone + Default + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let state = use_reducer(|| {
        LoadState(Loaded {
            data: T::default(),
            loading: true,
        })
    });
    let generation = use_memo((), |_| LoadGeneration::new());

    {
        let dispatcher = state.dispatcher();
        let generation = (*generation).clone();

        use_effect_with(deps, move |deps: &D| {
            let ticket = generation.begin();
            dispatcher.dispatch(LoadAction::Begin);

            let request = load(deps.clone());
            let settle_with = generation.clone();
            spawn_local(async move {
                let result = request.await;
                dispatcher.dispatch(LoadAction::Settle {
                    generation: settle_with,
                    ticket,
                    what,
                    result,
                });
            });

            move || generation.invalidate()
        });
    }

    state.0.clone()
}
