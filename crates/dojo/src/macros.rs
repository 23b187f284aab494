#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// This macro simplifies the creation of async callbacks by automatically
/// handling the cloning of variables and the spawning of async tasks.
///
/// ## With the macro
/// The body runs inside the spawned task, so the event itself is not
/// available; handlers that must act on the event synchronously, such as
/// calling `prevent_default` on a form submit, use a plain `Callback`.
///
/// ```compile_fail
/// let refresh = async_callback!([api, leaderboard, loading] {
///     loading.set(true);
///     match api.fetch_leaderboard().await {
///         Ok(entries) => leaderboard.set(entries),
///         Err(err) => error!(%err, "Failed to load leaderboard"),
///     }
///     loading.set(false);
/// });
/// ```
///
/// ## Without the macro
/// ```compile_fail
/// // Manual approach - verbose and error-prone
/// let api_clone = api.clone();
/// let leaderboard_clone = leaderboard.clone();
/// let loading_clone = loading.clone();
/// let refresh = Callback::from(move |_| {
///     let api = api_clone.clone();
///     let leaderboard = leaderboard_clone.clone();
///     let loading = loading_clone.clone();
///     wasm_bindgen_futures::spawn_local(async move {
///         loading.set(true);
///         match api.fetch_leaderboard().await {
///             Ok(entries) => leaderboard.set(entries),
///             Err(err) => error!(%err, "Failed to load leaderboard"),
///         }
///         loading.set(false);
///     });
/// });
/// ```
macro_rules! async_callback {
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
