use crate::api::{ApiClient, ApiError};
use crate::components::Loading;
use crate::config::FrontendConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Admin page probing the API health endpoint.
#[function_component(StatusPage)]
pub fn status_page() -> Html {
    let health = use_state(|| None::<Result<(), ApiError>>);
    let config = FrontendConfig::new();
    let api_base_url = config.api_base_url().to_string();

    {
        let health = health.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                health.set(Some(ApiClient::shared().health().await));
            });
            || ()
        });
    }

    let badge = match &*health {
        None => html! { <Loading /> },
        Some(Ok(())) => html! {
            <div class="alert alert-success">
                <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-6 h-6" />
                <span>{ "API is reachable." }</span>
            </div>
        },
        Some(Err(err)) => html! {
            <div class="alert alert-error">
                <span>{ format!("API unreachable: {err}") }</span>
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Status" }</h1>
            <p class="opacity-70">{ format!("API endpoint: {api_base_url}") }</p>
            { badge }
        </div>
    }
}
