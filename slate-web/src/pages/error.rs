use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Not-found page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-4xl font-bold">{ "404" }</h1>
            <p class="opacity-70">{ "That page does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary">
                { "Back to dashboard" }
            </Link<MainRoute>>
        </div>
    }
}
