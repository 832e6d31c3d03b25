use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Application root: hydrates the session once, then hands control to the
/// router. The route guard runs inside the switch on every navigation.
#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            session::hydrate(&dispatch);
            || ()
        });
    }

    let logout_callback = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            session::logout(&dispatch);
        })
    };

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
        </BrowserRouter>
    }
}
