use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use shared::models::{RegisterRequest, UserRole};
use std::str::FromStr;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| UserRole::Student);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let dispatch = dispatch;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                role: *role,
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match session::register(&dispatch, &request).await {
                    Ok(_user) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let text_input = |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      handle: &UseStateHandle<String>| {
        let handle_ref = handle.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle_ref.set(input.value());
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    {id}
                    class="input input-bordered"
                    type={kind}
                    required=true
                    value={(**handle).clone()}
                    {oninput}
                />
            </div>
        }
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(selected) = UserRole::from_str(&select.value()) {
                    role.set(selected);
                }
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*first_name).is_empty()
        || (*last_name).is_empty()
        || (*email).is_empty()
        || (*password).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    { text_input("first-name", "First name", "text", &first_name) }
                    { text_input("last-name", "Last name", "text", &last_name) }
                    { text_input("email", "Email", "email", &email) }
                    { text_input("password", "Password", "password", &password) }
                    <div class="form-control">
                        <label class="label" for="role">
                            <span class="label-text">{"I am a"}</span>
                        </label>
                        <select id="role" class="select select-bordered" onchange={on_role_change}>
                            <option value="student" selected={*role == UserRole::Student}>{"Student"}</option>
                            <option value="teacher" selected={*role == UserRole::Teacher}>{"Teacher"}</option>
                        </select>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
