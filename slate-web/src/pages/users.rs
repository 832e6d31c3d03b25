use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorAlert, Loading};
use crate::models::app_state::AppState;
use crate::session;
use shared::models::{UpdateRoleRequest, User, UserRole};
use std::str::FromStr;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

type Fetch<T> = Option<Result<T, ApiError>>;

/// Admin page: list accounts and reassign roles.
///
/// The role select is a UI affordance only; the server re-checks that the
/// caller is an admin on every change.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users: UseStateHandle<Fetch<Vec<User>>> = use_state(|| None);
    let error = use_state(|| None::<String>);
    let (_state, dispatch) = use_store::<AppState>();

    {
        let users = users.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = ApiClient::shared().get_users().await;
                if let Err(ref err) = result {
                    session::note_failure(&dispatch, err);
                }
                users.set(Some(result));
            });
            || ()
        });
    }

    let on_role_change = {
        let users = users.clone();
        let error = error.clone();
        Callback::from(move |(user_id, role): (uuid::Uuid, UserRole)| {
            let users = users.clone();
            let error = error.clone();
            let request = UpdateRoleRequest { role };
            spawn_local(async move {
                match ApiClient::shared().update_user_role(user_id, &request).await {
                    Ok(updated) => {
                        if let Some(Ok(list)) = &*users {
                            let refreshed = list
                                .iter()
                                .map(|user| {
                                    if user.id == updated.id {
                                        updated.clone()
                                    } else {
                                        user.clone()
                                    }
                                })
                                .collect();
                            users.set(Some(Ok(refreshed)));
                        }
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let body = match &*users {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) => html! {
            <table class="table w-full">
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Joined" }</th>
                        <th>{ "Role" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|user| html! {
                        <UserRow
                            key={user.id.to_string()}
                            user={user.clone()}
                            on_role_change={on_role_change.clone()}
                        />
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Users" }</h1>
            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserRowProps {
    user: User,
    on_role_change: Callback<(uuid::Uuid, UserRole)>,
}

#[function_component(UserRow)]
fn user_row(props: &UserRowProps) -> Html {
    let user = &props.user;
    let onchange = {
        let on_role_change = props.on_role_change.clone();
        let user_id = user.id;
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(role) = UserRole::from_str(&select.value()) {
                    on_role_change.emit((user_id, role));
                }
            }
        })
    };

    html! {
        <tr>
            <td>{ user.full_name() }</td>
            <td>{ &user.email }</td>
            <td>{ user.created_at }</td>
            <td>
                <select class="select select-bordered select-sm" {onchange}>
                    { for [UserRole::Student, UserRole::Teacher, UserRole::Admin].iter().map(|role| html! {
                        <option value={role.as_str()} selected={user.role == *role}>
                            { role.as_str() }
                        </option>
                    }) }
                </select>
            </td>
        </tr>
    }
}
