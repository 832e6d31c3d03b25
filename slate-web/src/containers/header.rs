use crate::{
    components::header_nav_item::HeaderNavItem,
    models::app_state::AppState,
    routes::{AdminRoute, AppRoute, MainRoute, main_nav_routes},
};
use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let user_opt = (*user).clone();
    let is_admin = user_opt
        .as_ref()
        .map(|user| matches!(user.role, UserRole::Admin))
        .unwrap_or(false);

    // Explicit header_routes (the admin subtree) take precedence over the
    // default role-aware main navigation.
    let nav_routes = props.header_routes.clone().unwrap_or_else(|| {
        let mut routes = main_nav_routes();
        if is_admin {
            routes.push(AppRoute::Admin(AdminRoute::Users));
        }
        routes
    });

    let render_routes = |routes: &[AppRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| match route {
                AppRoute::Admin(admin_route) => html! {
                    <HeaderNavItem<AdminRoute>
                        current_route={props.current_route.clone()}
                        route={admin_route.clone()}
                    />
                },
                AppRoute::Main(main_route) => html! {
                    <HeaderNavItem<MainRoute>
                        current_route={props.current_route.clone()}
                        route={main_route.clone()}
                    />
                },
            }) }
        }
    };

    let logout_button = props.on_logout.as_ref().map(|on_logout| {
        let on_logout = on_logout.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_logout.emit(()));
        html! {
            <button class="btn btn-ghost" {onclick}>{"Sign out"}</button>
        }
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="text-lg">
                    {"Slate"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal gap-1">
                { render_routes(&nav_routes) }
            </ul>
            <div class="flex items-center gap-2">
                {
                    user_opt.as_ref().map_or_else(|| html! {}, |user| html! {
                        <span class="text-sm opacity-70">{ user.full_name() }</span>
                    })
                }
                { logout_button.unwrap_or_default() }
            </div>
        </nav>
    }
}
