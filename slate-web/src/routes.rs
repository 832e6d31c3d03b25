use crate::{
    containers::layout::Layout,
    guard::{self, Decision},
    models::app_state::AppState,
    pages::*,
};
use shared::models::UserRole;
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/courses")]
    Courses,
    #[at("/dashboard/courses/:course_id")]
    CourseDetail { course_id: String },
    #[at("/dashboard/assignments")]
    Assignments,
    #[at("/dashboard/grades")]
    Grades,
    #[at("/dashboard/admin")]
    AdminRoot,
    #[at("/dashboard/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The admin routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/dashboard/admin")]
    Users,
    #[at("/dashboard/admin/status")]
    Status,
    #[not_found]
    #[at("/dashboard/admin/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Main(MainRoute),
    Admin(AdminRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Landing)
    }
}

impl From<AdminRoute> for AppRoute {
    fn from(route: AdminRoute) -> Self {
        AppRoute::Admin(route)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

impl AppRoute {
    /// Navigation label for header items.
    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Main(MainRoute::Dashboard) => "Overview",
            AppRoute::Main(MainRoute::Courses) => "Courses",
            AppRoute::Main(MainRoute::Assignments) => "Assignments",
            AppRoute::Main(MainRoute::Grades) => "Grades",
            AppRoute::Admin(AdminRoute::Users) => "Users",
            AppRoute::Admin(AdminRoute::Status) => "Status",
            _ => "",
        }
    }

    /// Navigation icon for header items.
    pub fn icon_id(&self) -> IconId {
        match self {
            AppRoute::Main(MainRoute::Courses) => IconId::HeroiconsOutlineBookOpen,
            AppRoute::Main(MainRoute::Assignments) => IconId::HeroiconsOutlineDocumentText,
            AppRoute::Main(MainRoute::Grades) => IconId::HeroiconsOutlineAcademicCap,
            AppRoute::Admin(AdminRoute::Users) => IconId::HeroiconsOutlineUsers,
            AppRoute::Admin(AdminRoute::Status) => IconId::HeroiconsOutlineCheck,
            _ => IconId::HeroiconsOutlineHome,
        }
    }
}

/// The main navigation items shown to every signed-in user.
pub fn main_nav_routes() -> Vec<AppRoute> {
    vec![
        AppRoute::Main(MainRoute::Dashboard),
        AppRoute::Main(MainRoute::Courses),
        AppRoute::Main(MainRoute::Assignments),
        AppRoute::Main(MainRoute::Grades),
    ]
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let user_opt = (*user).clone();
    let is_admin = user_opt
        .as_ref()
        .map(|user| matches!(user.role, UserRole::Admin))
        .unwrap_or(false);
    let on_logout = props.on_logout.clone();

    // Cookie-backed guard, re-evaluated on every navigation before any page
    // body renders.
    match guard::evaluate(&props.route.to_path()) {
        Decision::RedirectToLanding => {
            return html! { <Redirect<MainRoute> to={MainRoute::Landing} /> };
        }
        Decision::RedirectToDashboard => {
            return html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> };
        }
        Decision::Allow | Decision::Bypass => {}
    }

    match props.route.clone() {
        MainRoute::Landing => html! { <LandingPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Dashboard => {
            let logout_cb = on_logout.clone();
            html! {
                <Layout current_route={AppRoute::Main(MainRoute::Dashboard)} on_logout={Some(logout_cb)}>
                    <DashboardPage />
                </Layout>
            }
        }
        MainRoute::Courses => {
            let logout_cb = on_logout.clone();
            html! {
                <Layout current_route={AppRoute::Main(MainRoute::Courses)} on_logout={Some(logout_cb)}>
                    <CoursesPage />
                </Layout>
            }
        }
        MainRoute::CourseDetail { course_id } => {
            let route_clone = MainRoute::CourseDetail {
                course_id: course_id.clone(),
            };
            let logout_cb = on_logout.clone();
            html! {
                <Layout current_route={AppRoute::Main(route_clone)} on_logout={Some(logout_cb)}>
                    <CourseDetailPage {course_id} />
                </Layout>
            }
        }
        MainRoute::Assignments => {
            let logout_cb = on_logout.clone();
            html! {
                <Layout current_route={AppRoute::Main(MainRoute::Assignments)} on_logout={Some(logout_cb)}>
                    <AssignmentsPage />
                </Layout>
            }
        }
        MainRoute::Grades => {
            let logout_cb = on_logout.clone();
            html! {
                <Layout current_route={AppRoute::Main(MainRoute::Grades)} on_logout={Some(logout_cb)}>
                    <GradesPage />
                </Layout>
            }
        }
        MainRoute::AdminRoot | MainRoute::Admin => {
            if !is_admin {
                return html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> };
            }
            let logout_cb = on_logout.clone();
            html! {
                <Switch<AdminRoute> render={move |route| {
                    let logout_cb = logout_cb.clone();
                    switch_admin(route, logout_cb.clone())
                }} />
            }
        }
        MainRoute::NotFound => {
            let logout_cb = on_logout.clone();
            html! {
                <Layout current_route={AppRoute::Main(MainRoute::NotFound)} on_logout={Some(logout_cb)}>
                    <ErrorPage />
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to admin route: {:?}", route).as_str());
    let header_routes = AdminRoute::iter()
        .filter(|route| {
            // Filter out the error routes
            route != &AdminRoute::NotFound
        })
        .map(AppRoute::Admin)
        .collect::<Vec<_>>();
    match route {
        AdminRoute::Users => {
            let logout_cb = on_logout.clone();
            html! {<Layout {header_routes} current_route={AppRoute::Admin(route)} on_logout={Some(logout_cb)}>
            <UsersPage /></Layout>}
        }
        AdminRoute::Status => {
            let logout_cb = on_logout.clone();
            html! {<Layout {header_routes} current_route={AppRoute::Admin(route)} on_logout={Some(logout_cb)}>
            <StatusPage /></Layout>}
        }
        AdminRoute::NotFound => html! {<Redirect<MainRoute> to={MainRoute::NotFound}/>},
    }
}
