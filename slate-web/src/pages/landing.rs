use crate::routes::MainRoute;
use crate::session;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Public landing page.
///
/// The route guard sends signed-in visitors straight to the dashboard, so
/// the session check here only covers the moment before that redirect.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let signed_in = session::is_authenticated();

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{"Slate"}</h1>
                    <p class="opacity-80">
                        {"Courses, assignments, and grades in one place, for students, teachers, and administrators."}
                    </p>
                    if signed_in {
                        <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary">
                            {"Go to dashboard"}
                        </Link<MainRoute>>
                    } else {
                        <div class="flex justify-center gap-2">
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary">
                                {"Sign in"}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Register} classes="btn btn-outline">
                                {"Create an account"}
                            </Link<MainRoute>>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
