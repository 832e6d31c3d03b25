use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorAlert, Loading};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use futures_util::join;
use shared::models::{Assignment, Course, DashboardSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

type Fetch<T> = Option<Result<T, ApiError>>;

/// Render one dashboard section from its fetch state.
///
/// Each section fails independently: an error here never unmounts data the
/// other sections already show.
fn section<T>(state: &Fetch<T>, render: impl FnOnce(&T) -> Html) -> Html {
    match state {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(value)) => render(value),
    }
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let summary: UseStateHandle<Fetch<DashboardSummary>> = use_state(|| None);
    let courses: UseStateHandle<Fetch<Vec<Course>>> = use_state(|| None);
    let assignments: UseStateHandle<Fetch<Vec<Assignment>>> = use_state(|| None);
    let (_state, dispatch) = use_store::<AppState>();

    {
        let summary = summary.clone();
        let courses = courses.clone();
        let assignments = assignments.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                // All three fetches go out together; the page renders each
                // section as soon as the join resolves.
                let (summary_result, courses_result, assignments_result) = join!(
                    client.get_dashboard_summary(),
                    client.get_courses(),
                    client.get_assignments(),
                );
                for err in [
                    summary_result.as_ref().err(),
                    courses_result.as_ref().err(),
                    assignments_result.as_ref().err(),
                ]
                .into_iter()
                .flatten()
                {
                    session::note_failure(&dispatch, err);
                }
                summary.set(Some(summary_result));
                courses.set(Some(courses_result));
                assignments.set(Some(assignments_result));
            });
            || ()
        });
    }

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Overview" }</h1>

            {
                section(&summary, |summary| html! {
                    <div class="stats shadow w-full">
                        <div class="stat">
                            <div class="stat-figure text-primary">
                                <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="w-8 h-8" />
                            </div>
                            <div class="stat-title">{ "Courses" }</div>
                            <div class="stat-value text-primary">{ summary.course_count }</div>
                        </div>

                        <div class="stat">
                            <div class="stat-figure text-secondary">
                                <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-8 h-8" />
                            </div>
                            <div class="stat-title">{ "Assignments" }</div>
                            <div class="stat-value text-secondary">{ summary.assignment_count }</div>
                        </div>

                        <div class="stat">
                            <div class="stat-figure text-warning">
                                <Icon icon_id={IconId::HeroiconsOutlineDocument} class="w-8 h-8" />
                            </div>
                            <div class="stat-title">{ "Awaiting grade" }</div>
                            <div class="stat-value text-warning">{ summary.pending_submissions }</div>
                        </div>

                        <div class="stat">
                            <div class="stat-figure text-success">
                                <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8" />
                            </div>
                            <div class="stat-title">{ "Graded" }</div>
                            <div class="stat-value text-success">{ summary.graded_submissions }</div>
                        </div>
                    </div>
                })
            }

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="w-6 h-6" />
                            { "Your courses" }
                        </h2>
                        {
                            section(&courses, |courses| {
                                if courses.is_empty() {
                                    return html! { <p class="opacity-70">{ "No courses yet." }</p> };
                                }
                                html! {
                                    <ul class="menu">
                                        { for courses.iter().map(|course| {
                                            let route = MainRoute::CourseDetail {
                                                course_id: course.id.to_string(),
                                            };
                                            html! {
                                                <li key={course.id.to_string()}>
                                                    <Link<MainRoute> to={route}>{ &course.title }</Link<MainRoute>>
                                                </li>
                                            }
                                        }) }
                                    </ul>
                                }
                            })
                        }
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Courses} classes="btn btn-primary btn-sm">
                                { "All courses" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                            { "Recent assignments" }
                        </h2>
                        {
                            section(&assignments, |assignments| {
                                if assignments.is_empty() {
                                    return html! { <p class="opacity-70">{ "Nothing due." }</p> };
                                }
                                html! {
                                    <ul class="space-y-1">
                                        { for assignments.iter().take(5).map(|assignment| html! {
                                            <li key={assignment.id.to_string()} class="flex justify-between">
                                                <span>{ &assignment.title }</span>
                                                {
                                                    assignment.due_at.map_or_else(
                                                        || html! { <span class="opacity-50">{ "no due date" }</span> },
                                                        |due| html! { <span class="opacity-70">{ due }</span> },
                                                    )
                                                }
                                            </li>
                                        }) }
                                    </ul>
                                }
                            })
                        }
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Assignments} classes="btn btn-secondary btn-sm">
                                { "All assignments" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
