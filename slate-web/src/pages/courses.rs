use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorAlert, Loading};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use shared::models::{Course, CourseCreateRequest, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_selector, use_store};

/// Course catalog: every signed-in role browses here; teachers also create.
#[function_component(CoursesPage)]
pub fn courses_page() -> Html {
    let courses = use_state(|| None::<Result<Vec<Course>, ApiError>>);
    let title = use_state(String::new);
    let description = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let (_state, dispatch) = use_store::<AppState>();
    let role = use_selector(|state: &AppState| state.user.as_ref().map(|user| user.role));
    let is_teacher = matches!(*role, Some(UserRole::Teacher));

    {
        let courses = courses.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = ApiClient::shared().get_courses().await;
                if let Err(ref err) = result {
                    session::note_failure(&dispatch, err);
                }
                courses.set(Some(result));
            });
            || ()
        });
    }

    let on_create = {
        let title = title.clone();
        let description = description.clone();
        let courses = courses.clone();
        let form_error = form_error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CourseCreateRequest {
                title: (*title).clone(),
                description: (*description).clone(),
            };
            let title = title.clone();
            let description = description.clone();
            let courses = courses.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match ApiClient::shared().create_course(&request).await {
                    Ok(course) => {
                        let mut list = match &*courses {
                            Some(Ok(list)) => list.clone(),
                            _ => Vec::new(),
                        };
                        list.insert(0, course);
                        courses.set(Some(Ok(list)));
                        title.set(String::new());
                        description.set(String::new());
                        form_error.set(None);
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                description.set(input.value());
            }
        })
    };

    let course_list = match &*courses {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) if list.is_empty() => {
            html! { <p class="opacity-70">{ "No courses yet." }</p> }
        }
        Some(Ok(list)) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for list.iter().map(|course| {
                    let route = MainRoute::CourseDetail {
                        course_id: course.id.to_string(),
                    };
                    html! {
                        <div key={course.id.to_string()} class="card bg-base-200 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{ &course.title }</h2>
                                <p class="line-clamp-3 opacity-80">{ &course.description }</p>
                                <div class="card-actions justify-end">
                                    <Link<MainRoute> to={route} classes="btn btn-primary btn-sm">
                                        { "Open" }
                                    </Link<MainRoute>>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Courses" }</h1>

            if is_teacher {
                <form class="flex flex-wrap items-end gap-2" onsubmit={on_create}>
                    <div class="form-control">
                        <label class="label" for="course-title">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            id="course-title"
                            class="input input-bordered"
                            value={(*title).clone()}
                            oninput={on_title_change}
                        />
                    </div>
                    <div class="form-control grow">
                        <label class="label" for="course-description">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <input
                            id="course-description"
                            class="input input-bordered w-full"
                            value={(*description).clone()}
                            oninput={on_description_change}
                        />
                    </div>
                    <button class="btn btn-primary" type="submit" disabled={(*title).is_empty()}>
                        { "Create course" }
                    </button>
                </form>
                if let Some(message) = &*form_error {
                    <ErrorAlert message={message.clone()} />
                }
            }

            { course_list }
        </div>
    }
}
