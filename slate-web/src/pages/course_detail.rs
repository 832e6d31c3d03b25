use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorAlert, Loading};
use crate::models::app_state::AppState;
use crate::session;
use futures_util::join;
use shared::models::{
    Assignment, AssignmentCreateRequest, Course, CourseModule, Lesson, UserRole,
};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{use_selector, use_store};

type Fetch<T> = Option<Result<T, ApiError>>;

#[derive(Properties, PartialEq)]
pub struct CourseDetailProps {
    pub course_id: String,
}

#[function_component(CourseDetailPage)]
pub fn course_detail_page(props: &CourseDetailProps) -> Html {
    let Ok(course_id) = Uuid::parse_str(&props.course_id) else {
        return html! { <ErrorAlert message={"Unknown course."} /> };
    };

    html! { <CourseDetailView {course_id} /> }
}

#[derive(Properties, PartialEq)]
struct CourseDetailViewProps {
    course_id: Uuid,
}

#[function_component(CourseDetailView)]
fn course_detail_view(props: &CourseDetailViewProps) -> Html {
    let course_id = props.course_id;
    let course: UseStateHandle<Fetch<Course>> = use_state(|| None);
    let modules: UseStateHandle<Fetch<Vec<CourseModule>>> = use_state(|| None);
    let assignments: UseStateHandle<Fetch<Vec<Assignment>>> = use_state(|| None);
    let enroll_message = use_state(|| None::<Result<String, String>>);
    let (_state, dispatch) = use_store::<AppState>();
    let role = use_selector(|state: &AppState| state.user.as_ref().map(|user| user.role));

    {
        let course = course.clone();
        let modules = modules.clone();
        let assignments = assignments.clone();
        let dispatch = dispatch.clone();
        use_effect_with(course_id, move |&course_id| {
            spawn_local(async move {
                let client = ApiClient::shared();
                let (course_result, modules_result, assignments_result) = join!(
                    client.get_course(course_id),
                    client.get_modules(course_id),
                    client.get_course_assignments(course_id),
                );
                for err in [
                    course_result.as_ref().err(),
                    modules_result.as_ref().err(),
                    assignments_result.as_ref().err(),
                ]
                .into_iter()
                .flatten()
                {
                    session::note_failure(&dispatch, err);
                }
                course.set(Some(course_result));
                modules.set(Some(modules_result));
                assignments.set(Some(assignments_result));
            });
            || ()
        });
    }

    let on_enroll = {
        let enroll_message = enroll_message.clone();
        Callback::from(move |_: MouseEvent| {
            let enroll_message = enroll_message.clone();
            spawn_local(async move {
                match ApiClient::shared().enroll(course_id).await {
                    Ok(_) => enroll_message.set(Some(Ok("Enrolled.".to_string()))),
                    Err(err) => enroll_message.set(Some(Err(err.to_string()))),
                }
            });
        })
    };

    let header = match &*course {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(course)) => html! {
            <div class="space-y-2">
                <h1 class="text-2xl font-bold">{ &course.title }</h1>
                <p class="opacity-80">{ &course.description }</p>
                if matches!(*role, Some(UserRole::Student)) {
                    <button class="btn btn-primary btn-sm" onclick={on_enroll}>
                        { "Enroll" }
                    </button>
                }
                {
                    match &*enroll_message {
                        Some(Ok(message)) => html! { <div class="alert alert-success"><span>{ message.clone() }</span></div> },
                        Some(Err(message)) => html! { <ErrorAlert message={message.clone()} /> },
                        None => html! {},
                    }
                }
            </div>
        },
    };

    let module_list = match &*modules {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) if list.is_empty() => {
            html! { <p class="opacity-70">{ "No content yet." }</p> }
        }
        Some(Ok(list)) => {
            let mut ordered = list.clone();
            ordered.sort_by_key(|module| module.position);
            html! {
                <div class="space-y-4">
                    { for ordered.iter().map(|module| html! {
                        <ModuleCard key={module.id.to_string()} module={module.clone()} />
                    }) }
                </div>
            }
        }
    };

    let assignment_list = match &*assignments {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) if list.is_empty() => {
            html! { <p class="opacity-70">{ "No assignments yet." }</p> }
        }
        Some(Ok(list)) => html! {
            <ul class="space-y-1">
                { for list.iter().map(|assignment| html! {
                    <li key={assignment.id.to_string()} class="flex justify-between">
                        <span>{ &assignment.title }</span>
                        <span class="opacity-70">{ format!("{} pts", assignment.points_possible) }</span>
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            { header }

            <h2 class="text-xl font-semibold">{ "Modules" }</h2>
            { module_list }

            <h2 class="text-xl font-semibold">{ "Assignments" }</h2>
            { assignment_list }

            if matches!(*role, Some(UserRole::Teacher)) {
                <NewAssignmentForm {course_id} on_created={
                    let assignments = assignments.clone();
                    Callback::from(move |assignment: Assignment| {
                        let mut list = match &*assignments {
                            Some(Ok(list)) => list.clone(),
                            _ => Vec::new(),
                        };
                        list.push(assignment);
                        assignments.set(Some(Ok(list)));
                    })
                } />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ModuleCardProps {
    module: CourseModule,
}

/// One course module with its lessons, fetched when the card mounts.
#[function_component(ModuleCard)]
fn module_card(props: &ModuleCardProps) -> Html {
    let lessons: UseStateHandle<Fetch<Vec<Lesson>>> = use_state(|| None);
    let module_id = props.module.id;

    {
        let lessons = lessons.clone();
        use_effect_with(module_id, move |&module_id| {
            spawn_local(async move {
                let result = ApiClient::shared().get_lessons(module_id).await;
                lessons.set(Some(result));
            });
            || ()
        });
    }

    let body = match &*lessons {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) if list.is_empty() => {
            html! { <p class="opacity-70">{ "No lessons yet." }</p> }
        }
        Some(Ok(list)) => {
            let mut ordered = list.clone();
            ordered.sort_by_key(|lesson| lesson.position);
            html! {
                <ul class="list-disc list-inside">
                    { for ordered.iter().map(|lesson| html! {
                        <li key={lesson.id.to_string()}>{ &lesson.title }</li>
                    }) }
                </ul>
            }
        }
    };

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{ &props.module.title }</h3>
                { body }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NewAssignmentFormProps {
    course_id: Uuid,
    on_created: Callback<Assignment>,
}

#[function_component(NewAssignmentForm)]
fn new_assignment_form(props: &NewAssignmentFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let points = use_state(|| "100".to_string());
    let error = use_state(|| None::<String>);
    let course_id = props.course_id;

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let points = points.clone();
        let error = error.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(points_possible) = points.parse::<f64>() else {
                error.set(Some("Points must be a number.".to_string()));
                return;
            };
            let request = AssignmentCreateRequest {
                course_id,
                title: (*title).clone(),
                description: (*description).clone(),
                points_possible,
                due_at: None,
            };
            let title = title.clone();
            let description = description.clone();
            let error = error.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match ApiClient::shared().create_assignment(&request).await {
                    Ok(assignment) => {
                        on_created.emit(assignment);
                        title.set(String::new());
                        description.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    html! {
        <form class="flex flex-wrap items-end gap-2" onsubmit={onsubmit}>
            <div class="form-control">
                <label class="label" for="assignment-title">
                    <span class="label-text">{"New assignment"}</span>
                </label>
                <input
                    id="assignment-title"
                    class="input input-bordered"
                    placeholder="Title"
                    value={(*title).clone()}
                    oninput={bind_input(&title)}
                />
            </div>
            <div class="form-control grow">
                <input
                    class="input input-bordered w-full"
                    placeholder="Instructions"
                    value={(*description).clone()}
                    oninput={bind_input(&description)}
                />
            </div>
            <div class="form-control w-24">
                <input
                    class="input input-bordered"
                    placeholder="Points"
                    value={(*points).clone()}
                    oninput={bind_input(&points)}
                />
            </div>
            <button class="btn btn-primary" type="submit" disabled={(*title).is_empty()}>
                { "Add" }
            </button>
            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }
        </form>
    }
}
