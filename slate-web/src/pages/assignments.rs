use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorAlert, Loading};
use crate::models::app_state::AppState;
use crate::session;
use shared::models::{
    Assignment, AssignmentUpdateRequest, GradeSubmissionRequest, Submission,
    SubmissionCreateRequest, UserRole,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::{use_selector, use_store};

type Fetch<T> = Option<Result<T, ApiError>>;

/// Assignment list: students submit work, teachers manage and grade.
#[function_component(AssignmentsPage)]
pub fn assignments_page() -> Html {
    let assignments: UseStateHandle<Fetch<Vec<Assignment>>> = use_state(|| None);
    let (_state, dispatch) = use_store::<AppState>();
    let role = use_selector(|state: &AppState| state.user.as_ref().map(|user| user.role));

    {
        let assignments = assignments.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = ApiClient::shared().get_assignments().await;
                if let Err(ref err) = result {
                    session::note_failure(&dispatch, err);
                }
                assignments.set(Some(result));
            });
            || ()
        });
    }

    let on_deleted = {
        let assignments = assignments.clone();
        Callback::from(move |assignment_id: uuid::Uuid| {
            if let Some(Ok(list)) = &*assignments {
                let remaining = list
                    .iter()
                    .filter(|assignment| assignment.id != assignment_id)
                    .cloned()
                    .collect();
                assignments.set(Some(Ok(remaining)));
            }
        })
    };

    let body = match &*assignments {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) if list.is_empty() => {
            html! { <p class="opacity-70">{ "No assignments yet." }</p> }
        }
        Some(Ok(list)) => html! {
            <div class="space-y-4">
                { for list.iter().map(|assignment| {
                    let panel = match *role {
                        Some(UserRole::Teacher) => html! {
                            <TeacherPanel assignment={assignment.clone()} on_deleted={on_deleted.clone()} />
                        },
                        Some(UserRole::Student) => html! {
                            <StudentPanel assignment={assignment.clone()} />
                        },
                        _ => html! {},
                    };
                    html! {
                        <div key={assignment.id.to_string()} class="card bg-base-200 shadow">
                            <div class="card-body space-y-2">
                                <div class="flex justify-between items-baseline">
                                    <h2 class="card-title">{ &assignment.title }</h2>
                                    <span class="opacity-70">{ format!("{} pts", assignment.points_possible) }</span>
                                </div>
                                <p class="opacity-80">{ &assignment.description }</p>
                                {
                                    assignment.due_at.map_or_else(
                                        || html! {},
                                        |due| html! { <p class="text-sm opacity-70">{ "Due " }{ due.to_html() }</p> },
                                    )
                                }
                                { panel }
                            </div>
                        </div>
                    }
                }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Assignments" }</h1>
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StudentPanelProps {
    assignment: Assignment,
}

/// Student view of one assignment: probes for an existing submission, then
/// offers the submit form or shows the graded result.
#[function_component(StudentPanel)]
fn student_panel(props: &StudentPanelProps) -> Html {
    let submission: UseStateHandle<Fetch<Option<Submission>>> = use_state(|| None);
    let content = use_state(String::new);
    let error = use_state(|| None::<String>);
    let assignment_id = props.assignment.id;

    {
        let submission = submission.clone();
        use_effect_with(assignment_id, move |&assignment_id| {
            spawn_local(async move {
                let result = ApiClient::shared().get_submission(assignment_id).await;
                submission.set(Some(result));
            });
            || ()
        });
    }

    let on_submit = {
        let content = content.clone();
        let submission = submission.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = SubmissionCreateRequest {
                content: (*content).clone(),
            };
            let submission = submission.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared()
                    .submit_assignment(assignment_id, &request)
                    .await
                {
                    Ok(submitted) => {
                        submission.set(Some(Ok(Some(submitted))));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_content_change = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    match &*submission {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(Some(submitted))) => html! {
            <div class="space-y-1">
                <p class="text-sm">{ "Submitted " }{ submitted.submitted_at.to_html() }</p>
                {
                    if submitted.is_graded() {
                        html! {
                            <>
                                <p class="font-semibold">
                                    { format!("Grade: {} / {}", submitted.grade.unwrap_or_default(), props.assignment.points_possible) }
                                </p>
                                {
                                    submitted.feedback.as_ref().map_or_else(
                                        || html! {},
                                        |feedback| html! { <p class="italic opacity-80">{ feedback.clone() }</p> },
                                    )
                                }
                            </>
                        }
                    } else {
                        html! { <p class="opacity-70">{ "Awaiting grade." }</p> }
                    }
                }
            </div>
        },
        Some(Ok(None)) => html! {
            <form class="space-y-2" onsubmit={on_submit}>
                <textarea
                    class="textarea textarea-bordered w-full"
                    placeholder="Your work"
                    value={(*content).clone()}
                    oninput={on_content_change}
                />
                <button class="btn btn-primary btn-sm" type="submit" disabled={(*content).is_empty()}>
                    { "Submit" }
                </button>
                if let Some(message) = &*error {
                    <ErrorAlert message={message.clone()} />
                }
            </form>
        },
    }
}

#[derive(Properties, PartialEq)]
struct TeacherPanelProps {
    assignment: Assignment,
    on_deleted: Callback<uuid::Uuid>,
}

/// Teacher view of one assignment: rename, delete, and grade submissions.
#[function_component(TeacherPanel)]
fn teacher_panel(props: &TeacherPanelProps) -> Html {
    let show_submissions = use_state(|| false);
    let new_title = use_state(String::new);
    let error = use_state(|| None::<String>);
    let assignment_id = props.assignment.id;

    let on_delete = {
        let on_deleted = props.on_deleted.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let on_deleted = on_deleted.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_assignment(assignment_id).await {
                    Ok(()) => on_deleted.emit(assignment_id),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_rename = {
        let new_title = new_title.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = AssignmentUpdateRequest {
                title: Some((*new_title).clone()),
                ..Default::default()
            };
            let new_title = new_title.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared()
                    .update_assignment(assignment_id, &request)
                    .await
                {
                    Ok(_) => {
                        new_title.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_title_change = {
        let new_title = new_title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                new_title.set(input.value());
            }
        })
    };

    let toggle_submissions = {
        let show_submissions = show_submissions.clone();
        Callback::from(move |_: MouseEvent| {
            show_submissions.set(!*show_submissions);
        })
    };

    html! {
        <div class="space-y-2">
            <div class="flex flex-wrap items-center gap-2">
                <button class="btn btn-sm" onclick={toggle_submissions}>
                    { if *show_submissions { "Hide submissions" } else { "View submissions" } }
                </button>
                <form class="flex items-center gap-2" onsubmit={on_rename}>
                    <input
                        class="input input-bordered input-sm"
                        placeholder="Rename"
                        value={(*new_title).clone()}
                        oninput={on_title_change}
                    />
                    <button class="btn btn-sm" type="submit" disabled={(*new_title).is_empty()}>
                        { "Save" }
                    </button>
                </form>
                <button class="btn btn-error btn-sm" onclick={on_delete}>
                    { "Delete" }
                </button>
            </div>
            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }
            if *show_submissions {
                <SubmissionList {assignment_id} points_possible={props.assignment.points_possible} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SubmissionListProps {
    assignment_id: uuid::Uuid,
    points_possible: f64,
}

#[function_component(SubmissionList)]
fn submission_list(props: &SubmissionListProps) -> Html {
    let submissions: UseStateHandle<Fetch<Vec<Submission>>> = use_state(|| None);
    let assignment_id = props.assignment_id;

    {
        let submissions = submissions.clone();
        use_effect_with(assignment_id, move |&assignment_id| {
            spawn_local(async move {
                let result = ApiClient::shared()
                    .get_assignment_submissions(assignment_id)
                    .await;
                submissions.set(Some(result));
            });
            || ()
        });
    }

    let on_graded = {
        let submissions = submissions.clone();
        Callback::from(move |graded: Submission| {
            if let Some(Ok(list)) = &*submissions {
                let updated = list
                    .iter()
                    .map(|submission| {
                        if submission.id == graded.id {
                            graded.clone()
                        } else {
                            submission.clone()
                        }
                    })
                    .collect();
                submissions.set(Some(Ok(updated)));
            }
        })
    };

    match &*submissions {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(list)) if list.is_empty() => {
            html! { <p class="opacity-70">{ "No submissions yet." }</p> }
        }
        Some(Ok(list)) => html! {
            <div class="space-y-2">
                { for list.iter().map(|submission| html! {
                    <SubmissionRow
                        key={submission.id.to_string()}
                        submission={submission.clone()}
                        points_possible={props.points_possible}
                        on_graded={on_graded.clone()}
                    />
                }) }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct SubmissionRowProps {
    submission: Submission,
    points_possible: f64,
    on_graded: Callback<Submission>,
}

#[function_component(SubmissionRow)]
fn submission_row(props: &SubmissionRowProps) -> Html {
    let grade = use_state(String::new);
    let feedback = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submission_id = props.submission.id;

    let on_grade = {
        let grade = grade.clone();
        let feedback = feedback.clone();
        let error = error.clone();
        let on_graded = props.on_graded.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(points) = grade.parse::<f64>() else {
                error.set(Some("Grade must be a number.".to_string()));
                return;
            };
            let feedback_value = (*feedback).clone();
            let request = GradeSubmissionRequest {
                grade: points,
                feedback: (!feedback_value.is_empty()).then_some(feedback_value),
            };
            let error = error.clone();
            let on_graded = on_graded.clone();
            spawn_local(async move {
                match ApiClient::shared()
                    .grade_submission(submission_id, &request)
                    .await
                {
                    Ok(graded) => {
                        on_graded.emit(graded);
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
        <div class="border border-base-300 rounded-box p-3 space-y-2">
            <p class="text-sm opacity-70">{ "Submitted " }{ props.submission.submitted_at.to_html() }</p>
            <p>{ &props.submission.content }</p>
            {
                if props.submission.is_graded() {
                    html! {
                        <p class="font-semibold">
                            { format!("Grade: {} / {}", props.submission.grade.unwrap_or_default(), props.points_possible) }
                        </p>
                    }
                } else {
                    html! {
                        <form class="flex flex-wrap items-center gap-2" onsubmit={on_grade}>
                            <input
                                class="input input-bordered input-sm w-20"
                                placeholder="Points"
                                value={(*grade).clone()}
                                oninput={bind_input(&grade)}
                            />
                            <input
                                class="input input-bordered input-sm grow"
                                placeholder="Feedback"
                                value={(*feedback).clone()}
                                oninput={bind_input(&feedback)}
                            />
                            <button class="btn btn-primary btn-sm" type="submit" disabled={(*grade).is_empty()}>
                                { "Grade" }
                            </button>
                        </form>
                    }
                }
            }
            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }
        </div>
    }
}
