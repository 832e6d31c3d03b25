use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorAlert, Loading};
use crate::models::app_state::AppState;
use crate::session;
use futures_util::future::join_all;
use shared::models::GradeSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

type Fetch<T> = Option<Result<T, ApiError>>;

/// Grades page: one summary table per enrolled course.
#[function_component(GradesPage)]
pub fn grades_page() -> Html {
    let summaries: UseStateHandle<Fetch<Vec<Result<GradeSummary, ApiError>>>> =
        use_state(|| None);
    let (_state, dispatch) = use_store::<AppState>();

    {
        let summaries = summaries.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                let enrollments = match client.get_enrollments().await {
                    Ok(enrollments) => enrollments,
                    Err(err) => {
                        session::note_failure(&dispatch, &err);
                        summaries.set(Some(Err(err)));
                        return;
                    }
                };
                // One fetch per course, issued together. A failing course
                // shows its own error row without hiding the others.
                let results = join_all(
                    enrollments
                        .iter()
                        .map(|enrollment| client.get_course_grades(enrollment.course_id)),
                )
                .await;
                for err in results.iter().filter_map(|result| result.as_ref().err()) {
                    session::note_failure(&dispatch, err);
                }
                summaries.set(Some(Ok(results)));
            });
            || ()
        });
    }

    let body = match &*summaries {
        None => html! { <Loading /> },
        Some(Err(err)) => html! { <ErrorAlert message={err.to_string()} /> },
        Some(Ok(results)) if results.is_empty() => {
            html! { <p class="opacity-70">{ "No enrollments yet." }</p> }
        }
        Some(Ok(results)) => html! {
            <div class="space-y-6">
                { for results.iter().enumerate().map(|(index, result)| match result {
                    Err(err) => html! { <ErrorAlert key={index} message={err.to_string()} /> },
                    Ok(summary) => html! { <GradeTable key={summary.course_id.to_string()} summary={summary.clone()} /> },
                }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Grades" }</h1>
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GradeTableProps {
    summary: GradeSummary,
}

#[function_component(GradeTable)]
fn grade_table(props: &GradeTableProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="space-y-2">
            <div class="flex justify-between items-baseline">
                <h2 class="text-xl font-semibold">{ &summary.course_title }</h2>
                {
                    summary.average.map_or_else(
                        || html! { <span class="opacity-70">{ "No grades yet" }</span> },
                        |average| html! { <span class="font-semibold">{ format!("{average:.1}%") }</span> },
                    )
                }
            </div>
            <table class="table w-full">
                <thead>
                    <tr>
                        <th>{ "Assignment" }</th>
                        <th class="text-right">{ "Score" }</th>
                        <th class="text-right">{ "Percent" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for summary.grades.iter().map(|line| html! {
                        <tr key={line.assignment_id.to_string()}>
                            <td>{ &line.assignment_title }</td>
                            <td class="text-right">
                                {
                                    line.grade.map_or_else(
                                        || "—".to_string(),
                                        |grade| format!("{grade} / {}", line.points_possible),
                                    )
                                }
                            </td>
                            <td class="text-right">
                                {
                                    line.percentage().map_or_else(
                                        || "—".to_string(),
                                        |percent| format!("{percent:.1}%"),
                                    )
                                }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
