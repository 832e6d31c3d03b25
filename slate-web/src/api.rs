//! API gateway client: the single choke point for calls to the remote
//! backend.
//!
//! Every request goes through [`ApiClient::send`], which attaches the bearer
//! token when one is stored, enforces the request timeout, and normalizes
//! HTTP failures into [`ApiError`]. The per-resource methods below are pure
//! composition over that choke point: fixed URL template, HTTP method, typed
//! payload. No retries, no caching, no queuing.

use futures_util::future::{Either, select};
use futures_util::pin_mut;
use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    Assignment, AssignmentCreateRequest, AssignmentUpdateRequest, AuthResponse, Course,
    CourseCreateRequest, CourseModule, DashboardSummary, Enrollment, EnrollmentRequest,
    ErrorResponse, GradeSubmissionRequest, GradeSummary, Lesson, LoginRequest, RegisterRequest,
    Submission, SubmissionCreateRequest, UpdateRoleRequest, User,
};
use thiserror::Error;
use uuid::Uuid;

use crate::config::FrontendConfig;
use crate::token_store;

/// Fixed client-side timeout applied to every request.
pub const REQUEST_TIMEOUT_MS: u32 = 8_000;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// Errors surfaced by the API gateway client.
///
/// Every variant reaches the call site; nothing is retried or swallowed here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered 401. The token store has already been cleared as a
    /// side effect by the time the caller sees this.
    #[error("session expired, please sign in again")]
    AuthExpired,

    /// Any other non-success HTTP status.
    #[error("request failed ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the status text.
        message: String,
    },

    /// The request exceeded [`REQUEST_TIMEOUT_MS`].
    #[error("the server took too long to respond")]
    Timeout,

    /// Transport-level failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// HTTP client for the Slate REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-page shared client instance, configured from the environment.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Merge default headers into a request: JSON content type, plus the
    /// bearer token when one is stored.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Content-Type", "application/json");
        match token_store::token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Dispatch a request with the timeout applied and failures normalized.
    ///
    /// A 401 clears the token store before surfacing [`ApiError::AuthExpired`];
    /// a timeout leaves the store untouched.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let pending = request.send();
        pin_mut!(pending);
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(timeout);

        let response = match select(pending, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|err| ApiError::Network(err.to_string()))?
            }
            Either::Right(((), _)) => return Err(ApiError::Timeout),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(unauthorized());
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.to_string(),
            Err(_) => status_text(status),
        };
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    // --- auth ---

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let request = self.client.post(self.api_url("auth/login")).json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// Create an account and authenticate in one step.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let request = self
            .client
            .post(self.api_url("auth/register"))
            .json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// Probe the API health endpoint.
    pub async fn health(&self) -> Result<(), ApiError> {
        let request = self.authorize(self.client.get(self.api_url("health")));
        self.send(request).await.map(|_| ())
    }

    // --- courses ---

    /// List courses visible to the current user.
    pub async fn get_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.fetch_json(self.authorize(self.client.get(self.api_url("courses"))))
            .await
    }

    /// Fetch a single course.
    pub async fn get_course(&self, course_id: Uuid) -> Result<Course, ApiError> {
        let url = self.api_url(&format!("courses/{course_id}"));
        self.fetch_json(self.authorize(self.client.get(url))).await
    }

    /// Create a course.
    pub async fn create_course(&self, payload: &CourseCreateRequest) -> Result<Course, ApiError> {
        let request = self.client.post(self.api_url("courses")).json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// List the current user's enrollments.
    pub async fn get_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.fetch_json(self.authorize(self.client.get(self.api_url("enrollments"))))
            .await
    }

    /// Enroll the current user in a course.
    pub async fn enroll(&self, course_id: Uuid) -> Result<Enrollment, ApiError> {
        let payload = EnrollmentRequest { course_id };
        let request = self.client.post(self.api_url("enrollments")).json(&payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// List a course's content modules.
    pub async fn get_modules(&self, course_id: Uuid) -> Result<Vec<CourseModule>, ApiError> {
        let url = self.api_url(&format!("courses/{course_id}/modules"));
        self.fetch_json(self.authorize(self.client.get(url))).await
    }

    /// List a module's lessons.
    pub async fn get_lessons(&self, module_id: Uuid) -> Result<Vec<Lesson>, ApiError> {
        let url = self.api_url(&format!("modules/{module_id}/lessons"));
        self.fetch_json(self.authorize(self.client.get(url))).await
    }

    // --- assignments ---

    /// List assignments visible to the current user.
    pub async fn get_assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.fetch_json(self.authorize(self.client.get(self.api_url("assignments"))))
            .await
    }

    /// List assignments for one course.
    pub async fn get_course_assignments(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<Assignment>, ApiError> {
        let url = self.api_url(&format!("courses/{course_id}/assignments"));
        self.fetch_json(self.authorize(self.client.get(url))).await
    }

    /// Create an assignment.
    pub async fn create_assignment(
        &self,
        payload: &AssignmentCreateRequest,
    ) -> Result<Assignment, ApiError> {
        let request = self.client.post(self.api_url("assignments")).json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// Apply a partial update to an assignment.
    pub async fn update_assignment(
        &self,
        assignment_id: Uuid,
        payload: &AssignmentUpdateRequest,
    ) -> Result<Assignment, ApiError> {
        let url = self.api_url(&format!("assignments/{assignment_id}"));
        let request = self.client.put(url).json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// Delete an assignment.
    pub async fn delete_assignment(&self, assignment_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("assignments/{assignment_id}"));
        self.send(self.authorize(self.client.delete(url)))
            .await
            .map(|_| ())
    }

    // --- submissions ---

    /// Fetch the current user's submission for an assignment.
    ///
    /// Absence is not an error here: a 404 means the student has not
    /// submitted yet and maps to `Ok(None)`.
    pub async fn get_submission(
        &self,
        assignment_id: Uuid,
    ) -> Result<Option<Submission>, ApiError> {
        let url = self.api_url(&format!("assignments/{assignment_id}/submission"));
        match self.fetch_json(self.authorize(self.client.get(url))).await {
            Ok(submission) => Ok(Some(submission)),
            Err(ApiError::Api { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// List all submissions for an assignment. Teacher-only on the server.
    pub async fn get_assignment_submissions(
        &self,
        assignment_id: Uuid,
    ) -> Result<Vec<Submission>, ApiError> {
        let url = self.api_url(&format!("assignments/{assignment_id}/submissions"));
        self.fetch_json(self.authorize(self.client.get(url))).await
    }

    /// Submit work for an assignment.
    pub async fn submit_assignment(
        &self,
        assignment_id: Uuid,
        payload: &SubmissionCreateRequest,
    ) -> Result<Submission, ApiError> {
        let url = self.api_url(&format!("assignments/{assignment_id}/submissions"));
        let request = self.client.post(url).json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    /// Record a grade on a submission.
    pub async fn grade_submission(
        &self,
        submission_id: Uuid,
        payload: &GradeSubmissionRequest,
    ) -> Result<Submission, ApiError> {
        let url = self.api_url(&format!("submissions/{submission_id}/grade"));
        let request = self.client.put(url).json(payload);
        self.fetch_json(self.authorize(request)).await
    }

    // --- grades ---

    /// Fetch the grade summary for one course.
    pub async fn get_course_grades(&self, course_id: Uuid) -> Result<GradeSummary, ApiError> {
        let url = self.api_url(&format!("courses/{course_id}/grades"));
        self.fetch_json(self.authorize(self.client.get(url))).await
    }

    // --- dashboard ---

    /// Fetch aggregate counts for the dashboard.
    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.fetch_json(self.authorize(self.client.get(self.api_url("dashboard"))))
            .await
    }

    // --- users (admin) ---

    /// List all users. Admin-only on the server.
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_json(self.authorize(self.client.get(self.api_url("users"))))
            .await
    }

    /// Change a user's role. Admin-only on the server.
    pub async fn update_user_role(
        &self,
        user_id: Uuid,
        payload: &UpdateRoleRequest,
    ) -> Result<User, ApiError> {
        let url = self.api_url(&format!("users/{user_id}/role"));
        let request = self.client.put(url).json(payload);
        self.fetch_json(self.authorize(request)).await
    }
}

/// The one store mutation the client performs: a 401 invalidates the
/// persisted session before the error reaches the caller.
pub(crate) fn unauthorized() -> ApiError {
    token_store::clear();
    ApiError::AuthExpired
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
