//! Wire models grouped by resource.

pub mod assignment;
pub mod course;
pub mod dashboard;
pub mod errors;
pub mod grade;
pub mod timestamp;
pub mod user;

pub use assignment::{
    Assignment, AssignmentCreateRequest, AssignmentUpdateRequest, GradeSubmissionRequest,
    Submission, SubmissionCreateRequest,
};
pub use course::{
    Course, CourseCreateRequest, CourseModule, Enrollment, EnrollmentRequest, Lesson,
};
pub use dashboard::DashboardSummary;
pub use errors::ErrorResponse;
pub use grade::{CourseGrade, GradeSummary};
pub use timestamp::Timestamp;
pub use user::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateRoleRequest, User, UserRole,
};
