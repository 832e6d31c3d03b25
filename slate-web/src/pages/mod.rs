mod assignments;
mod course_detail;
mod courses;
mod dashboard;
mod error;
mod grades;
mod landing;
pub mod login;
mod register;
mod status;
mod users;

pub use assignments::AssignmentsPage;
pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use grades::GradesPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use status::StatusPage;
pub use users::UsersPage;
