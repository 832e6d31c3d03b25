//! Tests for the routing system
//!
//! Validates route definitions, path rendering, and URL parameter parsing
//! for the application's routing infrastructure.

#[cfg(test)]
mod tests {
    use crate::routes::{AdminRoute, AppRoute, MainRoute};
    use yew_router::Routable;

    /// Tests route paths match the guard's navigation surface
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Landing.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::Courses.to_path(), "/dashboard/courses");
        assert_eq!(MainRoute::Assignments.to_path(), "/dashboard/assignments");
        assert_eq!(MainRoute::Grades.to_path(), "/dashboard/grades");
        assert_eq!(MainRoute::AdminRoot.to_path(), "/dashboard/admin");
    }

    /// Tests course detail parameter rendering
    #[test]
    fn test_course_detail_path() {
        let route = MainRoute::CourseDetail {
            course_id: "3f2b6a1e".to_string(),
        };
        assert_eq!(route.to_path(), "/dashboard/courses/3f2b6a1e");
    }

    /// Tests path recognition back into routes
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Landing));
        assert_eq!(
            MainRoute::recognize("/dashboard"),
            Some(MainRoute::Dashboard)
        );
        assert_eq!(
            MainRoute::recognize("/dashboard/courses/abc"),
            Some(MainRoute::CourseDetail {
                course_id: "abc".to_string(),
            })
        );
        assert_eq!(
            AdminRoute::recognize("/dashboard/admin/status"),
            Some(AdminRoute::Status)
        );
    }

    /// Tests unknown paths fall back to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            MainRoute::recognize("/no/such/page"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests route equality
    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Dashboard, MainRoute::Dashboard);

        let detail1 = MainRoute::CourseDetail {
            course_id: "abc".to_string(),
        };
        let detail2 = MainRoute::CourseDetail {
            course_id: "abc".to_string(),
        };
        let detail3 = MainRoute::CourseDetail {
            course_id: "def".to_string(),
        };
        assert_eq!(detail1, detail2);
        assert_ne!(detail1, detail3);
    }

    /// Tests nav metadata for header items
    #[test]
    fn test_nav_labels() {
        assert_eq!(AppRoute::Main(MainRoute::Courses).label(), "Courses");
        assert_eq!(AppRoute::Main(MainRoute::Grades).label(), "Grades");
        assert_eq!(AppRoute::Admin(AdminRoute::Users).label(), "Users");
        // Non-nav routes carry no label.
        assert_eq!(AppRoute::Main(MainRoute::Login).label(), "");
    }

    /// Tests the default route is the public landing page
    #[test]
    fn test_default_route() {
        assert_eq!(AppRoute::default(), AppRoute::Main(MainRoute::Landing));
    }

    /// Tests admin routes are distinct and live under the dashboard prefix
    #[test]
    fn test_admin_routes() {
        assert_ne!(AdminRoute::Users, AdminRoute::Status);
        for route in [AdminRoute::Users, AdminRoute::Status] {
            assert!(route.to_path().starts_with("/dashboard/admin"));
        }
    }
}
