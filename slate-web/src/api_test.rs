//! Tests for the API client functionality
//!
//! Validates client construction, endpoint URL templates, the error
//! taxonomy, and request/response model shapes.

#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, ApiError, REQUEST_TIMEOUT_MS};
    use shared::models::{ErrorResponse, LoginRequest, UserRole};
    use std::str::FromStr;
    use uuid::Uuid;

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let _client = ApiClient::new("http://localhost:8080/api");
        let _client_trailing = ApiClient::new("http://localhost:8080/api/");
        // Clients should be created successfully
    }

    /// Tests resource endpoint URL templates
    #[test]
    fn test_api_endpoints() {
        let course_id = "3f2b6a1e-0000-0000-0000-000000000001";

        let courses_url = "/api/courses".to_string();
        assert_eq!(courses_url, "/api/courses");

        let course_url = format!("/api/courses/{course_id}");
        assert_eq!(
            course_url,
            "/api/courses/3f2b6a1e-0000-0000-0000-000000000001"
        );

        let assignments_url = format!("/api/courses/{course_id}/assignments");
        assert!(assignments_url.ends_with("/assignments"));

        let grades_url = format!("/api/courses/{course_id}/grades");
        assert!(grades_url.ends_with("/grades"));
    }

    /// Tests the timeout stays within the specified window
    #[test]
    fn test_request_timeout_bounds() {
        assert!(REQUEST_TIMEOUT_MS >= 8_000);
        assert!(REQUEST_TIMEOUT_MS <= 10_000);
    }

    /// Tests error taxonomy display text
    #[test]
    fn test_error_display() {
        assert!(ApiError::AuthExpired.to_string().contains("sign in"));
        assert!(ApiError::Timeout.to_string().contains("too long"));

        let api = ApiError::Api {
            status: 404,
            message: "Course not found".to_string(),
        };
        let rendered = api.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Course not found"));

        let network = ApiError::Network("connection refused".to_string());
        assert!(network.to_string().contains("connection refused"));
    }

    /// Tests error equality used by the 404-probe mapping
    #[test]
    fn test_error_matching() {
        let not_found = ApiError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(matches!(not_found, ApiError::Api { status: 404, .. }));

        let forbidden = ApiError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(!matches!(forbidden, ApiError::Api { status: 404, .. }));
        assert_ne!(not_found, forbidden);
    }

    /// Tests the wire error body feeding Api messages
    #[test]
    fn test_error_body_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message":"Validation failed","details":"title required"}"#)
                .unwrap();
        assert_eq!(body.to_string(), "Validation failed: title required");
    }

    /// Tests login request payload shape
    #[test]
    fn test_login_request_payload() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(json.contains("\"password\""));
    }

    /// Tests role values used by the admin role update endpoint
    #[test]
    fn test_update_role_values() {
        for role in ["student", "teacher", "admin"] {
            assert!(UserRole::from_str(role).is_ok());
        }
    }

    /// Tests identifier formats used in URL templates
    #[test]
    fn test_identifier_format() {
        let id = Uuid::new_v4().to_string();
        assert_eq!(id.len(), 36);
        assert!(!id.contains('/'));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{ApiError, unauthorized};
    use crate::token_store;
    use chrono::Utc;
    use shared::models::{Timestamp, User, UserRole};
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// A 401 both raises `AuthExpired` and leaves the token store cleared.
    #[wasm_bindgen_test]
    fn unauthorized_clears_stored_session() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            role: UserRole::Admin,
            created_at: Timestamp(Utc::now()),
        };
        token_store::save("token-abc", &user);
        assert!(token_store::load().is_some());

        let err = unauthorized();
        assert_eq!(err, ApiError::AuthExpired);
        assert!(token_store::load().is_none());
        assert!(token_store::read_cookie(token_store::TOKEN_KEY).is_none());
    }
}
