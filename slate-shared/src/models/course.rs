use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// A course offered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: Uuid,

    /// Course title.
    pub title: String,

    /// Free-form course description.
    pub description: String,

    /// The teacher who owns the course.
    pub teacher_id: Uuid,

    /// When the course was created.
    pub created_at: Timestamp,
}

/// Request to create a course. Issued by teachers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseCreateRequest {
    /// Course title.
    pub title: String,

    /// Free-form course description.
    pub description: String,
}

/// A student's membership in a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrollment {
    /// Unique identifier for the enrollment.
    pub id: Uuid,

    /// The course enrolled in.
    pub course_id: Uuid,

    /// The enrolled student.
    pub student_id: Uuid,

    /// When the enrollment was created.
    pub enrolled_at: Timestamp,
}

/// Request to enroll the current user in a course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollmentRequest {
    /// The course to enroll in.
    pub course_id: Uuid,
}

/// An ordered content section within a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseModule {
    /// Unique identifier for the module.
    pub id: Uuid,

    /// The owning course.
    pub course_id: Uuid,

    /// Module title.
    pub title: String,

    /// Position within the course, ascending.
    pub position: u32,
}

/// A single lesson within a module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    /// Unique identifier for the lesson.
    pub id: Uuid,

    /// The owning module.
    pub module_id: Uuid,

    /// Lesson title.
    pub title: String,

    /// Lesson body, rendered as plain text.
    pub content: String,

    /// Position within the module, ascending.
    pub position: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn course_roundtrip() {
        let course = Course {
            id: Uuid::new_v4(),
            title: "Intro to Systems".to_string(),
            description: "Memory, processes, and the machine underneath.".to_string(),
            teacher_id: Uuid::new_v4(),
            created_at: Timestamp(Utc::now()),
        };
        let serialized = serde_json::to_string(&course).unwrap();
        let deserialized: Course = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, course);
    }

    #[test]
    fn module_ordering_by_position() {
        let course_id = Uuid::new_v4();
        let mut modules = vec![
            CourseModule {
                id: Uuid::new_v4(),
                course_id,
                title: "Week 2".to_string(),
                position: 2,
            },
            CourseModule {
                id: Uuid::new_v4(),
                course_id,
                title: "Week 1".to_string(),
                position: 1,
            },
        ];
        modules.sort_by_key(|module| module.position);
        assert_eq!(modules[0].title, "Week 1");
        assert_eq!(modules[1].title, "Week 2");
    }

    #[test]
    fn enrollment_request_shape() {
        let request = EnrollmentRequest {
            course_id: Uuid::new_v4(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"course_id\""));
    }
}
