use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// A graded piece of work attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: Uuid,

    /// The owning course.
    pub course_id: Uuid,

    /// Assignment title.
    pub title: String,

    /// Instructions shown to students.
    pub description: String,

    /// Maximum number of points awardable.
    pub points_possible: f64,

    /// Optional due date; assignments without one accept submissions
    /// indefinitely.
    pub due_at: Option<Timestamp>,
}

/// Request to create an assignment. Issued by teachers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentCreateRequest {
    /// The owning course.
    pub course_id: Uuid,

    /// Assignment title.
    pub title: String,

    /// Instructions shown to students.
    pub description: String,

    /// Maximum number of points awardable.
    pub points_possible: f64,

    /// Optional due date.
    pub due_at: Option<Timestamp>,
}

/// Partial update to an existing assignment; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssignmentUpdateRequest {
    /// New title, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New instructions, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New due date, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Timestamp>,
}

/// A student's submitted work for an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    /// Unique identifier for the submission.
    pub id: Uuid,

    /// The assignment submitted against.
    pub assignment_id: Uuid,

    /// The submitting student.
    pub student_id: Uuid,

    /// Submitted content.
    pub content: String,

    /// When the work was submitted.
    pub submitted_at: Timestamp,

    /// Awarded points, present once graded.
    pub grade: Option<f64>,

    /// Teacher feedback, present once graded.
    pub feedback: Option<String>,
}

impl Submission {
    /// Whether a grade has been recorded for this submission.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// Request to submit work for an assignment. Issued by students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionCreateRequest {
    /// Submitted content.
    pub content: String,
}

/// Request to record a grade on a submission. Issued by teachers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeSubmissionRequest {
    /// Awarded points.
    pub grade: f64,

    /// Optional feedback for the student.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_submission(grade: Option<f64>) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            assignment_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            content: "My essay.".to_string(),
            submitted_at: Timestamp(Utc::now()),
            grade,
            feedback: grade.map(|_| "Well argued.".to_string()),
        }
    }

    #[test]
    fn submission_graded_state() {
        assert!(!sample_submission(None).is_graded());
        assert!(sample_submission(Some(87.5)).is_graded());
    }

    #[test]
    fn assignment_roundtrip() {
        let assignment = Assignment {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            title: "Problem set 3".to_string(),
            description: "Exercises 1 through 9.".to_string(),
            points_possible: 100.0,
            due_at: Some(Timestamp(Utc::now())),
        };
        let serialized = serde_json::to_string(&assignment).unwrap();
        let deserialized: Assignment = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, assignment);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let update = AssignmentUpdateRequest {
            title: Some("Problem set 3 (revised)".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"title\""));
        assert!(!json.contains("\"description\""));
        assert!(!json.contains("\"due_at\""));
    }

    #[test]
    fn grade_request_optional_feedback() {
        let without = GradeSubmissionRequest {
            grade: 92.0,
            feedback: None,
        };
        assert!(!serde_json::to_string(&without).unwrap().contains("feedback"));

        let with = GradeSubmissionRequest {
            grade: 92.0,
            feedback: Some("Nice work.".to_string()),
        };
        assert!(serde_json::to_string(&with).unwrap().contains("Nice work."));
    }
}
