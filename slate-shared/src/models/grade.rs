use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One assignment's grade line within a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseGrade {
    /// The graded assignment.
    pub assignment_id: Uuid,

    /// Assignment title, denormalized for display.
    pub assignment_title: String,

    /// Maximum number of points awardable.
    pub points_possible: f64,

    /// Awarded points, absent while ungraded.
    pub grade: Option<f64>,
}

impl CourseGrade {
    /// Awarded points as a percentage of the possible total, if graded.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        if self.points_possible <= 0.0 {
            return None;
        }
        self.grade.map(|grade| grade / self.points_possible * 100.0)
    }
}

/// All grade lines for one course, as computed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeSummary {
    /// The course summarized.
    pub course_id: Uuid,

    /// Course title, denormalized for display.
    pub course_title: String,

    /// Per-assignment grade lines.
    pub grades: Vec<CourseGrade>,

    /// Server-computed course average percentage, absent until something is
    /// graded.
    pub average: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points_possible: f64, grade: Option<f64>) -> CourseGrade {
        CourseGrade {
            assignment_id: Uuid::new_v4(),
            assignment_title: "Quiz".to_string(),
            points_possible,
            grade,
        }
    }

    #[test]
    fn percentage_of_graded_line() {
        let graded = line(50.0, Some(40.0));
        assert_eq!(graded.percentage(), Some(80.0));
    }

    #[test]
    fn percentage_absent_until_graded() {
        assert_eq!(line(50.0, None).percentage(), None);
    }

    #[test]
    fn percentage_guards_zero_points() {
        assert_eq!(line(0.0, Some(10.0)).percentage(), None);
    }

    #[test]
    fn summary_roundtrip() {
        let summary = GradeSummary {
            course_id: Uuid::new_v4(),
            course_title: "Intro to Systems".to_string(),
            grades: vec![line(100.0, Some(91.0)), line(20.0, None)],
            average: Some(91.0),
        };
        let serialized = serde_json::to_string(&summary).unwrap();
        let deserialized: GradeSummary = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, summary);
        assert_eq!(deserialized.grades.len(), 2);
    }
}
