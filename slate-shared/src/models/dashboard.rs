use serde::{Deserialize, Serialize};

/// Aggregate counts for the dashboard landing view, computed by the API for
/// the authenticated user's role.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Courses the user teaches or is enrolled in.
    pub course_count: u32,

    /// Assignments visible to the user.
    pub assignment_count: u32,

    /// Submissions awaiting a grade.
    pub pending_submissions: u32,

    /// Submissions already graded.
    pub graded_submissions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_roundtrip() {
        let summary = DashboardSummary {
            course_count: 4,
            assignment_count: 12,
            pending_submissions: 3,
            graded_submissions: 9,
        };
        let serialized = serde_json::to_string(&summary).unwrap();
        let deserialized: DashboardSummary = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, summary);
    }

    #[test]
    fn summary_defaults_to_zero() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.course_count, 0);
        assert_eq!(summary.pending_submissions, 0);
    }
}
