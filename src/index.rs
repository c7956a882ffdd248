use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::dates::parse_timestamp;
use crate::models::AssignmentGroup;

#[derive(Debug, Clone)]
pub struct GradedAssignment {
    pub points_possible: f64,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct AssignmentIndex {
    entries: HashMap<i64, GradedAssignment>,
}

impl AssignmentIndex {
    pub fn from_group(group: &AssignmentGroup) -> Self {
        let mut entries = HashMap::new();

        for assignment in group.assignments.iter() {
            if !assignment.points_possible.is_finite() || assignment.points_possible <= 0.0 {
                tracing::warn!(
                    "assignment {} has no gradable points ({}) - excluding it",
                    assignment.id,
                    assignment.points_possible
                );
                continue;
            }

            let Some(due_at) = parse_timestamp(&assignment.due_at) else {
                tracing::warn!(
                    "assignment {} has an unparsable due date {:?} - excluding it",
                    assignment.id,
                    assignment.due_at
                );
                continue;
            };

            entries.insert(
                assignment.id,
                GradedAssignment {
                    points_possible: assignment.points_possible,
                    due_at,
                },
            );
        }

        Self { entries }
    }

    pub fn get(&self, assignment_id: i64) -> Option<&GradedAssignment> {
        self.entries.get(&assignment_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use chrono::TimeZone;

    fn group_with(assignments: Vec<Assignment>) -> AssignmentGroup {
        AssignmentGroup {
            id: 12345,
            name: "Fundamentals of JavaScript".to_string(),
            course_id: 451,
            group_weight: 25.0,
            assignments,
        }
    }

    fn assignment(id: i64, due_at: &str, points_possible: f64) -> Assignment {
        Assignment {
            id,
            name: format!("Assignment {id}"),
            due_at: due_at.to_string(),
            points_possible,
        }
    }

    #[test]
    fn indexes_gradable_assignments() {
        let index = AssignmentIndex::from_group(&group_with(vec![
            assignment(1, "2023-01-25", 50.0),
            assignment(2, "2023-02-27", 150.0),
        ]));

        assert_eq!(index.len(), 2);
        let first = index.get(1).unwrap();
        assert_eq!(first.points_possible, 50.0);
        assert_eq!(
            first.due_at,
            Utc.with_ymd_and_hms(2023, 1, 25, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn excludes_assignments_without_gradable_points() {
        let index = AssignmentIndex::from_group(&group_with(vec![
            assignment(1, "2023-01-25", 0.0),
            assignment(2, "2023-01-25", -10.0),
            assignment(3, "2023-01-25", f64::NAN),
            assignment(4, "2023-01-25", 50.0),
        ]));

        assert_eq!(index.len(), 1);
        assert!(index.get(4).is_some());
    }

    #[test]
    fn excludes_assignments_with_unparsable_due_dates() {
        let index = AssignmentIndex::from_group(&group_with(vec![
            assignment(1, "whenever", 50.0),
            assignment(2, "2023-02-27", 150.0),
        ]));

        assert_eq!(index.len(), 1);
        assert!(index.get(1).is_none());
        assert!(index.get(2).is_some());
    }

    #[test]
    fn empty_group_builds_an_empty_index() {
        let index = AssignmentIndex::from_group(&group_with(vec![]));
        assert!(index.is_empty());
    }

    #[test]
    fn duplicate_assignment_ids_keep_the_last_entry() {
        let index = AssignmentIndex::from_group(&group_with(vec![
            assignment(1, "2023-01-25", 50.0),
            assignment(1, "2023-02-27", 150.0),
        ]));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(1).unwrap().points_possible, 150.0);
    }
}
