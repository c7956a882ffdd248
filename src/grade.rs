use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::dates::parse_timestamp;
use crate::error::{GradeError, Result};
use crate::index::AssignmentIndex;
use crate::models::{AssignmentGroup, Course, LearnerReport, Submission};

const LATE_PENALTY_RATE: f64 = 0.10;

#[derive(Debug, Default)]
struct LearnerTotals {
    earned: f64,
    possible: f64,
    scores: BTreeMap<i64, f64>,
}

pub fn grade_learners(
    course: &Course,
    group: &AssignmentGroup,
    submissions: &[Submission],
    as_of: DateTime<Utc>,
) -> Result<Vec<LearnerReport>> {
    validate_course_binding(course, group)?;

    let index = AssignmentIndex::from_group(group);
    let mut learners: std::collections::HashMap<i64, LearnerTotals> =
        std::collections::HashMap::new();

    for submission in submissions.iter() {
        let attempt = &submission.submission;

        if !attempt.score.is_finite() {
            tracing::warn!(
                "submission by learner {} for assignment {} has a non-finite score - skipping it",
                submission.learner_id,
                submission.assignment_id
            );
            continue;
        }

        let Some(assignment) = index.get(submission.assignment_id) else {
            tracing::warn!(
                "assignment {} is not part of this group - skipping submission by learner {}",
                submission.assignment_id,
                submission.learner_id
            );
            continue;
        };

        if assignment.due_at > as_of {
            tracing::debug!(
                "assignment {} is not due yet - skipping submission by learner {}",
                submission.assignment_id,
                submission.learner_id
            );
            continue;
        }

        let Some(submitted_at) = parse_timestamp(&attempt.submitted_at) else {
            tracing::warn!(
                "submission by learner {} for assignment {} has an unparsable submitted_at {:?} - skipping it",
                submission.learner_id,
                submission.assignment_id,
                attempt.submitted_at
            );
            continue;
        };

        let mut adjusted = attempt.score;
        if submitted_at > assignment.due_at {
            // The late penalty is a share of total points, not of the raw score.
            let penalty = assignment.points_possible * LATE_PENALTY_RATE;
            adjusted -= penalty;
            tracing::debug!(
                "late submission by learner {} for assignment {} - deducting {} points",
                submission.learner_id,
                submission.assignment_id,
                penalty
            );
        }
        let adjusted = adjusted.clamp(0.0, assignment.points_possible);

        let totals = learners.entry(submission.learner_id).or_default();
        totals.scores.insert(
            submission.assignment_id,
            round3(adjusted / assignment.points_possible),
        );
        totals.earned += adjusted;
        totals.possible += assignment.points_possible;
    }

    let mut reports: Vec<LearnerReport> = learners
        .into_iter()
        .map(|(id, totals)| LearnerReport {
            id,
            avg: if totals.possible > 0.0 {
                round3(totals.earned / totals.possible)
            } else {
                0.0
            },
            scores: totals.scores,
        })
        .collect();
    reports.sort_by_key(|report| report.id);

    Ok(reports)
}

pub fn grade_learners_now(
    course: &Course,
    group: &AssignmentGroup,
    submissions: &[Submission],
) -> Result<Vec<LearnerReport>> {
    grade_learners(course, group, submissions, Utc::now())
}

fn validate_course_binding(course: &Course, group: &AssignmentGroup) -> Result<()> {
    if group.course_id != course.id {
        return Err(GradeError::CourseMismatch {
            course_id: course.id,
            group_course_id: group.course_id,
        });
    }
    Ok(())
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
