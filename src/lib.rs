mod dates;
pub mod error;
pub mod grade;
pub mod index;
pub mod models;
pub mod report;

pub use error::{GradeError, Result};
pub use grade::{grade_learners, grade_learners_now};
pub use models::{
    Assignment, AssignmentGroup, Attempt, Course, LearnerReport, Submission, submissions_from_json,
};
pub use report::render_summary;
