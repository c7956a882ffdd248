use std::fmt::Write;

use crate::models::{Course, LearnerReport};

pub fn render_summary(course: &Course, reports: &[LearnerReport]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Grade Rollup: {}", course.name);
    let _ = writeln!(
        output,
        "Course {} across {} learners",
        course.id,
        reports.len()
    );
    let _ = writeln!(output);

    if reports.is_empty() {
        let _ = writeln!(output, "No learners had gradable submissions.");
        return output;
    }

    for report in reports.iter() {
        let _ = writeln!(output, "## Learner {}", report.id);
        let _ = writeln!(output, "Weighted average: {:.3}", report.avg);
        for (assignment_id, percentage) in &report.scores {
            let _ = writeln!(
                output,
                "- assignment {}: {:.1}%",
                assignment_id,
                percentage * 100.0
            );
        }
        let _ = writeln!(output);
    }

    output
}
