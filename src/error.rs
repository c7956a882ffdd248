use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("assignment group does not belong to course: course id {course_id}, group course id {group_course_id}")]
    CourseMismatch { course_id: i64, group_course_id: i64 },

    #[error("malformed {entity}: {source}")]
    Malformed {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GradeError>;
