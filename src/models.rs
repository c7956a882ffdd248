use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
    pub due_at: String,
    pub points_possible: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentGroup {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
    pub group_weight: f64,
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub learner_id: i64,
    pub assignment_id: i64,
    pub submission: Attempt,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attempt {
    pub submitted_at: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LearnerReport {
    pub id: i64,
    pub avg: f64,
    pub scores: BTreeMap<i64, f64>,
}

impl Serialize for LearnerReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len() + 2))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("avg", &self.avg)?;
        for (assignment_id, percentage) in &self.scores {
            map.serialize_entry(&assignment_id.to_string(), percentage)?;
        }
        map.end()
    }
}

impl Course {
    pub fn from_json(raw: &str) -> Result<Self> {
        from_json("course", raw)
    }
}

impl AssignmentGroup {
    pub fn from_json(raw: &str) -> Result<Self> {
        from_json("assignment group", raw)
    }
}

pub fn submissions_from_json(raw: &str) -> Result<Vec<Submission>> {
    from_json("submissions", raw)
}

fn from_json<T: DeserializeOwned>(entity: &'static str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| GradeError::Malformed { entity, source })
}
