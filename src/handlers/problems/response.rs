//! Problem response DTOs

use serde::Serialize;

use crate::{catalog::ProblemGroup, models::Problem};

/// Problem response
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: String,
    pub url: String,
    pub contest: Option<String>,
    pub topics: Vec<String>,
    pub solution_path: Option<String>,
    pub tag: String,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            url: problem.url,
            contest: problem.contest,
            topics: problem.topics,
            solution_path: problem.solution_path,
            tag: problem.tag,
        }
    }
}

/// One principal-topic heading with its problems, introductory first
#[derive(Debug, Serialize)]
pub struct ProblemGroupResponse {
    pub name: String,
    pub problems: Vec<ProblemResponse>,
}

impl From<ProblemGroup> for ProblemGroupResponse {
    fn from(group: ProblemGroup) -> Self {
        Self {
            name: group.name,
            problems: group.problems.into_iter().map(Into::into).collect(),
        }
    }
}

/// Problem list response, grouped by principal topic
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub groups: Vec<ProblemGroupResponse>,
    pub total: usize,
}
