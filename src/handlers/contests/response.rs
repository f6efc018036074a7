//! Contest response DTOs

use serde::Serialize;

use crate::{
    catalog::ContestGroup,
    models::{Contest, ContestCategory},
};

/// Contest response
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub name: String,
    pub year: Option<i64>,
    pub category: Option<String>,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            name: contest.name,
            year: contest.year,
            category: contest.category,
        }
    }
}

/// Contest category response
#[derive(Debug, Serialize)]
pub struct ContestCategoryResponse {
    pub name: String,
    pub rank: i64,
}

impl From<ContestCategory> for ContestCategoryResponse {
    fn from(category: ContestCategory) -> Self {
        Self {
            name: category.name,
            rank: category.rank,
        }
    }
}

/// One category heading with its contests, newest first
#[derive(Debug, Serialize)]
pub struct ContestGroupResponse {
    pub category: ContestCategoryResponse,
    pub contests: Vec<ContestResponse>,
}

impl From<ContestGroup> for ContestGroupResponse {
    fn from(group: ContestGroup) -> Self {
        Self {
            category: group.category.into(),
            contests: group.contests.into_iter().map(Into::into).collect(),
        }
    }
}

/// Contest list response, grouped per category in category-rank order
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub groups: Vec<ContestGroupResponse>,
    pub total: usize,
}

/// Reconciled contest category list
#[derive(Debug, Serialize)]
pub struct ContestCategoriesResponse {
    pub categories: Vec<ContestCategoryResponse>,
}
