//! Rank-based ordering and pairwise reordering

use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{Contest, ContestCategory, Topic},
};

/// Reorder direction for manual move operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parse a direction from its path representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// Types ordered by a mutable integer rank
pub trait Ranked {
    fn rank(&self) -> i64;
    fn set_rank(&mut self, rank: i64);
}

impl Ranked for Topic {
    fn rank(&self) -> i64 {
        self.rank
    }

    fn set_rank(&mut self, rank: i64) {
        self.rank = rank;
    }
}

impl Ranked for ContestCategory {
    fn rank(&self) -> i64 {
        self.rank
    }

    fn set_rank(&mut self, rank: i64) {
        self.rank = rank;
    }
}

/// Sort topics ascending by rank, preserving input order on ties
pub fn order_topics(topics: &mut [Topic]) {
    sort_by_rank(topics);
}

/// Sort contest categories ascending by rank, preserving input order on ties
pub fn order_categories(categories: &mut [ContestCategory]) {
    sort_by_rank(categories);
}

/// The rank a newly created record receives: one past the current maximum
pub fn next_rank<T: Ranked>(items: &[T]) -> i64 {
    items.iter().map(Ranked::rank).max().map_or(1, |max| max + 1)
}

/// Swap a topic's rank with its neighbor in the given direction.
///
/// `topics` must already be in rank order. Moving the first topic up or the
/// last topic down is a no-op returning `Ok(false)`.
pub fn reorder_topic(topics: &mut [Topic], name: &str, direction: Direction) -> AppResult<bool> {
    let idx = topics
        .iter()
        .position(|t| t.name == name)
        .ok_or_else(|| AppError::NotFound(format!("Topic '{name}' not found")))?;

    Ok(swap_rank_with_neighbor(topics, idx, direction))
}

/// Swap a category's rank with its neighbor, under the same rules as
/// [`reorder_topic`]
pub fn reorder_category(
    categories: &mut [ContestCategory],
    name: &str,
    direction: Direction,
) -> AppResult<bool> {
    let idx = categories
        .iter()
        .position(|c| c.name == name)
        .ok_or_else(|| AppError::NotFound(format!("Category '{name}' not found")))?;

    Ok(swap_rank_with_neighbor(categories, idx, direction))
}

/// Sort contests by year descending (absent year sorts last), then by name
pub fn sort_contests(contests: &mut [Contest]) {
    contests.sort_by(|a, b| {
        b.year
            .unwrap_or(0)
            .cmp(&a.year.unwrap_or(0))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Distinct non-empty topic categories, sorted lexicographically
pub fn distinct_topic_categories(topics: &[Topic]) -> Vec<String> {
    let categories: BTreeSet<&str> = topics
        .iter()
        .filter_map(|t| t.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    categories.into_iter().map(str::to_string).collect()
}

fn sort_by_rank<T: Ranked>(items: &mut [T]) {
    items.sort_by_key(Ranked::rank);
}

/// Exchange the rank fields of `items[idx]` and its neighbor, leaving
/// record positions untouched. Returns false at a boundary.
fn swap_rank_with_neighbor<T: Ranked>(items: &mut [T], idx: usize, direction: Direction) -> bool {
    let other = match direction {
        Direction::Up => {
            if idx == 0 {
                return false;
            }
            idx - 1
        }
        Direction::Down => {
            if idx + 1 >= items.len() {
                return false;
            }
            idx + 1
        }
    };

    let rank = items[idx].rank();
    let other_rank = items[other].rank();
    items[idx].set_rank(other_rank);
    items[other].set_rank(rank);
    true
}
