//! Problem grouping by principal topic

use std::collections::HashMap;

use crate::{
    catalog::ordering::{Direction, order_topics},
    constants::{NO_PRINCIPAL_TOPIC, UNKNOWN_TOPIC_RANK},
    error::{AppError, AppResult},
    models::{Problem, Topic},
};

/// Problems displayed under one principal-topic heading
#[derive(Debug, Clone)]
pub struct ProblemGroup {
    /// The principal topic name, an unresolved reference name, or the
    /// no-principal-topic sentinel
    pub name: String,
    pub problems: Vec<Problem>,
}

/// The topic a problem is displayed under: the highest-ranked of its topic
/// references.
///
/// References that no longer resolve rank as [`UNKNOWN_TOPIC_RANK`], so an
/// unknown reference only wins when every reference is unknown. Rank ties
/// resolve to the first occurrence in the reference list. A problem with no
/// references lands in the [`NO_PRINCIPAL_TOPIC`] group.
pub fn principal_topic(problem: &Problem, topics: &[Topic]) -> String {
    principal_for(&rank_index(topics), problem)
}

/// Group problems by principal topic in display order.
///
/// Groups appear in topic-rank order (topics without problems are skipped),
/// then groups named by unresolved references in lexicographic order, with
/// the no-principal-topic group last. Within a group, introductory-tagged
/// problems come first; both partitions keep the input order.
pub fn group_by_principal_topic(problems: &[Problem], topics: &[Topic]) -> Vec<ProblemGroup> {
    let ranks = rank_index(topics);

    let mut members: HashMap<String, Vec<(usize, &Problem)>> = HashMap::new();
    for (idx, problem) in problems.iter().enumerate() {
        members
            .entry(principal_for(&ranks, problem))
            .or_default()
            .push((idx, problem));
    }

    let mut group_names: Vec<String> = Vec::new();

    let mut ranked_topics = topics.to_vec();
    order_topics(&mut ranked_topics);
    for topic in &ranked_topics {
        if members.contains_key(&topic.name) {
            group_names.push(topic.name.clone());
        }
    }

    let mut unresolved: Vec<String> = members
        .keys()
        .filter(|name| *name != NO_PRINCIPAL_TOPIC && !group_names.contains(name))
        .cloned()
        .collect();
    unresolved.sort();
    group_names.extend(unresolved);

    if members.contains_key(NO_PRINCIPAL_TOPIC) {
        group_names.push(NO_PRINCIPAL_TOPIC.to_string());
    }

    group_names
        .into_iter()
        .map(|name| {
            let mut group = members.remove(&name).unwrap_or_default();
            group.sort_by_key(|(idx, problem)| (!problem.is_introductory(), *idx));

            ProblemGroup {
                name,
                problems: group.into_iter().map(|(_, p)| p.clone()).collect(),
            }
        })
        .collect()
}

/// Swap a problem with its neighbor inside its principal-topic group.
///
/// Membership is recomputed from the current topic ranks, not from any
/// persisted grouping. The swap happens between the two problems' positions
/// in the overall collection; moving past a group boundary is a no-op
/// returning `Ok(false)`.
pub fn reorder_problem_within_group(
    problems: &mut [Problem],
    topics: &[Topic],
    id: &str,
    direction: Direction,
) -> AppResult<bool> {
    let idx = problems
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Problem '{id}' not found")))?;

    let ranks = rank_index(topics);
    let group = principal_for(&ranks, &problems[idx]);

    let mut pos = 0;
    let mut group_indices: Vec<usize> = Vec::new();
    for (i, problem) in problems.iter().enumerate() {
        if principal_for(&ranks, problem) == group {
            if i == idx {
                pos = group_indices.len();
            }
            group_indices.push(i);
        }
    }

    let other = match direction {
        Direction::Up => {
            if pos == 0 {
                return Ok(false);
            }
            group_indices[pos - 1]
        }
        Direction::Down => {
            if pos + 1 >= group_indices.len() {
                return Ok(false);
            }
            group_indices[pos + 1]
        }
    };

    problems.swap(idx, other);
    Ok(true)
}

fn rank_index(topics: &[Topic]) -> HashMap<&str, i64> {
    topics.iter().map(|t| (t.name.as_str(), t.rank)).collect()
}

fn principal_for(ranks: &HashMap<&str, i64>, problem: &Problem) -> String {
    let Some(first) = problem.topics.first() else {
        return NO_PRINCIPAL_TOPIC.to_string();
    };

    let mut best = first.as_str();
    let mut best_rank = *ranks.get(best).unwrap_or(&UNKNOWN_TOPIC_RANK);

    for name in &problem.topics[1..] {
        let rank = *ranks.get(name.as_str()).unwrap_or(&UNKNOWN_TOPIC_RANK);
        if rank > best_rank {
            best = name;
            best_rank = rank;
        }
    }

    best.to_string()
}
