//! Contest category reconciliation and display grouping

use std::collections::{BTreeSet, HashSet};

use crate::{
    catalog::ordering::{order_categories, sort_contests},
    models::{Contest, ContestCategory},
};

/// Contests displayed under one category
#[derive(Debug, Clone)]
pub struct ContestGroup {
    pub category: ContestCategory,
    pub contests: Vec<Contest>,
}

/// Bring the stored category set in line with the categories appearing on
/// contests.
///
/// Every label on a contest (blank ones display as the uncategorized
/// sentinel) must exist as a category. Missing labels are appended with
/// `max existing rank + 1`, visited in lexicographic order so the assigned
/// ranks are deterministic. The result is sorted by rank.
///
/// Returns the reconciled set and whether anything was added; the caller
/// decides whether to persist. Reconciling twice yields the same result as
/// reconciling once.
pub fn reconcile_categories(
    mut categories: Vec<ContestCategory>,
    contests: &[Contest],
) -> (Vec<ContestCategory>, bool) {
    let known: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();

    // BTreeSet iteration gives the lexicographic visit order
    let labels: BTreeSet<&str> = contests.iter().map(Contest::category_label).collect();
    let missing: Vec<String> = labels
        .into_iter()
        .filter(|label| !known.contains(label))
        .map(str::to_string)
        .collect();

    let mut max_rank = categories.iter().map(|c| c.rank).max().unwrap_or(0);
    let changed = !missing.is_empty();

    for name in missing {
        max_rank += 1;
        categories.push(ContestCategory { name, rank: max_rank });
    }

    order_categories(&mut categories);
    (categories, changed)
}

/// Group contests under their reconciled categories, in category-rank order.
///
/// Categories without contests still produce an empty group. `categories`
/// is expected to be reconciled, so every contest label resolves to one of
/// them. Within a group, contests sort by year descending, then name.
pub fn group_contests_by_category(
    contests: &[Contest],
    categories: &[ContestCategory],
) -> Vec<ContestGroup> {
    categories
        .iter()
        .map(|category| {
            let mut members: Vec<Contest> = contests
                .iter()
                .filter(|c| c.category_label() == category.name)
                .cloned()
                .collect();
            sort_contests(&mut members);

            ContestGroup {
                category: category.clone(),
                contests: members,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNCATEGORIZED;

    fn contest(name: &str, category: Option<&str>) -> Contest {
        Contest {
            name: name.to_string(),
            year: Some(2024),
            category: category.map(str::to_string),
        }
    }

    fn category(name: &str, rank: i64) -> ContestCategory {
        ContestCategory {
            name: name.to_string(),
            rank,
        }
    }

    #[test]
    fn test_missing_categories_appended_after_max_rank() {
        let stored = vec![category("ICPC", 3)];
        let contests = vec![
            contest("A", Some("ICPC")),
            contest("B", Some("National")),
            contest("C", Some("Camp")),
        ];

        let (reconciled, changed) = reconcile_categories(stored, &contests);

        assert!(changed);
        let entries: Vec<(String, i64)> = reconciled
            .iter()
            .map(|c| (c.name.clone(), c.rank))
            .collect();
        // alphabetical visit order: Camp gets 4, National gets 5
        assert_eq!(
            entries,
            vec![
                ("ICPC".to_string(), 3),
                ("Camp".to_string(), 4),
                ("National".to_string(), 5),
            ]
        );
    }

    #[test]
    fn test_blank_category_maps_to_sentinel() {
        let contests = vec![contest("A", None), contest("B", Some(""))];
        let (reconciled, changed) = reconcile_categories(Vec::new(), &contests);

        assert!(changed);
        assert_eq!(reconciled.len(), 1);
        assert_eq!(reconciled[0].name, UNCATEGORIZED);
        assert_eq!(reconciled[0].rank, 1);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let contests = vec![
            contest("A", Some("ICPC")),
            contest("B", None),
            contest("C", Some("Camp")),
        ];

        let (once, changed_once) = reconcile_categories(Vec::new(), &contests);
        assert!(changed_once);

        let (twice, changed_twice) = reconcile_categories(once.clone(), &contests);
        assert!(!changed_twice);

        let as_pairs = |cats: &[ContestCategory]| -> Vec<(String, i64)> {
            cats.iter().map(|c| (c.name.clone(), c.rank)).collect()
        };
        assert_eq!(as_pairs(&once), as_pairs(&twice));
    }

    #[test]
    fn test_new_contest_category_gets_next_rank() {
        let stored = vec![category("ICPC", 1), category("National", 2)];
        let contests = vec![contest("A", Some("Brand New"))];

        let (reconciled, changed) = reconcile_categories(stored, &contests);

        assert!(changed);
        let added = reconciled.iter().find(|c| c.name == "Brand New").unwrap();
        assert_eq!(added.rank, 3);
    }

    #[test]
    fn test_result_sorted_by_rank() {
        let stored = vec![category("Late", 9), category("Early", 1)];
        let (reconciled, _) = reconcile_categories(stored, &[]);

        assert_eq!(reconciled[0].name, "Early");
        assert_eq!(reconciled[1].name, "Late");
    }

    #[test]
    fn test_group_contests_keeps_empty_categories() {
        let categories = vec![category("ICPC", 1), category("Camp", 2)];
        let contests = vec![
            contest("Old", Some("ICPC")),
            contest("New", Some("ICPC")),
        ];

        let groups = group_contests_by_category(&contests, &categories);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category.name, "ICPC");
        assert_eq!(groups[0].contests.len(), 2);
        assert_eq!(groups[1].category.name, "Camp");
        assert!(groups[1].contests.is_empty());
    }

    #[test]
    fn test_group_contests_sorts_within_category() {
        let categories = vec![category("ICPC", 1)];
        let mut older = contest("Older", Some("ICPC"));
        older.year = Some(2020);
        let newer = contest("Newer", Some("ICPC"));

        let groups = group_contests_by_category(&[older, newer], &categories);

        assert_eq!(groups[0].contests[0].name, "Newer");
        assert_eq!(groups[0].contests[1].name, "Older");
    }
}
