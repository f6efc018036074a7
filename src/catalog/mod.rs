//! Catalog ordering engine
//!
//! Pure, I/O-free logic for ordering and grouping the catalog collections:
//!
//! - **Ordering**: topic display order from an explicit rank field, and
//!   pairwise swap-with-neighbor reordering for manual move up/down.
//! - **Reconciliation**: keeping the stored contest-category set a superset
//!   of the categories appearing on contests, with deterministic ranks for
//!   discovered categories.
//! - **Grouping**: assigning each problem a principal topic (the
//!   highest-ranked of its topic references) and deriving the grouped,
//!   intro-first display order of the problem list.
//!
//! All functions here take and return in-memory collections; loading and
//! persisting the underlying documents is the service layer's job.

pub mod grouping;
pub mod ordering;
pub mod reconcile;

pub use grouping::{ProblemGroup, group_by_principal_topic, principal_topic, reorder_problem_within_group};
pub use ordering::{
    Direction, Ranked, distinct_topic_categories, next_rank, order_categories, order_topics,
    reorder_category, reorder_topic, sort_contests,
};
pub use reconcile::{ContestGroup, group_contests_by_category, reconcile_categories};
