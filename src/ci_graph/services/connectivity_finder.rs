use super::RelationshipIndex;
use crate::ci_graph::domain::Relationship;
use indexmap::IndexSet;
use std::collections::VecDeque;

/// ConnectivityFinder service for the set of CIs reachable from a CI
pub struct ConnectivityFinder;

impl ConnectivityFinder {
    /// Every id reachable from `ci_id` ignoring direction, `ci_id` included.
    ///
    /// The set is in discovery order; only membership is meaningful.
    pub fn connected(relationships: &[Relationship], ci_id: &str) -> IndexSet<String> {
        let adjacency = RelationshipIndex::build(relationships);
        Self::connected_indexed(&adjacency, ci_id)
    }

    pub fn connected_indexed(adjacency: &RelationshipIndex<'_>, ci_id: &str) -> IndexSet<String> {
        let mut visited: IndexSet<String> = IndexSet::new();
        visited.insert(ci_id.to_string());

        let mut queue = VecDeque::new();
        queue.push_back(ci_id.to_string());

        while let Some(current) = queue.pop_front() {
            for neighbor in adjacency.neighbors(&current) {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.to_string());
                    queue.push_back(neighbor.to_string());
                }
            }
        }

        visited
    }
}
