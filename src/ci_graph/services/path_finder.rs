use super::RelationshipIndex;
use crate::ci_graph::domain::Relationship;
use std::collections::{HashMap, VecDeque};

/// PathFinder service for fewest-hop paths between two CIs
///
/// Relationship direction is ignored. Ties between equally short paths are
/// resolved by relationship order.
pub struct PathFinder;

impl PathFinder {
    /// Finds a shortest path from `source_id` to `target_id`
    ///
    /// # Returns
    /// Ids from source to target inclusive. Empty when no path exists or
    /// when either id is not an endpoint of any relationship. A path from an
    /// id to itself is `[id]` if the id appears in the graph.
    pub fn shortest_path(
        relationships: &[Relationship],
        source_id: &str,
        target_id: &str,
    ) -> Vec<String> {
        let adjacency = RelationshipIndex::build(relationships);
        Self::shortest_path_indexed(&adjacency, source_id, target_id)
    }

    /// Same as [`shortest_path`](Self::shortest_path) over a prebuilt index
    pub fn shortest_path_indexed(
        adjacency: &RelationshipIndex<'_>,
        source_id: &str,
        target_id: &str,
    ) -> Vec<String> {
        let (Some(source), Some(target)) = (adjacency.resolve(source_id), adjacency.resolve(target_id))
        else {
            return Vec::new();
        };

        // node -> node it was discovered from
        let mut discovered_from: HashMap<&str, Option<&str>> = HashMap::new();
        let mut queue = VecDeque::new();

        discovered_from.insert(source, None);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            if current == target {
                return Self::reconstruct(&discovered_from, target);
            }

            for neighbor in adjacency.neighbors(current) {
                if !discovered_from.contains_key(neighbor) {
                    discovered_from.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        Vec::new()
    }

    fn reconstruct(discovered_from: &HashMap<&str, Option<&str>>, target: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            path.push(id.to_string());
            cursor = discovered_from.get(id).copied().flatten();
        }
        path.reverse();
        path
    }
}
