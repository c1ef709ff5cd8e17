use crate::ci_graph::domain::Relationship;
use indexmap::IndexSet;
use std::collections::HashMap;

/// RelationshipIndex - directed and undirected adjacency built in one pass
///
/// * `outgoing`: id -> relationships whose source is id, in input order.
///   Used by the tree view.
/// * `neighbors`: id -> ids adjacent in either direction. Insertion ordered,
///   so breadth-first searches break ties by relationship order.
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex<'a> {
    outgoing: HashMap<&'a str, Vec<&'a Relationship>>,
    neighbors: HashMap<&'a str, IndexSet<&'a str>>,
}

impl<'a> RelationshipIndex<'a> {
    pub fn build(relationships: &'a [Relationship]) -> Self {
        let mut outgoing: HashMap<&'a str, Vec<&'a Relationship>> = HashMap::new();
        let mut neighbors: HashMap<&'a str, IndexSet<&'a str>> = HashMap::new();

        for rel in relationships {
            let source = rel.source_id();
            let target = rel.target_id();

            outgoing.entry(source).or_default().push(rel);

            neighbors.entry(source).or_default().insert(target);
            neighbors.entry(target).or_default().insert(source);
        }

        Self {
            outgoing,
            neighbors,
        }
    }

    /// Outgoing relationships of `id`, empty when it has none
    pub fn outgoing(&self, id: &str) -> &[&'a Relationship] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids adjacent to `id` ignoring direction
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &'a str> + '_ {
        self.neighbors
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// True when `id` is an endpoint of at least one relationship
    pub fn contains(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Resolves `id` to the copy borrowed from the relationship slice
    pub fn resolve(&self, id: &str) -> Option<&'a str> {
        self.neighbors.get_key_value(id).map(|(key, _)| *key)
    }

    /// Number of distinct ids appearing as an endpoint
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }
}
