//! Generic directed graph with lazily created, key-addressed nodes

use core::hash::{Hash, Hasher};

use hashbrown::HashMap;

/// Graph vertex: a key plus the outgoing adjacency, keyed by neighbor.
///
/// Equality and hashing depend on the key alone, so a node identity is
/// stable while its adjacency grows.
#[derive(Debug, Clone)]
pub struct Node<K, W> {
    key: K,
    edges: HashMap<K, W>,
}

impl<K, W> Node<K, W> {
    fn new(key: K) -> Self {
        Node {
            key,
            edges: HashMap::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Outgoing edges as `(neighbor key, weight)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&K, &W)> {
        self.edges.iter()
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

impl<K: PartialEq, W> PartialEq for Node<K, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, W> Eq for Node<K, W> {}

impl<K: Hash, W> Hash for Node<K, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Directed graph holding exactly one [`Node`] per key.
///
/// Nodes only ever come into existence through [`Graph::create_edge`];
/// there is no node removal.
#[derive(Debug, Clone)]
pub struct Graph<K, W> {
    nodes: HashMap<K, Node<K, W>>,
}

impl<K, W> Graph<K, W> {
    pub fn new() -> Self {
        Graph {
            nodes: HashMap::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<K, W>> {
        self.nodes.values()
    }
}

impl<K, W> Graph<K, W>
where
    K: Eq + Hash + Clone,
{
    /// Sets the directed edge `from -> to`, creating missing endpoints.
    ///
    /// Calling this again for the same ordered pair only overwrites the
    /// weight; nodes are never duplicated.
    pub fn create_edge(&mut self, from: K, to: K, weight: W) {
        self.ensure_node(&to);
        let node = self.ensure_node(&from);
        node.edges.insert(to, weight);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: &K) -> Option<&Node<K, W>> {
        self.nodes.get(key)
    }

    /// Weight of the edge `from -> to`, if both endpoints and the edge exist
    pub fn weight(&self, from: &K, to: &K) -> Option<&W> {
        self.nodes.get(from)?.edges.get(to)
    }

    pub fn weight_mut(&mut self, from: &K, to: &K) -> Option<&mut W> {
        self.nodes.get_mut(from)?.edges.get_mut(to)
    }

    /// Structure-preserving weight transform.
    ///
    /// Produces a graph with the same nodes and edges where every weight
    /// is replaced by `f(weight)`. This is how a simulation trial derives
    /// its own independently sampled copy of a template graph.
    pub fn map_weights<T>(&self, mut f: impl FnMut(&W) -> T) -> Graph<K, T> {
        let mut mapped = Graph::new();
        for node in self.nodes.values() {
            mapped.ensure_node(&node.key);
            for (to, weight) in &node.edges {
                mapped.create_edge(node.key.clone(), to.clone(), f(weight));
            }
        }
        mapped
    }

    fn ensure_node(&mut self, key: &K) -> &mut Node<K, W> {
        self.nodes
            .entry(key.clone())
            .or_insert_with(|| Node::new(key.clone()))
    }
}

impl<K, W> Default for Graph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}
