//! Single-destination Dijkstra over the generic graph.
//!
//! The queue holds `(cumulative cost, node)` entries with no decrease-key;
//! superseded entries stay queued and are skipped once their node is
//! finalized. All usable edge weights are non-negative (unreachable ones
//! never enter the queue), so popped cumulative costs are non-decreasing
//! and the first pop of the destination closes the search.

use core::cmp::Ordering;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::collections::MinHeap;
use crate::model::{EdgeWeight, Graph};

struct State<K, W> {
    cost: W,
    node: K,
}

// Queue entries compare by cost alone
impl<K, W: Ord> PartialEq for State<K, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<K, W: Ord> Eq for State<K, W> {}

impl<K, W: Ord> PartialOrd for State<K, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, W: Ord> Ord for State<K, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

/// Best path between two keys and its total weight.
///
/// `None` means no path exists in this graph (including an unknown
/// destination key); that is a normal outcome, not an error.
pub fn shortest_path<K, W>(graph: &Graph<K, W>, source: &K, destination: &K) -> Option<(W, Vec<K>)>
where
    K: Eq + Hash + Clone,
    W: EdgeWeight,
{
    let source_node = graph.node(source)?;

    let mut heap: MinHeap<State<K, W>> = MinHeap::new();
    let mut finalized: HashSet<K> = HashSet::new();
    let mut best: HashMap<K, W> = HashMap::new();
    let mut parent: HashMap<K, K> = HashMap::new();

    for (neighbor, weight) in source_node.edges() {
        relax(
            &mut heap,
            &mut best,
            &mut parent,
            weight.clone(),
            neighbor,
            source,
        );
    }
    finalized.insert(source.clone());

    while let Some(State { cost, node }) = heap.pop() {
        if finalized.contains(&node) {
            // stale entry superseded by a cheaper one
            continue;
        }
        if node == *destination {
            return Some((cost, assemble_path(&parent, node)));
        }

        if let Some(current) = graph.node(&node) {
            for (neighbor, weight) in current.edges() {
                if !finalized.contains(neighbor) {
                    relax(
                        &mut heap,
                        &mut best,
                        &mut parent,
                        cost.combine(weight),
                        neighbor,
                        &node,
                    );
                }
            }
        }
        finalized.insert(node);
    }

    None
}

/// Records `cost` as the way to reach `node` through `prev` if it beats
/// the best cost known so far. Ties keep the earlier route.
fn relax<K, W>(
    heap: &mut MinHeap<State<K, W>>,
    best: &mut HashMap<K, W>,
    parent: &mut HashMap<K, K>,
    cost: W,
    node: &K,
    prev: &K,
) where
    K: Eq + Hash + Clone,
    W: EdgeWeight,
{
    if cost.is_unreachable() {
        return;
    }
    if let Some(known) = best.get(node) {
        if *known <= cost {
            return;
        }
    }
    best.insert(node.clone(), cost.clone());
    parent.insert(node.clone(), prev.clone());
    heap.push(State {
        cost,
        node: node.clone(),
    });
}

/// Walks the parent chain back from the destination and reverses it into
/// source-first order.
fn assemble_path<K>(parent: &HashMap<K, K>, destination: K) -> Vec<K>
where
    K: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut key = Some(destination);
    while let Some(current) = key {
        key = parent.get(&current).cloned();
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreetCost;

    // Minimal scalar weight to exercise the generic contract
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Hops(u32);

    impl EdgeWeight for Hops {
        fn combine(&self, other: &Self) -> Self {
            Hops(self.0 + other.0)
        }

        fn is_unreachable(&self) -> bool {
            self.0 == u32::MAX
        }
    }

    #[test]
    fn direct_edge() {
        let mut graph = Graph::new();
        graph.create_edge("a", "b", Hops(4));

        let (weight, path) = shortest_path(&graph, &"a", &"b").unwrap();
        assert_eq!(weight, Hops(4));
        assert_eq!(path, vec!["a", "b"]);
    }

    #[test]
    fn detour_beats_direct_edge() {
        let mut graph = Graph::new();
        graph.create_edge("a", "c", Hops(10));
        graph.create_edge("a", "b", Hops(3));
        graph.create_edge("b", "c", Hops(3));

        let (weight, path) = shortest_path(&graph, &"a", &"c").unwrap();
        assert_eq!(weight, Hops(6));
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn cumulative_cost_not_edge_cost() {
        // a->b->d looks cheap edge-by-edge but loses on the full path
        let mut graph = Graph::new();
        graph.create_edge("a", "b", Hops(1));
        graph.create_edge("b", "d", Hops(10));
        graph.create_edge("a", "c", Hops(5));
        graph.create_edge("c", "d", Hops(2));

        let (weight, path) = shortest_path(&graph, &"a", &"d").unwrap();
        assert_eq!(weight, Hops(7));
        assert_eq!(path, vec!["a", "c", "d"]);
    }

    #[test]
    fn disconnected_destination() {
        let mut graph = Graph::new();
        graph.create_edge("a", "b", Hops(1));
        graph.create_edge("c", "d", Hops(1));

        assert!(shortest_path(&graph, &"a", &"d").is_none());
    }

    #[test]
    fn unknown_destination_is_no_path() {
        let mut graph = Graph::new();
        graph.create_edge("a", "b", Hops(1));

        assert!(shortest_path(&graph, &"a", &"z").is_none());
    }

    #[test]
    fn unknown_source_is_no_path() {
        let mut graph = Graph::new();
        graph.create_edge("a", "b", Hops(1));

        assert!(shortest_path(&graph, &"z", &"b").is_none());
    }

    #[test]
    fn unreachable_edges_are_skipped() {
        let mut graph = Graph::new();
        graph.create_edge("a", "b", Hops(u32::MAX));

        assert!(shortest_path(&graph, &"a", &"b").is_none());
    }

    #[test]
    fn street_costs_accumulate_exact_times() {
        let mut graph = Graph::new();
        graph.create_edge("a", "b", StreetCost::new(10.0, 10.0));
        graph.create_edge("b", "c", StreetCost::new(10.0, 10.0));
        graph.create_edge("a", "c", StreetCost::new(30.0, 10.0));

        let (weight, path) = shortest_path(&graph, &"a", &"c").unwrap();
        assert_eq!(path, vec!["a", "b", "c"]);
        assert!((weight.time() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn blocked_street_forces_the_detour() {
        let mut graph = Graph::new();
        graph.create_edge("a", "c", StreetCost::new(5.0, 0.0));
        graph.create_edge("a", "b", StreetCost::new(20.0, 40.0));
        graph.create_edge("b", "c", StreetCost::new(20.0, 40.0));

        let (weight, path) = shortest_path(&graph, &"a", &"c").unwrap();
        assert_eq!(path, vec!["a", "b", "c"]);
        assert!((weight.time() - 1.0).abs() < 1e-12);
    }
}
