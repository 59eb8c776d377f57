use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::ops::Add;

use tracing::trace;

/// Single-source shortest-path distances computed by [`shortest_paths`],
/// holding the best known cost and predecessor for every reachable node.
pub struct ShortestPaths<V, W> {
    best: HashMap<V, (Option<V>, W)>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    /// The cost of the cheapest path from the source to `dst`, or `None` if
    /// `dst` is unreachable.
    pub fn cost(&self, dst: &V) -> Option<W> {
        self.best.get(dst).map(|(_, cost)| *cost)
    }

    /// The cheapest path from the source to `dst`, source first, or `None`
    /// if `dst` is unreachable. Querying the source itself yields the
    /// one-node path.
    pub fn path(&self, dst: &V) -> Option<Vec<V>> {
        if !self.best.contains_key(dst) {
            return None;
        }
        let mut path = vec![dst.clone()];
        let mut node = dst;
        while let Some((Some(prev), _)) = self.best.get(node) {
            path.push(prev.clone());
            node = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Compute single-source shortest paths from `src` over a weighted edge map,
/// keyed `(from, to) -> weight`.
///
/// This is a FIFO-worklist relaxation (Bellman-Ford order): a node is
/// re-examined whenever its best known distance improves, so the walk
/// terminates on cyclic graphs. Weights must be non-negative and are summed
/// with `W::default()` as the zero; negative weights are a precondition
/// violation with unspecified (non-panicking) results.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use graph_walks::shortest_paths;
///
/// let edges = HashMap::from([
///     (("a", "b"), 1),
///     (("a", "c"), 2),
///     (("b", "d"), 3),
///     (("b", "e"), 4),
///     (("c", "e"), 4),
///     (("d", "f"), 2),
///     (("e", "f"), 1),
/// ]);
/// let paths = shortest_paths(&edges, "a");
/// assert_eq!(paths.cost(&"f"), Some(6));
/// assert_eq!(paths.path(&"e"), Some(vec!["a", "b", "e"]));
/// ```
pub fn shortest_paths<V, W>(edges: &HashMap<(V, V), W>, src: V) -> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
    W: Add<Output = W> + Ord + Copy + Default,
{
    let mut adjacency: HashMap<&V, Vec<(&V, W)>> = HashMap::new();
    for ((from, to), weight) in edges {
        adjacency.entry(from).or_default().push((to, *weight));
    }

    let mut best: HashMap<V, (Option<V>, W)> = HashMap::new();
    best.insert(src.clone(), (None, W::default()));
    let mut worklist = VecDeque::from([src]);
    let mut relaxations = 0_usize;

    while let Some(node) = worklist.pop_front() {
        let dist = best[&node].1;
        for (next, weight) in adjacency.get(&node).into_iter().flatten() {
            let candidate = dist + *weight;
            match best.get(*next) {
                Some((_, known)) if *known <= candidate => {}
                _ => {
                    best.insert((*next).clone(), (Some(node.clone()), candidate));
                    worklist.push_back((*next).clone());
                    relaxations += 1;
                }
            }
        }
    }
    trace!(reached = best.len(), relaxations, "relaxation worklist drained");

    ShortestPaths { best }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn demo_edges() -> HashMap<(&'static str, &'static str), u32> {
        HashMap::from([
            (("a", "b"), 1),
            (("a", "c"), 2),
            (("b", "d"), 3),
            (("b", "e"), 4),
            (("c", "e"), 4),
            (("d", "f"), 2),
            (("e", "f"), 1),
        ])
    }

    #[test]
    fn finds_cheapest_route() {
        let paths = shortest_paths(&demo_edges(), "a");
        assert_eq!(paths.cost(&"f"), Some(6));
        // two routes to f cost 6; which one wins depends on edge-map order
        let path = paths.path(&"f").unwrap();
        assert!(path == ["a", "b", "d", "f"] || path == ["a", "b", "e", "f"]);
        // the cheapest route to e is unique
        assert_eq!(paths.path(&"e"), Some(vec!["a", "b", "e"]));
    }

    #[test]
    fn source_costs_nothing() {
        let paths = shortest_paths(&demo_edges(), "a");
        assert_eq!(paths.cost(&"a"), Some(0));
        assert_eq!(paths.path(&"a"), Some(vec!["a"]));
    }

    #[test]
    fn unreachable_nodes_have_no_path() {
        let paths = shortest_paths(&demo_edges(), "b");
        assert_eq!(paths.cost(&"c"), None);
        assert_eq!(paths.path(&"c"), None);
        assert_eq!(paths.cost(&"z"), None);
    }

    #[test]
    fn later_improvement_replaces_first_route() {
        // the two-hop route to 3 is cheaper than the direct edge
        let edges = HashMap::from([((1, 3), 10), ((1, 2), 1), ((2, 3), 2)]);
        let paths = shortest_paths(&edges, 1);
        assert_eq!(paths.cost(&3), Some(3));
        assert_eq!(paths.path(&3), Some(vec![1, 2, 3]));
    }

    #[test]
    fn terminates_on_cycles() {
        let edges = HashMap::from([((1, 2), 1), ((2, 3), 1), ((3, 1), 1)]);
        let paths = shortest_paths(&edges, 1);
        assert_eq!(paths.cost(&3), Some(2));
        assert_eq!(paths.path(&3), Some(vec![1, 2, 3]));
    }
}
