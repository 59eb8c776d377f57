use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Walk `graph` breadth-first from `root`, yielding each reachable node once
/// in queue order. The root is yielded first; nodes absent from the adjacency
/// map are treated as having no outgoing edges.
pub fn bfs<'a, V>(graph: &'a HashMap<V, Vec<V>>, root: &'a V) -> Bfs<'a, V>
where
    V: Eq + Hash,
{
    Bfs {
        graph,
        queue: VecDeque::from([root]),
        visited: HashSet::from([root]),
    }
}

/// Walk `graph` depth-first from `root`, yielding each reachable node once in
/// preorder, children left to right.
pub fn dfs<'a, V>(graph: &'a HashMap<V, Vec<V>>, root: &'a V) -> Dfs<'a, V>
where
    V: Eq + Hash,
{
    Dfs {
        graph,
        stack: vec![root],
        visited: HashSet::new(),
    }
}

/// Breadth-first traversal iterator. Constructed by [`bfs`].
pub struct Bfs<'a, V> {
    graph: &'a HashMap<V, Vec<V>>,
    queue: VecDeque<&'a V>,
    /// Nodes already enqueued; guards against revisiting on cyclic inputs.
    visited: HashSet<&'a V>,
}

impl<'a, V> Iterator for Bfs<'a, V>
where
    V: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for next in self.graph.get(node).into_iter().flatten() {
            if self.visited.insert(next) {
                self.queue.push_back(next);
            }
        }
        Some(node)
    }
}

/// Depth-first traversal iterator. Constructed by [`dfs`].
pub struct Dfs<'a, V> {
    graph: &'a HashMap<V, Vec<V>>,
    stack: Vec<&'a V>,
    visited: HashSet<&'a V>,
}

impl<'a, V> Iterator for Dfs<'a, V>
where
    V: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if !self.visited.insert(node) {
                continue;
            }
            // reversed so the leftmost child is popped, and visited, first
            for next in self.graph.get(node).into_iter().flatten().rev() {
                if !self.visited.contains(next) {
                    self.stack.push(next);
                }
            }
            return Some(node);
        }
    }
}
