//! Task dependency graph and circular-dependency search.
//!
//! The search is a depth-first traversal over `depends_on` edges using an
//! explicit stack, so arbitrarily long dependency chains cannot exhaust the
//! call stack. It keeps two sets:
//!
//! - `visited`: nodes already reached from some root; never re-explored
//! - `on_path`: ancestors of the node currently being expanded
//!
//! An edge into a node that is on the current path is a back-edge and closes
//! a cycle. The first back-edge found from a root is reported and the
//! traversal from that root stops; the next unvisited root starts fresh.
//! This reports at least one edge per cyclic region reachable from distinct
//! roots, not every cycle in the graph.

use std::collections::{HashMap, HashSet};

use crate::document::Task;

/// Adjacency list from task id to the ids it depends on.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph<'a> {
    order: Vec<&'a str>,
    edges: HashMap<&'a str, Vec<&'a str>>,
}

/// An edge `from -> to` that closes a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

struct Frame<'a> {
    node: &'a str,
    cursor: usize,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph from tasks in declaration order. Tasks without an id
    /// are skipped; a repeated id merges its dependencies into the first.
    pub fn from_tasks(tasks: &[Task<'a>]) -> Self {
        let mut graph = Self::default();
        for task in tasks {
            let Some(id) = task.id else { continue };
            match graph.edges.get_mut(id) {
                Some(deps) => deps.extend(task.depends_on.iter().copied()),
                None => {
                    graph.order.push(id);
                    graph.edges.insert(id, task.depends_on.clone());
                }
            }
        }
        graph
    }

    /// Declared task ids, in declaration order.
    pub fn nodes(&self) -> &[&'a str] {
        &self.order
    }

    /// Ids that `id` depends on. Undeclared ids have no outgoing edges.
    pub fn dependencies(&self, id: &str) -> &[&'a str] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Search for cycles, returning the back-edge found from each root that
    /// reaches one.
    pub fn back_edges(&self) -> Vec<BackEdge<'a>> {
        let mut visited: HashSet<&'a str> = HashSet::new();
        let mut on_path: HashSet<&'a str> = HashSet::new();
        let mut stack: Vec<Frame<'a>> = Vec::new();
        let mut found = Vec::new();

        for &root in &self.order {
            if !visited.insert(root) {
                continue;
            }
            on_path.insert(root);
            stack.push(Frame {
                node: root,
                cursor: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let node = frame.node;
                let Some(&next) = self.dependencies(node).get(frame.cursor) else {
                    on_path.remove(node);
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;

                if on_path.contains(next) {
                    found.push(BackEdge { from: node, to: next });
                    stack.clear();
                    on_path.clear();
                    break;
                }

                if visited.insert(next) {
                    on_path.insert(next);
                    stack.push(Frame {
                        node: next,
                        cursor: 0,
                    });
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task<'a>(id: &'a str, deps: &[&'a str]) -> Task<'a> {
        Task {
            id: Some(id),
            description: None,
            depends_on: deps.to_vec(),
            workorder_id: None,
        }
    }

    fn back_edges<'a>(tasks: &[Task<'a>]) -> Vec<(&'a str, &'a str)> {
        DependencyGraph::from_tasks(tasks)
            .back_edges()
            .into_iter()
            .map(|edge| (edge.from, edge.to))
            .collect()
    }

    #[test]
    fn test_acyclic_graph_has_no_back_edges() {
        let tasks = [
            task("A", &[]),
            task("B", &["A"]),
            task("C", &["A", "B"]),
            task("D", &["B", "C"]),
        ];
        assert!(back_edges(&tasks).is_empty());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let tasks = [
            task("TOP", &["LEFT", "RIGHT"]),
            task("LEFT", &["BASE"]),
            task("RIGHT", &["BASE"]),
            task("BASE", &[]),
        ];
        assert!(back_edges(&tasks).is_empty());
    }

    #[test]
    fn test_self_loop_is_detected() {
        let tasks = [task("A", &["A"])];
        assert_eq!(back_edges(&tasks), vec![("A", "A")]);
    }

    #[test]
    fn test_two_node_cycle() {
        let tasks = [task("A", &["B"]), task("B", &["A"])];
        assert_eq!(back_edges(&tasks), vec![("B", "A")]);
    }

    #[test]
    fn test_three_node_cycle_reports_closing_edge() {
        let tasks = [task("A", &["B"]), task("B", &["C"]), task("C", &["A"])];
        assert_eq!(back_edges(&tasks), vec![("C", "A")]);
    }

    #[test]
    fn test_first_back_edge_per_root_only() {
        // B -> C -> B is never reported: B is already visited when C becomes a root.
        let tasks = [task("A", &["B"]), task("B", &["A", "C"]), task("C", &["B"])];
        assert_eq!(back_edges(&tasks), vec![("B", "A")]);
    }

    #[test]
    fn test_independent_cycles_from_separate_roots() {
        let tasks = [
            task("A", &["B"]),
            task("B", &["A"]),
            task("X", &["Y"]),
            task("Y", &["X"]),
        ];
        assert_eq!(back_edges(&tasks), vec![("B", "A"), ("Y", "X")]);
    }

    #[test]
    fn test_visited_nodes_are_not_reported_from_later_roots() {
        // C is fully explored from A; reaching it again from B is not a cycle.
        let tasks = [task("A", &["C"]), task("B", &["C"]), task("C", &[])];
        assert!(back_edges(&tasks).is_empty());
    }

    #[test]
    fn test_undeclared_dependencies_are_leaves() {
        let tasks = [task("A", &["GHOST"]), task("B", &["A", "GHOST"])];
        assert!(back_edges(&tasks).is_empty());
    }

    #[test]
    fn test_duplicate_ids_merge_dependencies() {
        let tasks = [task("A", &[]), task("B", &["A"]), task("A", &["B"])];
        let graph = DependencyGraph::from_tasks(&tasks);
        assert_eq!(graph.nodes(), &["A", "B"]);
        assert_eq!(graph.dependencies("A"), &["B"]);
        assert_eq!(graph.back_edges(), vec![BackEdge { from: "B", to: "A" }]);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let ids: Vec<String> = (0..100_000).map(|i| format!("T-{i}")).collect();
        let tasks: Vec<Task<'_>> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| match ids.get(i + 1) {
                Some(next) => task(id, &[next.as_str()]),
                None => task(id, &[]),
            })
            .collect();
        assert!(back_edges(&tasks).is_empty());
    }
}
