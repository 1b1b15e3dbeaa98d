use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Computes a topological ordering of a directed acyclic graph given as an
/// adjacency list.
///
/// Kahn's algorithm: vertices with no incoming edges are emitted first, and
/// each emission releases its successors. If the order comes up short the
/// remaining vertices all sit on cycles, which is an error since no valid
/// ordering exists.
///
/// # Examples
///
/// ```
/// use algokit::cs::graph::topological_sort::topological_sort;
///
/// // 0 before 1, both before 2
/// let adj = vec![vec![1, 2], vec![2], vec![]];
/// assert_eq!(topological_sort(&adj).unwrap(), vec![0, 1, 2]);
/// ```
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V)
pub fn topological_sort(adj: &[Vec<usize>]) -> Result<Vec<usize>> {
    let n = adj.len();

    let mut indegree = vec![0usize; n];
    for neighbors in adj {
        for &w in neighbors {
            if w >= n {
                return Err(Error::invalid_input("edge endpoint is out of range"));
            }
            indegree[w] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &w in &adj[v] {
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    if order.len() != n {
        return Err(Error::invalid_input(
            "graph contains a cycle, topological sort not possible",
        ));
    }

    log::trace!("topological order computed for {} vertices", n);
    Ok(order)
}
