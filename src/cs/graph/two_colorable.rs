use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Checks whether an undirected graph (adjacency list, both directions
/// listed) can be colored with two colors so no edge joins same-colored
/// vertices.
///
/// BFS-colors every component; a neighbor already holding the current
/// vertex's color is an odd cycle. Out-of-range vertices are rejected.
///
/// # Examples
///
/// ```
/// use algokit::cs::graph::two_colorable::two_colorable;
///
/// // A square alternates fine ...
/// let square = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2]];
/// assert!(two_colorable(&square).unwrap());
///
/// // ... a triangle cannot.
/// let triangle = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
/// assert!(!two_colorable(&triangle).unwrap());
/// ```
pub fn two_colorable(adj: &[Vec<usize>]) -> Result<bool> {
    let n = adj.len();
    let mut color: Vec<Option<bool>> = vec![None; n];

    for start in 0..n {
        if color[start].is_some() {
            continue;
        }
        color[start] = Some(false);
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            let Some(v_color) = color[v] else {
                continue;
            };
            for &w in &adj[v] {
                if w >= n {
                    return Err(Error::invalid_input("edge endpoint is out of range"));
                }
                match color[w] {
                    None => {
                        color[w] = Some(!v_color);
                        queue.push_back(w);
                    }
                    Some(c) if c == v_color => return Ok(false),
                    Some(_) => {}
                }
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_cycle() {
        let square = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2]];
        assert!(two_colorable(&square).unwrap());
    }

    #[test]
    fn test_odd_cycle() {
        let triangle = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
        assert!(!two_colorable(&triangle).unwrap());
    }

    #[test]
    fn test_self_loop() {
        let adj = vec![vec![0]];
        assert!(!two_colorable(&adj).unwrap());
    }

    #[test]
    fn test_disconnected_components() {
        let adj = vec![vec![1], vec![0], vec![3], vec![2]];
        assert!(two_colorable(&adj).unwrap());
    }

    #[test]
    fn test_empty() {
        let adj: Vec<Vec<usize>> = vec![];
        assert!(two_colorable(&adj).unwrap());
    }
}
