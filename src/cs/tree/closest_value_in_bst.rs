use super::TreeLink;

/// Finds the stored value closest to `target` in a binary search tree.
///
/// Walks a single root-to-leaf path, branching by comparison at each node,
/// so only O(height) nodes are visited. Returns `None` for an empty tree;
/// on a tie between two equally-close values the one seen first on the
/// path wins.
///
/// # Examples
///
/// ```
/// use algokit::cs::tree::{closest_value_in_bst, TreeNode};
///
/// let tree = TreeNode::from_values(&[10, 5, 15, 13, 22, 14]);
/// assert_eq!(closest_value_in_bst::closest_value_in_bst(&tree, 12), Some(13));
/// ```
pub fn closest_value_in_bst(root: &TreeLink, target: i32) -> Option<i32> {
    let mut closest: Option<i32> = None;
    let mut current = root.as_deref();

    while let Some(node) = current {
        let distance = i64::from(node.value).abs_diff(i64::from(target));
        let improves = match closest {
            None => true,
            Some(best) => distance < i64::from(best).abs_diff(i64::from(target)),
        };
        if improves {
            closest = Some(node.value);
        }

        current = if target < node.value {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::super::TreeNode;
    use super::*;

    #[test]
    fn test_classic() {
        let tree = TreeNode::from_values(&[10, 5, 15, 2, 5, 13, 22, 1, 14]);
        assert_eq!(closest_value_in_bst(&tree, 12), Some(13));
    }

    #[test]
    fn test_exact_match() {
        let tree = TreeNode::from_values(&[10, 5, 15]);
        assert_eq!(closest_value_in_bst(&tree, 5), Some(5));
    }

    #[test]
    fn test_target_outside_range() {
        let tree = TreeNode::from_values(&[10, 5, 15]);
        assert_eq!(closest_value_in_bst(&tree, -100), Some(5));
        assert_eq!(closest_value_in_bst(&tree, 100), Some(15));
    }

    #[test]
    fn test_empty() {
        assert_eq!(closest_value_in_bst(&None, 3), None);
    }
}
