use super::{TreeLink, TreeNode};

/// Sums the depth of every node (the root has depth zero).
///
/// # Examples
///
/// ```
/// use algokit::cs::tree::{node_depths, TreeNode};
///
/// let tree = TreeNode::from_values(&[8, 4, 12, 2, 6]);
/// assert_eq!(node_depths::node_depths(&tree), 6);
/// ```
pub fn node_depths(root: &TreeLink) -> u64 {
    let mut total = 0u64;
    let mut stack: Vec<(&TreeNode, u64)> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, 0));
    }

    while let Some((node, depth)) = stack.pop() {
        total += depth;
        if let Some(left) = node.left.as_deref() {
            stack.push((left, depth + 1));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, depth + 1));
        }
    }

    total
}
