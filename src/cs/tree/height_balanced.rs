use super::{TreeLink, TreeNode};

/// Checks that every node's subtree heights differ by at most one.
///
/// # Examples
///
/// ```
/// use algokit::cs::tree::{is_height_balanced, TreeNode};
///
/// let balanced = TreeNode::from_values(&[10, 5, 15]);
/// assert!(is_height_balanced(&balanced));
///
/// let chain = TreeNode::from_values(&[1, 2, 3, 4]);
/// assert!(!is_height_balanced(&chain));
/// ```
pub fn is_height_balanced(root: &TreeLink) -> bool {
    balanced_height(root.as_deref()).is_some()
}

/// The subtree height when balanced, `None` as soon as any node is not.
fn balanced_height(node: Option<&TreeNode>) -> Option<u32> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;
    if left.abs_diff(right) > 1 {
        None
    } else {
        Some(left.max(right) + 1)
    }
}
