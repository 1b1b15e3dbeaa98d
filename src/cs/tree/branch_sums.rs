use super::{TreeLink, TreeNode};

/// Sums every root-to-leaf branch, left to right.
///
/// Depth-first with an explicit stack that carries the running sum, so the
/// tree depth does not consume call stack.
///
/// # Examples
///
/// ```
/// use algokit::cs::tree::{branch_sums, TreeNode};
///
/// let tree = TreeNode::from_values(&[10, 5, 15, 2, 7]);
/// assert_eq!(branch_sums::branch_sums(&tree), vec![17, 22, 25]);
/// ```
pub fn branch_sums(root: &TreeLink) -> Vec<i64> {
    let mut sums = Vec::new();
    let mut stack: Vec<(&TreeNode, i64)> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, 0));
    }

    while let Some((node, running)) = stack.pop() {
        let total = running + i64::from(node.value);
        match (node.left.as_deref(), node.right.as_deref()) {
            (None, None) => sums.push(total),
            (left, right) => {
                if let Some(right) = right {
                    stack.push((right, total));
                }
                if let Some(left) = left {
                    stack.push((left, total));
                }
            }
        }
    }

    sums
}
