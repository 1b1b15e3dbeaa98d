use super::{Link, ListNode};

/// Returns the middle node of the list; for an even length the second of
/// the two middle nodes is chosen.
///
/// # Examples
///
/// ```
/// use algokit::cs::list::{self, ListNode};
///
/// let list = ListNode::from_slice(&[1, 2, 3, 4]);
/// assert_eq!(list::middle_node(&list).map(|n| n.value), Some(3));
/// ```
pub fn middle_node(list: &Link) -> Option<&ListNode> {
    let mut len = 0usize;
    let mut cur = list.as_deref();
    while let Some(node) = cur {
        len += 1;
        cur = node.next.as_deref();
    }

    let mut cur = list.as_deref();
    for _ in 0..len / 2 {
        cur = cur?.next.as_deref();
    }
    cur
}
