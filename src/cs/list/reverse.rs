use super::Link;

/// Reverses a list by repointing each node at the already-reversed prefix.
///
/// Consumes the input and returns the new head; no nodes are allocated or
/// freed.
///
/// # Examples
///
/// ```
/// use algokit::cs::list::{self, ListNode};
///
/// let list = ListNode::from_slice(&[1, 2, 3]);
/// assert_eq!(list::values(&list::reverse_list(list)), vec![3, 2, 1]);
/// ```
pub fn reverse_list(mut head: Link) -> Link {
    let mut reversed: Link = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::super::{values, ListNode};
    use super::*;

    #[test]
    fn test_reverse() {
        let list = ListNode::from_slice(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(values(&reverse_list(list)), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(values(&reverse_list(None)), Vec::<i32>::new());

        let single = ListNode::from_slice(&[9]);
        assert_eq!(values(&reverse_list(single)), vec![9]);
    }

    #[test]
    fn test_double_reverse_is_identity() {
        let list = ListNode::from_slice(&[1, 2, 3]);
        assert_eq!(
            values(&reverse_list(reverse_list(list))),
            vec![1, 2, 3]
        );
    }
}
