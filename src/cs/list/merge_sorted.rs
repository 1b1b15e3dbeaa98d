use super::Link;

/// Merges two ascending lists into one, reusing the existing nodes.
///
/// A cursor at the merged tail repeatedly steals the smaller head of the
/// two inputs; no recursion, no allocation.
///
/// # Examples
///
/// ```
/// use algokit::cs::list::{self, ListNode};
///
/// let a = ListNode::from_slice(&[1, 3, 5]);
/// let b = ListNode::from_slice(&[2, 4, 6]);
/// assert_eq!(list::values(&list::merge_sorted(a, b)), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge_sorted(mut a: Link, mut b: Link) -> Link {
    let mut merged: Link = None;
    let mut tail = &mut merged;

    loop {
        let take_from_a = match (a.as_ref(), b.as_ref()) {
            (Some(x), Some(y)) => x.value <= y.value,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let source = if take_from_a { &mut a } else { &mut b };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::super::{values, ListNode};
    use super::*;

    #[test]
    fn test_interleaved() {
        let a = ListNode::from_slice(&[1, 3, 5]);
        let b = ListNode::from_slice(&[2, 4, 6]);
        assert_eq!(values(&merge_sorted(a, b)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_uneven_lengths() {
        let a = ListNode::from_slice(&[10]);
        let b = ListNode::from_slice(&[1, 2, 3]);
        assert_eq!(values(&merge_sorted(a, b)), vec![1, 2, 3, 10]);
    }

    #[test]
    fn test_empty_sides() {
        let b = ListNode::from_slice(&[1, 2]);
        assert_eq!(values(&merge_sorted(None, b)), vec![1, 2]);

        let a = ListNode::from_slice(&[1, 2]);
        assert_eq!(values(&merge_sorted(a, None)), vec![1, 2]);

        assert_eq!(values(&merge_sorted(None, None)), Vec::<i32>::new());
    }

    #[test]
    fn test_duplicates_kept() {
        let a = ListNode::from_slice(&[1, 2, 2]);
        let b = ListNode::from_slice(&[2, 3]);
        assert_eq!(values(&merge_sorted(a, b)), vec![1, 2, 2, 2, 3]);
    }
}
