pub mod merge_sorted;
pub mod middle;
pub mod remove_duplicates;
pub mod reverse;

pub use merge_sorted::merge_sorted;
pub use middle::middle_node;
pub use remove_duplicates::remove_duplicates;
pub use reverse::reverse_list;

/// Owned pointer to the next node, `None` at the end of the list.
pub type Link = Option<Box<ListNode>>;

/// A node of a singly linked list that owns its tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub value: i32,
    pub next: Link,
}

impl ListNode {
    pub fn new(value: i32) -> Self {
        ListNode { value, next: None }
    }

    /// Builds a list with the same order as the slice.
    pub fn from_slice(values: &[i32]) -> Link {
        let mut head: Link = None;
        for &value in values.iter().rev() {
            head = Some(Box::new(ListNode { value, next: head }));
        }
        head
    }
}

/// Collects the list's values front to back.
pub fn values(list: &Link) -> Vec<i32> {
    let mut out = Vec::new();
    let mut cur = list.as_deref();
    while let Some(node) = cur {
        out.push(node.value);
        cur = node.next.as_deref();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        assert_eq!(values(&ListNode::from_slice(&[1, 2, 3])), vec![1, 2, 3]);
        assert_eq!(values(&ListNode::from_slice(&[])), Vec::<i32>::new());
    }

    #[test]
    fn test_new_node() {
        let node = ListNode::new(7);
        assert_eq!(node.value, 7);
        assert!(node.next.is_none());
    }
}
