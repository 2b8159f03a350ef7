use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a node linked into a [`LinkedList`].
///
/// Ids are handed out by [`LinkedList::insert`] and friends. Two nodes with
/// equal payloads always have different ids. An id names exactly one
/// insertion: once its node is removed it is never valid again, even if the
/// arena slot is reused, and it is never valid in another list.
///
/// [`LinkedList`]: crate::LinkedList
/// [`LinkedList::insert`]: crate::LinkedList::insert
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// slot in the arena
    pub(crate) key: usize,
    /// process-wide unique insertion stamp
    pub(crate) stamp: u64,
}

static NEXT_STAMP: AtomicU64 = AtomicU64::new(0);

impl NodeId {
    /// A fresh id for a node stored at `key`.
    pub(crate) fn fresh(key: usize) -> Self {
        Self {
            key,
            stamp: NEXT_STAMP.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}#{})", self.key, self.stamp)
    }
}

/// The capability a type needs to be stored in a [`LinkedList`]: two
/// independently nullable navigational relations.
///
/// - `head` points toward the successor (next toward the tail end);
/// - `tail` points toward the predecessor (previous toward the head end).
///
/// Implementors only store the relations. Keeping them consistent is the
/// list's job, so a node's relations must not be rewritten by hand while it
/// is linked.
///
/// [`LinkedList`]: crate::LinkedList
pub trait Link {
    fn head(&self) -> Option<NodeId>;
    fn tail(&self) -> Option<NodeId>;
    fn set_head(&mut self, head: Option<NodeId>);
    fn set_tail(&mut self, tail: Option<NodeId>);
}

/// A node carrying nothing but its two relations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Node {
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Link for Node {
    #[inline]
    fn head(&self) -> Option<NodeId> {
        self.head
    }
    #[inline]
    fn tail(&self) -> Option<NodeId> {
        self.tail
    }
    #[inline]
    fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }
    #[inline]
    fn set_tail(&mut self, tail: Option<NodeId>) {
        self.tail = tail;
    }
}

/// A node carrying a payload of type `T`.
///
/// Its [`Display`](fmt::Display) form is the payload's, which is what the
/// list joins when it is rendered.
///
/// # Examples
///
/// ```
/// use ring_list::{DataNode, LinkedList};
///
/// let mut list = LinkedList::new();
/// list.append(DataNode::new(1.5));
/// list.append(DataNode::new(2.0));
///
/// assert_eq!(list.to_string(), "1.5, 2");
/// assert_eq!(list.first().map(DataNode::data), Some(&1.5));
/// ```
#[derive(Clone)]
pub struct DataNode<T> {
    links: Node,
    data: T,
}

impl<T> DataNode<T> {
    pub fn new(data: T) -> Self {
        Self {
            links: Node::new(),
            data,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> Link for DataNode<T> {
    #[inline]
    fn head(&self) -> Option<NodeId> {
        self.links.head()
    }
    #[inline]
    fn tail(&self) -> Option<NodeId> {
        self.links.tail()
    }
    #[inline]
    fn set_head(&mut self, head: Option<NodeId>) {
        self.links.set_head(head);
    }
    #[inline]
    fn set_tail(&mut self, tail: Option<NodeId>) {
        self.links.set_tail(tail);
    }
}

impl<T: fmt::Display> fmt::Display for DataNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for DataNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataNode")
            .field("data", &self.data)
            .field("head", &self.links.head)
            .field("tail", &self.links.tail)
            .finish()
    }
}

impl<T> From<T> for DataNode<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}
