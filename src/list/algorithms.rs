use std::fmt;
use std::iter::FromIterator;

use crate::list::LinkedList;
use crate::node::{Link, NodeId};

impl<N: Link> LinkedList<N> {
    /// Returns the first node, in iteration order, for which `predicate`
    /// returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let list: LinkedList<_> = [3, 8, 5, 10].into_iter().map(DataNode::new).collect();
    ///
    /// assert_eq!(list.find(|node| node.data() % 2 == 0).map(DataNode::data), Some(&8));
    /// assert!(list.find(|node| *node.data() > 10).is_none());
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&N>
    where
        P: FnMut(&N) -> bool,
    {
        self.iter().find(|node| predicate(node))
    }

    /// Returns the position of the node with identity `id`, or `None` if it is
    /// not linked in this list.
    ///
    /// Nodes are compared by identity, never by payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{DataNode, LinkedList};
    ///
    /// let mut list = LinkedList::new();
    /// let a = list.append(DataNode::new(7));
    /// let b = list.append(DataNode::new(7));
    ///
    /// assert_eq!(list.index_of(a), Some(0));
    /// assert_eq!(list.index_of(b), Some(1));
    ///
    /// list.remove(0).unwrap();
    /// assert_eq!(list.index_of(b), Some(0));
    /// ```
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        if !self.contains_id(id) {
            return None;
        }
        self.ids().position(|other| other == id)
    }

    /// Returns `true` if a node with identity `id` is linked in this list.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn contains_id(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Walk the whole chain and panic on the first broken invariant.
    #[cfg(any(test, feature = "check-invariants"))]
    pub(crate) fn assert_invariants(&self) {
        use crate::list::Mode;

        assert_eq!(
            self.nodes.len(),
            self.len,
            "the arena holds nodes outside of the chain"
        );
        let (first, last) = match (self.first, self.last) {
            (None, None) => {
                assert_eq!(self.len, 0, "an empty chain has a non-zero length");
                return;
            }
            (Some(first), Some(last)) => (first, last),
            (first, last) => panic!("mismatched ends: first {:?}, last {:?}", first, last),
        };
        let (wrap_head, wrap_tail) = match self.mode {
            Mode::Ring => (Some(first), Some(last)),
            Mode::Linear => (None, None),
        };
        assert_eq!(self.link(last).head(), wrap_head, "bad head of `last`");
        assert_eq!(self.link(first).tail(), wrap_tail, "bad tail of `first`");

        let mut current = first;
        let mut count = 1;
        while current != last {
            let next = match self.link(current).head() {
                Some(next) => next,
                None => panic!("chain ends at {:?} before reaching `last`", current),
            };
            assert_ne!(next, first, "chain wraps before reaching `last`");
            assert_eq!(
                self.link(next).tail(),
                Some(current),
                "{:?} and {:?} are not adjacent",
                current,
                next
            );
            current = next;
            count += 1;
            assert!(count <= self.len, "chain is longer than its length");
        }
        assert_eq!(count, self.len, "chain is shorter than its length");
    }
}

/// Renders the nodes in iteration order, joined by `", "`.
impl<N: Link + fmt::Display> fmt::Display for LinkedList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(node, f)?;
        }
        Ok(())
    }
}

impl<N: Link> FromIterator<N> for LinkedList<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<N: Link> Extend<N> for LinkedList<N> {
    /// Appends every node; in a ring each one lands right before `first`.
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.append(node);
        }
    }
}
